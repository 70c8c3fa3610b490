//! Coercing free model text into post records.
//!
//! Model output is free text with no guarantee of structure. Parsing tries
//! the whole string as a JSON array first, then the span from the first `[`
//! to the last `]`. Anything else is reported as `None`, which is an expected
//! outcome rather than an error.

use postsmith_core::PostRecord;
use serde_json::Value;
use tracing::debug;

/// Interpret `raw` as a JSON array, returning its elements untouched.
///
/// Returns `None` when neither the whole text nor the outermost bracketed
/// span parses as an array. A parsed span is returned wholesale; malformed
/// elements are not salvaged individually.
///
/// # Examples
///
/// ```
/// use postsmith_generation::parse_structured;
///
/// let items = parse_structured("Sure! [{\"idea\": \"a\"}] Enjoy.").unwrap();
/// assert_eq!(items.len(), 1);
///
/// assert!(parse_structured("just plain text").is_none());
/// ```
pub fn parse_structured(raw: &str) -> Option<Vec<Value>> {
    if let Some(items) = parse_array(raw) {
        return Some(items);
    }

    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end <= start {
        debug!(start, end, "Closing bracket precedes opening bracket");
        return None;
    }

    parse_array(&raw[start..=end])
}

fn parse_array(text: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => Some(items),
        Ok(other) => {
            debug!(kind = value_kind(&other), "Parsed JSON is not an array");
            None
        }
        Err(e) => {
            debug!(error = %e, length = text.len(), "Text is not valid JSON");
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse `raw` and coerce every element into a fully formed [`PostRecord`].
///
/// # Examples
///
/// ```
/// use postsmith_generation::normalize;
///
/// let posts = normalize(r##"[{"idea": "a", "hashtags": "#x #y"}]"##).unwrap();
/// assert_eq!(posts[0].idea, "a");
/// assert_eq!(posts[0].caption, "");
/// assert_eq!(posts[0].hashtags, ["#x", "#y"]);
/// ```
pub fn normalize(raw: &str) -> Option<Vec<PostRecord>> {
    parse_structured(raw).map(|items| items.into_iter().map(post_from_value).collect())
}

/// Coerce one loosely typed element into a [`PostRecord`].
///
/// Missing fields default to empty. Non-string scalars are rendered as JSON
/// text, a hashtag string is split on whitespace, and a non-object element
/// becomes the idea of an otherwise empty record.
pub fn post_from_value(value: Value) -> PostRecord {
    match value {
        Value::Object(mut fields) => PostRecord {
            idea: fields.remove("idea").map(text_field).unwrap_or_default(),
            caption: fields.remove("caption").map(text_field).unwrap_or_default(),
            hashtags: fields
                .remove("hashtags")
                .map(hashtag_field)
                .unwrap_or_default(),
        },
        other => PostRecord {
            idea: text_field(other),
            ..PostRecord::default()
        },
    }
}

fn text_field(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn hashtag_field(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.into_iter().map(text_field).collect(),
        Value::String(line) => line.split_whitespace().map(str::to_string).collect(),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_text_array_parses() {
        let items = parse_structured(r#"[{"idea":"a","caption":"b","hashtags":[]}]"#).unwrap();
        assert_eq!(items, vec![json!({"idea":"a","caption":"b","hashtags":[]})]);
    }

    #[test]
    fn bracketed_span_is_extracted_from_noise() {
        let raw = r#"preamble noise [{"idea":"a","caption":"b","hashtags":[]}] trailing noise"#;
        let items = parse_structured(raw).unwrap();
        assert_eq!(items, vec![json!({"idea":"a","caption":"b","hashtags":[]})]);
    }

    #[test]
    fn fenced_code_block_is_extracted() {
        let raw = "Here you go:\n```json\n[{\"idea\": \"fenced\"}]\n```\n";
        let posts = normalize(raw).unwrap();
        assert_eq!(posts[0].idea, "fenced");
    }

    #[test]
    fn plain_text_is_unparseable() {
        assert!(parse_structured("just plain text").is_none());
    }

    #[test]
    fn reversed_brackets_are_unparseable() {
        assert!(parse_structured("oops ] then [").is_none());
    }

    #[test]
    fn malformed_span_is_not_salvaged() {
        let raw = r#"[{"idea": "good"}, {"idea": broken}]"#;
        assert!(parse_structured(raw).is_none());
    }

    #[test]
    fn object_wrapping_an_array_yields_the_array() {
        let raw = r#"{"posts": [{"idea": "inner"}]}"#;
        let posts = normalize(raw).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].idea, "inner");
    }

    #[test]
    fn lone_object_is_unparseable() {
        assert!(parse_structured(r#"{"idea": "solo"}"#).is_none());
    }

    #[test]
    fn empty_array_is_a_valid_result() {
        assert_eq!(normalize("[]"), Some(Vec::new()));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let posts = normalize(r#"[{"caption": "only caption"}, {}]"#).unwrap();
        assert_eq!(posts[0], PostRecord::new("", "only caption", Vec::<String>::new()));
        assert_eq!(posts[1], PostRecord::default());
    }

    #[test]
    fn loose_values_are_coerced() {
        let posts = normalize(
            r##"["bare idea", {"idea": 7, "caption": null, "hashtags": ["#a", 2]}]"##,
        )
        .unwrap();
        assert_eq!(posts[0].idea, "bare idea");
        assert!(posts[0].caption.is_empty());
        assert_eq!(posts[1].idea, "7");
        assert_eq!(posts[1].caption, "");
        assert_eq!(posts[1].hashtags, ["#a", "2"]);
    }

    #[test]
    fn serialized_result_round_trips() {
        let result = vec![
            PostRecord::new("Idea one", "Line one\nLine two, with \"quotes\"", ["#one", ""]),
            PostRecord::new("Idée ☕", "Ünïcödé caption 🚀", Vec::<String>::new()),
            PostRecord::default(),
        ];
        let text = serde_json::to_string_pretty(&result).unwrap();
        assert_eq!(normalize(&text), Some(result));
    }
}
