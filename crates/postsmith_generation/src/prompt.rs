//! Prompt templates for the live generator.
//!
//! Templates are plain text with `{name}` placeholders. The renderer knows
//! `topic`, `platform`, `tone`, and `count`. `{{` and `}}` render as literal
//! braces. Any other name, and any lone brace outside a placeholder, is a
//! [`TemplateError`].

use postsmith_core::GenerationRequest;
use postsmith_error::{TemplateError, TemplateErrorKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Template asking for a bare JSON array and nothing else.
pub const STRICT_TEMPLATE: &str = "You are a JSON-producing social media writer.
Return ONLY a strict JSON array of objects, no extra text or commentary.
Each object must have: idea (one-line), caption (string), hashtags (array of strings).
Topic: {topic}
Platform: {platform}
Tone: {tone}
Count: {count}
";

/// Descriptive template with platform guidance.
pub const RELAXED_TEMPLATE: &str = "You are a creative social media content writer.
Given a topic, platform, tone and requested number of posts, produce for each post:
1) A short content idea (one line).
2) A caption (max 220 words).
3) 5 relevant hashtags.
Keep captions platform-appropriate (Instagram: engaging + emojis; X: concise; LinkedIn: professional).
Output as a JSON array with fields: idea, caption, hashtags.
Topic: {topic}
Platform: {platform}
Tone: {tone}
Count: {count}
";

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{|\}\}|\{([^{}]*)\}").expect("Valid placeholder regex")
    })
}

/// Values substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptVars {
    topic: String,
    platform: String,
    tone: String,
    count: String,
}

impl PromptVars {
    /// Placeholder values from explicit parts.
    pub fn new(
        topic: impl Into<String>,
        platform: impl Into<String>,
        tone: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            topic: topic.into(),
            platform: platform.into(),
            tone: tone.into(),
            count: count.to_string(),
        }
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "topic" => Some(&self.topic),
            "platform" => Some(&self.platform),
            "tone" => Some(&self.tone),
            "count" => Some(&self.count),
            _ => None,
        }
    }
}

impl From<&GenerationRequest> for PromptVars {
    fn from(request: &GenerationRequest) -> Self {
        Self::new(
            request.topic().clone(),
            request.platform().to_string(),
            request.tone().to_string(),
            *request.count(),
        )
    }
}

/// A prompt template.
///
/// # Examples
///
/// ```
/// use postsmith_generation::{PromptTemplate, PromptVars};
///
/// let template = PromptTemplate::new("Write {count} posts about {topic}.");
/// let vars = PromptVars::new("tea", "Instagram", "Witty", 2);
/// assert_eq!(template.render(&vars).unwrap(), "Write 2 posts about tea.");
///
/// assert!(PromptTemplate::new("Hello {name}").render(&vars).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    /// Wrap template text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw template text.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Substitute every placeholder.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for unknown placeholder names or braces
    /// that do not form a placeholder.
    pub fn render(&self, vars: &PromptVars) -> Result<String, TemplateError> {
        let text = self.0.as_str();
        let mut rendered = String::with_capacity(text.len() + 64);
        let mut last = 0;

        for caps in placeholder().captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let literal = &text[last..whole.start()];
            check_literal(literal, last)?;
            rendered.push_str(literal);
            last = whole.end();

            // Escaped braces
            let Some(name) = caps.get(1) else {
                rendered.push_str(&whole.as_str()[..1]);
                continue;
            };

            let name = name.as_str().trim();
            let value = vars.lookup(name).ok_or_else(|| {
                TemplateError::new(TemplateErrorKind::UnknownPlaceholder(name.to_string()))
            })?;
            rendered.push_str(value);
        }

        let tail = &text[last..];
        check_literal(tail, last)?;
        rendered.push_str(tail);
        Ok(rendered)
    }

    /// Check the template renders, without keeping the output.
    ///
    /// # Errors
    ///
    /// Returns the error [`PromptTemplate::render`] would.
    pub fn validate(&self) -> Result<(), TemplateError> {
        self.render(&PromptVars::new("topic", "platform", "tone", 1))
            .map(|_| ())
    }
}

fn check_literal(segment: &str, offset: usize) -> Result<(), TemplateError> {
    if let Some(pos) = segment.find('{') {
        return Err(TemplateError::new(TemplateErrorKind::Unterminated(offset + pos)));
    }
    if let Some(pos) = segment.find('}') {
        return Err(TemplateError::new(TemplateErrorKind::StrayClose(offset + pos)));
    }
    Ok(())
}

/// The strict and relaxed templates a pipeline chooses between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSet {
    /// Used when the request asks for strict JSON
    pub strict: PromptTemplate,
    /// Used otherwise
    pub relaxed: PromptTemplate,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            strict: PromptTemplate::new(STRICT_TEMPLATE),
            relaxed: PromptTemplate::new(RELAXED_TEMPLATE),
        }
    }
}

impl PromptSet {
    /// Template for the given strictness flag.
    pub fn for_mode(&self, strict: bool) -> &PromptTemplate {
        if strict { &self.strict } else { &self.relaxed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postsmith_core::{Platform, Tone};

    fn vars() -> PromptVars {
        PromptVars::new("sustainable fashion", "Twitter/X", "Witty", 3)
    }

    #[test]
    fn builtin_templates_render_every_field() {
        for template in [STRICT_TEMPLATE, RELAXED_TEMPLATE] {
            let prompt = PromptTemplate::new(template).render(&vars()).unwrap();
            assert!(prompt.contains("Topic: sustainable fashion\n"));
            assert!(prompt.contains("Platform: Twitter/X\n"));
            assert!(prompt.contains("Tone: Witty\n"));
            assert!(prompt.contains("Count: 3\n"));
            assert!(!prompt.contains('{'));
        }
    }

    #[test]
    fn vars_come_from_request_display_names() {
        let request = GenerationRequest::builder()
            .topic("tea")
            .platform(Platform::TwitterX)
            .tone(Tone::Inspirational)
            .count(4)
            .build()
            .unwrap();
        assert_eq!(
            PromptVars::from(&request),
            PromptVars::new("tea", "Twitter/X", "Inspirational", 4)
        );
    }

    #[test]
    fn placeholder_names_may_be_padded() {
        let prompt = PromptTemplate::new("{ topic }!").render(&vars()).unwrap();
        assert_eq!(prompt, "sustainable fashion!");
    }

    #[test]
    fn substituted_values_are_not_reinterpreted() {
        let vars = PromptVars::new("{tone}", "p", "t", 1);
        let prompt = PromptTemplate::new("{topic}").render(&vars).unwrap();
        assert_eq!(prompt, "{tone}");
    }

    #[test]
    fn unknown_placeholder_fails() {
        let err = PromptTemplate::new("Write about {subject}")
            .render(&vars())
            .unwrap_err();
        assert_eq!(
            err.kind,
            TemplateErrorKind::UnknownPlaceholder("subject".to_string())
        );
    }

    #[test]
    fn unterminated_brace_fails() {
        let err = PromptTemplate::new("Topic: {topic").validate().unwrap_err();
        assert_eq!(err.kind, TemplateErrorKind::Unterminated(7));
    }

    #[test]
    fn stray_close_fails() {
        let err = PromptTemplate::new("{topic} }").validate().unwrap_err();
        assert_eq!(err.kind, TemplateErrorKind::StrayClose(8));
    }

    #[test]
    fn doubled_braces_render_literally() {
        let prompt = PromptTemplate::new(r#"Return like [{{"idea": "x"}}] about {topic}"#)
            .render(&vars())
            .unwrap();
        assert_eq!(prompt, r#"Return like [{"idea": "x"}] about sustainable fashion"#);
    }

    #[test]
    fn escaped_braces_around_placeholder() {
        let prompt = PromptTemplate::new("{{{topic}}} and {{topic}}")
            .render(&vars())
            .unwrap();
        assert_eq!(prompt, "{sustainable fashion} and {topic}");
    }

    #[test]
    fn lone_close_after_placeholder_still_fails() {
        let err = PromptTemplate::new("{count}}").validate().unwrap_err();
        assert_eq!(err.kind, TemplateErrorKind::StrayClose(7));
    }

    #[test]
    fn prompt_set_picks_by_mode() {
        let prompts = PromptSet::default();
        assert!(prompts.for_mode(true).text().contains("strict JSON array"));
        assert!(prompts.for_mode(false).text().contains("creative social media"));
    }
}
