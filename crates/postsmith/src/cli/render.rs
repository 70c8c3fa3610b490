//! Terminal rendering of generation outcomes.

use super::commands::OutputFormat;
use postsmith::{ExportError, GenerationOutcome, GenerationStatus, PostRecord, to_json};

/// Status line, prefixed by severity.
pub fn status_line(status: &GenerationStatus) -> String {
    let prefix = if status.is_warning() { "Warning" } else { "Info" };
    format!("{}: {}", prefix, status)
}

/// One post as a card: numbered idea, caption, hashtags.
pub fn post_card(number: usize, post: &PostRecord) -> String {
    let mut card = format!("Post {}: {}\n{}", number, post.idea, post.caption);
    let hashtags = post.hashtag_line();
    if !hashtags.is_empty() {
        card.push('\n');
        card.push_str(&hashtags);
    }
    card
}

/// Status line, followed by the raw model output when the heuristic ran.
pub fn status_report(outcome: &GenerationOutcome) -> String {
    let mut out = status_line(outcome.status());
    out.push('\n');

    if let Some(raw) = outcome.raw_output() {
        out.push_str("\nRaw model output:\n");
        out.push_str(raw);
        out.push('\n');
    }
    out
}

/// Full human-readable report for an outcome.
pub fn render_outcome(outcome: &GenerationOutcome) -> String {
    let mut out = status_report(outcome);

    if outcome.posts().is_empty() {
        out.push_str("\nNo posts generated.\n");
        return out;
    }

    out.push_str("\nGenerated posts\n");
    for (i, post) in outcome.posts().iter().enumerate() {
        out.push_str(&format!("{:-<60}\n", ""));
        out.push_str(&post_card(i + 1, post));
        out.push('\n');
    }
    out.push_str(&format!("{:-<60}\n", ""));
    out
}

/// Text for stdout and stderr in the chosen output format.
///
/// JSON mode keeps stdout a bare JSON array and moves the status line and
/// any raw model output to stderr.
pub fn render_streams(
    outcome: &GenerationOutcome,
    format: OutputFormat,
) -> Result<(String, String), ExportError> {
    match format {
        OutputFormat::Human => Ok((render_outcome(outcome), String::new())),
        OutputFormat::Json => {
            let mut stdout = to_json(outcome.posts())?;
            stdout.push('\n');
            Ok((stdout, status_report(outcome)))
        }
    }
}
