//! CSV and JSON exports of generated posts.

use chrono::NaiveDateTime;
use postsmith_core::PostRecord;
use postsmith_error::{ExportError, ExportErrorKind};
use std::path::Path;
use tracing::{info, instrument};

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// One row per post, hashtags space-joined
    Csv,
    /// Pretty-printed array of post objects
    Json,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Render posts in this format.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if serialization fails.
    pub fn render(&self, posts: &[PostRecord]) -> Result<String, ExportError> {
        match self {
            ExportFormat::Csv => to_csv(posts),
            ExportFormat::Json => to_json(posts),
        }
    }
}

/// Render posts as CSV with columns `post_no,idea,caption,hashtags`.
///
/// # Examples
///
/// ```
/// use postsmith_core::PostRecord;
/// use postsmith_generation::to_csv;
///
/// let csv = to_csv(&[PostRecord::new("Idea", "Caption", ["#a", "#b"])]).unwrap();
/// assert_eq!(csv, "post_no,idea,caption,hashtags\n1,Idea,Caption,#a #b\n");
/// ```
///
/// # Errors
///
/// Returns an [`ExportError`] if the CSV writer fails.
pub fn to_csv(posts: &[PostRecord]) -> Result<String, ExportError> {
    let csv_error = |e: &dyn std::fmt::Display| ExportError::new(ExportErrorKind::Csv(e.to_string()));

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(["post_no", "idea", "caption", "hashtags"])
        .map_err(|e| csv_error(&e))?;
    for (index, post) in posts.iter().enumerate() {
        writer
            .write_record([
                (index + 1).to_string(),
                post.idea.clone(),
                post.caption.clone(),
                post.hashtag_line(),
            ])
            .map_err(|e| csv_error(&e))?;
    }

    let bytes = writer.into_inner().map_err(|e| csv_error(&e))?;
    String::from_utf8(bytes).map_err(|e| csv_error(&e))
}

/// Render posts as a pretty-printed JSON array.
///
/// Non-ASCII characters are written literally, not escaped.
///
/// # Errors
///
/// Returns an [`ExportError`] if serialization fails.
pub fn to_json(posts: &[PostRecord]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(posts)
        .map_err(|e| ExportError::new(ExportErrorKind::Json(e.to_string())))
}

/// Default download name for an export.
///
/// CSV names carry a minute-resolution timestamp; JSON names do not.
///
/// ```
/// use chrono::NaiveDate;
/// use postsmith_generation::{ExportFormat, export_file_name};
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(14, 5, 0).unwrap();
/// assert_eq!(
///     export_file_name("product launch", ExportFormat::Csv, at),
///     "content_product_launch_20240309_1405.csv"
/// );
/// assert_eq!(
///     export_file_name("product launch", ExportFormat::Json, at),
///     "content_product_launch.json"
/// );
/// ```
pub fn export_file_name(topic: &str, format: ExportFormat, at: NaiveDateTime) -> String {
    let stem = topic.replace(' ', "_");
    match format {
        ExportFormat::Csv => format!("content_{}_{}.csv", stem, at.format("%Y%m%d_%H%M")),
        ExportFormat::Json => format!("content_{}.json", stem),
    }
}

/// Render posts and write them to `path`.
///
/// # Errors
///
/// Returns an [`ExportError`] if rendering or writing fails.
#[instrument(skip(path, posts), fields(path = %path.display(), posts = posts.len()))]
pub fn write_export(
    path: &Path,
    format: ExportFormat,
    posts: &[PostRecord],
) -> Result<(), ExportError> {
    let contents = format.render(posts)?;
    std::fs::write(path, contents).map_err(|e| {
        ExportError::new(ExportErrorKind::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    info!("Export written");
    Ok(())
}
