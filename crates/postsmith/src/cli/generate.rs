//! The `generate` command.

use super::commands::GenerateArgs;
use super::render::render_streams;
use postsmith::{
    BuilderError, ExportFormat, GenerationOutcome, PostRecord, PostsmithConfig,
    PostsmithResult, export_file_name, write_export,
};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Run one generation and print or export the result.
///
/// # Errors
///
/// Returns error if the arguments do not form a valid request or an export
/// cannot be written. Live generation failures are reported in the status
/// line instead.
#[instrument(skip_all, fields(topic = %args.topic))]
pub async fn run_generate(config: &PostsmithConfig, args: GenerateArgs) -> PostsmithResult<()> {
    let mut builder = config.request_builder();
    builder.topic(args.topic.clone());
    if let Some(platform) = args.platform {
        builder.platform(platform);
    }
    if let Some(tone) = args.tone {
        builder.tone(tone);
    }
    if let Some(count) = args.count {
        builder.count(count);
    }
    if let Some(model) = args.model {
        builder.model_choice(model);
    }
    if let Some(temperature) = args.temperature {
        builder.temperature(temperature);
    }
    if args.relaxed {
        builder.strict_mode(false);
    }
    let request = builder
        .build()
        .map_err(|e| BuilderError::from(e.to_string()))?;
    debug!(?request, "Request built");

    let outcome = config.pipeline().generate(&request).await;
    info!(status = %outcome.status(), posts = outcome.posts().len(), "Generation finished");

    let (stdout, stderr) = render_streams(&outcome, args.format)?;
    eprint!("{}", stderr);
    print!("{}", stdout);

    export_if_requested(&outcome, request.topic(), ExportFormat::Csv, args.csv)?;
    export_if_requested(&outcome, request.topic(), ExportFormat::Json, args.json)?;

    Ok(())
}

fn export_if_requested(
    outcome: &GenerationOutcome,
    topic: &str,
    format: ExportFormat,
    target: Option<Option<PathBuf>>,
) -> PostsmithResult<()> {
    let Some(target) = target else {
        return Ok(());
    };
    let posts: &[PostRecord] = outcome.posts();
    let path = target.unwrap_or_else(|| {
        PathBuf::from(export_file_name(
            topic,
            format,
            chrono::Local::now().naive_local(),
        ))
    });
    write_export(&path, format, posts)?;
    eprintln!("Wrote {} export to {}", format, path.display());
    Ok(())
}
