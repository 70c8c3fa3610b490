//! Postsmith CLI binary.
//!
//! - Generate post drafts for a topic, live or offline
//! - Report whether live generation is available
//! - List preset topics

use clap::Parser;
use postsmith::{PostsmithConfig, telemetry::init_console_telemetry};
use tracing::debug;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_presets, run_generate, show_status};

    // OPENAI_API_KEY and RUST_LOG may live in .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_console_telemetry(cli.verbose)?;
    debug!(command = ?cli.command, "Starting postsmith");

    let config = match &cli.config {
        Some(path) => PostsmithConfig::from_file(path)?,
        None => PostsmithConfig::load()?,
    };

    match cli.command {
        Commands::Generate(args) => {
            run_generate(&config, args).await?;
        }

        Commands::Status { model } => {
            show_status(&config, model);
        }

        Commands::Presets => {
            list_presets();
        }
    }

    Ok(())
}
