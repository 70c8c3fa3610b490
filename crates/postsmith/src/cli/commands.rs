//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use postsmith::{ModelChoice, Platform, Tone};
use std::path::PathBuf;

/// Postsmith - social-media post ideas, captions, and hashtags from a topic
#[derive(Parser, Debug)]
#[command(name = "postsmith")]
#[command(about = "Social-media post ideas, captions, and hashtags from a topic", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate post drafts for a topic
    Generate(GenerateArgs),

    /// Show whether live generation is available
    Status {
        /// Model to check (defaults to the configured model)
        #[arg(long)]
        model: Option<ModelChoice>,
    },

    /// List preset topics
    Presets,
}

/// Arguments for `generate`. Unset options fall back to configuration.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Topic or niche
    #[arg(short, long, default_value = "sustainable fashion")]
    pub topic: String,

    /// Target platform (instagram, twitter, linkedin, facebook, tiktok)
    #[arg(short, long)]
    pub platform: Option<Platform>,

    /// Writing tone (friendly, professional, witty, inspirational, informative)
    #[arg(long)]
    pub tone: Option<Tone>,

    /// Number of posts, 1 to 5
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Model id, or `offline` for the built-in library
    #[arg(short, long)]
    pub model: Option<ModelChoice>,

    /// Sampling temperature, 0 to 1
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Use the free-form prompt instead of strict JSON
    #[arg(long)]
    pub relaxed: bool,

    /// Write a CSV export, optionally to PATH
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub csv: Option<Option<PathBuf>>,

    /// Write a JSON export, optionally to PATH
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub json: Option<Option<PathBuf>>,

    /// Output format for stdout
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format for generated posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Post cards with status line
    Human,
    /// Pretty-printed JSON array
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::parse_from(["postsmith", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.topic, "sustainable fashion");
        assert!(args.platform.is_none());
        assert!(args.csv.is_none());
        assert_eq!(args.format, OutputFormat::Human);
    }

    #[test]
    fn test_generate_options() {
        let cli = Cli::parse_from([
            "postsmith",
            "generate",
            "--topic",
            "product launch",
            "--platform",
            "twitter",
            "--tone",
            "witty",
            "-n",
            "2",
            "--model",
            "offline",
            "--csv",
            "--json",
            "out.json",
            "-v",
        ]);
        assert!(cli.verbose);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.platform, Some(Platform::TwitterX));
        assert_eq!(args.tone, Some(Tone::Witty));
        assert_eq!(args.count, Some(2));
        assert_eq!(args.model, Some(ModelChoice::Offline));
        assert_eq!(args.csv, Some(None));
        assert_eq!(args.json, Some(Some(PathBuf::from("out.json"))));
    }
}
