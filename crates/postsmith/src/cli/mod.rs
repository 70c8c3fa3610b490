//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the postsmith binary.

mod commands;
mod generate;
mod presets;
mod render;
mod status;

pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use presets::list_presets;
pub use status::show_status;
