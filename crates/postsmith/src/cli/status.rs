//! Live generation status.

use postsmith::{ModelChoice, PostsmithConfig};

/// Print whether a live call would be attempted for `model`.
pub fn show_status(config: &PostsmithConfig, model: Option<ModelChoice>) {
    let model = model.unwrap_or(config.generation.model);
    println!("Model: {}", model);
    if model.is_offline() {
        println!("Offline mode selected (no API calls)");
        return;
    }

    let availability = config.pipeline().availability();
    if availability.is_available() {
        println!("{}", availability);
        println!("Endpoint: {}", config.openai.endpoint);
    } else {
        println!("Warning: {}", availability);
        println!("Requests will use the offline fallback.");
    }
}
