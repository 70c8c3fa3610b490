//! Preset topic listing.

use postsmith::known_topics;

/// Topics offered as quick starts.
pub const PRESET_TOPICS: [&str; 3] = ["sustainable fashion", "product launch", "mental health tips"];

/// Print the preset topics, marking those with hand-written offline drafts.
pub fn list_presets() {
    let authored = known_topics();
    println!("Preset topics:");
    for topic in PRESET_TOPICS {
        if authored.contains(&topic) {
            println!("  {} (offline drafts available)", topic);
        } else {
            println!("  {}", topic);
        }
    }
}
