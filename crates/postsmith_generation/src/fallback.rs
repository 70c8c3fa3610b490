//! Deterministic post library used whenever the live generator is not.

use postsmith_core::PostRecord;
use std::collections::HashMap;
use std::sync::OnceLock;

static LIBRARY: OnceLock<HashMap<&'static str, Vec<PostRecord>>> = OnceLock::new();

fn library() -> &'static HashMap<&'static str, Vec<PostRecord>> {
    LIBRARY.get_or_init(|| {
        HashMap::from([
            (
                "sustainable fashion",
                vec![
                    PostRecord::new(
                        "Upcycle denim into an everyday bag",
                        "Turn old jeans into a new favorite — DIY upcycled denim bag in 3 easy steps 🧵♻️. Reduce waste, look great, and save money. Tap for the mini guide!",
                        [
                            "#sustainablefashion",
                            "#upcycle",
                            "#ecofriendly",
                            "#diyfashion",
                            "#slowfashion",
                        ],
                    ),
                    PostRecord::new(
                        "Capsule wardrobe staples",
                        "Less is more. Build a capsule wardrobe with 10 timeless pieces that mix & match for every season. Save space, time, and the planet 🌍✨.",
                        [
                            "#capsulewardrobe",
                            "#sustainablefashion",
                            "#minimalism",
                            "#ethicalstyle",
                            "#consciousliving",
                        ],
                    ),
                ],
            ),
            (
                "product launch",
                vec![PostRecord::new(
                    "Sneak-peek demo video",
                    "We’re launching something new — here’s a 15s sneak peek! Sign up for early access. 🚀",
                    [
                        "#productlaunch",
                        "#startup",
                        "#comingsoon",
                        "#innovation",
                        "#signup",
                    ],
                )],
            ),
        ])
    })
}

/// Topics with hand-written posts, in no particular order.
pub fn known_topics() -> Vec<&'static str> {
    library().keys().copied().collect()
}

/// Produce posts without any external dependency.
///
/// A topic matching the authored library (case-insensitively) returns the
/// first `count` authored posts, which may be fewer than `count`. Any other
/// topic yields exactly `count` templated posts.
///
/// # Examples
///
/// ```
/// use postsmith_generation::fallback_generate;
///
/// let posts = fallback_generate("Sustainable Fashion", 1);
/// assert_eq!(posts[0].idea, "Upcycle denim into an everyday bag");
///
/// let posts = fallback_generate("home brewing", 2);
/// assert_eq!(posts[1].idea, "home brewing idea #2");
/// assert_eq!(posts[1].hashtags[0], "#homebrewing");
/// ```
pub fn fallback_generate(topic: &str, count: usize) -> Vec<PostRecord> {
    if let Some(authored) = library().get(topic.to_lowercase().as_str()) {
        return authored.iter().take(count).cloned().collect();
    }

    let topic_tag = format!("#{}", topic.replace(' ', ""));
    (1..=count)
        .map(|n| {
            PostRecord::new(
                format!("{} idea #{}", topic, n),
                format!("Sample caption for {} — short, catchy, ready to post.", topic),
                [
                    topic_tag.as_str(),
                    "#trending",
                    "#mustread",
                    "#tips",
                    "#daily",
                ],
            )
        })
        .collect()
}
