//! Best-effort recovery of posts from text that would not parse.

use postsmith_core::PostRecord;

/// Longest idea, in characters, taken from a block's first line.
pub const IDEA_MAX_CHARS: usize = 80;

/// Split `raw` into posts on blank-line boundaries.
///
/// Whitespace-only blocks are skipped and at most `count` blocks are used.
/// Each post's idea is the block's first line cut to [`IDEA_MAX_CHARS`]
/// characters, its caption is the whole block, and it has no hashtags.
///
/// # Examples
///
/// ```
/// use postsmith_generation::heuristic_posts;
///
/// let posts = heuristic_posts("Idea A\nmore\n\nIdea B", 5);
/// assert_eq!(posts.len(), 2);
/// assert_eq!(posts[0].idea, "Idea A");
/// assert_eq!(posts[0].caption, "Idea A\nmore");
/// ```
pub fn heuristic_posts(raw: &str, count: usize) -> Vec<PostRecord> {
    raw.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .take(count)
        .map(|block| {
            let first_line = block.lines().next().unwrap_or_default();
            PostRecord {
                idea: first_line.chars().take(IDEA_MAX_CHARS).collect(),
                caption: block.to_string(),
                hashtags: Vec::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_blocks_into_posts() {
        let raw = "Idea A line1\ncaption text\n\nIdea B line1\ncaption text";
        let posts = heuristic_posts(raw, 2);

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].idea, "Idea A line1");
        assert_eq!(posts[0].caption, "Idea A line1\ncaption text");
        assert_eq!(posts[1].idea, "Idea B line1");
        assert_eq!(posts[1].caption, "Idea B line1\ncaption text");
        assert!(posts.iter().all(|p| p.hashtags.is_empty()));
    }

    #[test]
    fn takes_at_most_count_blocks() {
        let posts = heuristic_posts("a\n\nb\n\nc\n\nd", 3);
        let ideas: Vec<&str> = posts.iter().map(|p| p.idea.as_str()).collect();
        assert_eq!(ideas, ["a", "b", "c"]);
    }

    #[test]
    fn skips_blank_blocks() {
        let posts = heuristic_posts("\n\n   \n\nreal block\n\n\n\n", 5);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].idea, "real block");
    }

    #[test]
    fn truncates_long_first_lines_by_character() {
        let line = "é".repeat(120);
        let posts = heuristic_posts(&line, 1);
        assert_eq!(posts[0].idea.chars().count(), IDEA_MAX_CHARS);
        assert_eq!(posts[0].caption, line);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(heuristic_posts("", 3).is_empty());
    }
}
