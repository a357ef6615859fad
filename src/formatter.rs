use std::sync::LazyLock;

use regex::Regex;

/// Jira comments are capped around 32KB; stay well under with margin.
const MAX_COMMENT_CHARS: usize = 15_000;

const EMPTY_OUTPUT_PLACEHOLDER: &str = "⚠️ No output received from the AI model.";
const LINKS_HEADING: &str = "🔗 Quick Access Links";
const TRUNCATION_NOTICE: &str = "\n\n⚠️ Output truncated due to length.";

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

/// Clean up the model output before posting it as a Jira comment.
///
/// Trims surrounding whitespace, appends a links section when the text
/// contains any http(s) URLs, and hard-truncates overly long output. Total
/// over all inputs: empty input becomes a fixed placeholder, never an error.
///
/// Only literally empty input short-circuits to the placeholder;
/// whitespace-only input trims down to an empty body.
pub fn format_response(raw: &str) -> String {
    if raw.is_empty() {
        return EMPTY_OUTPUT_PLACEHOLDER.to_string();
    }

    let cleaned = raw.trim();
    let links = extract_links(cleaned);

    let mut body = cleaned.to_string();
    if !links.is_empty() {
        body.push_str("\n\n---\n");
        body.push_str(LINKS_HEADING);
        for link in &links {
            body.push_str("\n- ");
            body.push_str(link);
        }
    }

    truncate_comment(body)
}

/// Collect every http(s) URL in the text, greedy up to the next whitespace,
/// in order of appearance and keeping duplicates.
pub fn extract_links(text: &str) -> Vec<&str> {
    URL_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Hard cut at the character limit, not word-aware. The truncation notice is
/// appended on top of the limit, never counted against it.
fn truncate_comment(body: String) -> String {
    match body.char_indices().nth(MAX_COMMENT_CHARS) {
        Some((cut, _)) => {
            let mut out = body;
            out.truncate(cut);
            out.push_str(TRUNCATION_NOTICE);
            out
        }
        None => body,
    }
}
