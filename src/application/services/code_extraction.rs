use std::sync::LazyLock;

use regex::Regex;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:html)?\s*(.*?)```").unwrap());

/// Pulls the first fenced code block out of a completion, trimmed. Text
/// without a complete fence is returned unchanged.
pub fn extract_code(raw: &str) -> String {
    match FENCED_BLOCK.captures(raw).and_then(|c| c.get(1)) {
        Some(block) => block.as_str().trim().to_string(),
        None => raw.to_string(),
    }
}
