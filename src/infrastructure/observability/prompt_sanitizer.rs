const MAX_VISIBLE_CHARS: usize = 100;

const REDACTED_PAIRS: [&str; 5] = ["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Provider key prefixes (OpenAI, Groq) redacted wherever they appear.
const KEY_PREFIXES: [&str; 2] = ["sk-", "gsk_"];

/// Sanitizes user prompts before they reach the logs.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&visible)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let mut result = text.to_string();

    for pattern in REDACTED_PAIRS {
        result = redact_after(&result, pattern, pattern, false);
    }
    for prefix in KEY_PREFIXES {
        result = redact_after(&result, prefix, "", true);
    }

    result
}

/// Replaces every value following `pattern` up to the next delimiter with
/// `<keep>[REDACTED]`. With `word_start`, matches preceded by an
/// alphanumeric character are left alone.
fn redact_after(text: &str, pattern: &str, keep: &str, word_start: bool) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(pattern) {
        let value_start = idx + pattern.len();
        let inside_word = rest[..idx]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric());
        if word_start && inside_word {
            result.push_str(&rest[..value_start]);
            rest = &rest[value_start..];
            continue;
        }

        let value_end = rest[value_start..]
            .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
            .map(|i| value_start + i)
            .unwrap_or(rest.len());

        result.push_str(&rest[..idx]);
        result.push_str(keep);
        result.push_str("[REDACTED]");
        rest = &rest[value_end..];
    }

    result.push_str(rest);
    result
}
