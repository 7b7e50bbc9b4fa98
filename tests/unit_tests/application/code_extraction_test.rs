use pagecraft::application::services::extract_code;

#[test]
fn given_html_fence_when_extracting_then_returns_trimmed_block() {
    let raw = "Here you go:\n```html\n  <div class=\"p-4\">Hi</div>\n```\nEnjoy!";
    assert_eq!(extract_code(raw), "<div class=\"p-4\">Hi</div>");
}

#[test]
fn given_untagged_fence_when_extracting_then_returns_block() {
    let raw = "```\n<section>Body</section>\n```";
    assert_eq!(extract_code(raw), "<section>Body</section>");
}

#[test]
fn given_several_blocks_when_extracting_then_returns_first_only() {
    let raw = "```html\n<header></header>\n```\ntext\n```html\n<footer></footer>\n```";
    assert_eq!(extract_code(raw), "<header></header>");
}

#[test]
fn given_text_without_fence_when_extracting_then_returns_input_unchanged() {
    let raw = "  <div>plain</div>\n";
    assert_eq!(extract_code(raw), raw);
}

#[test]
fn given_unterminated_fence_when_extracting_then_returns_input_unchanged() {
    let raw = "```html\n<div>never closed</div>";
    assert_eq!(extract_code(raw), raw);
}
