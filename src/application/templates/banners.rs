/// Yellow banner explaining that the provider quota is exhausted and a demo
/// component is shown instead.
pub fn quota_banner(message: &str, details: Option<&str>) -> String {
    let details = details
        .map(|d| format!("<p class=\"text-sm mb-2\">{}</p>", escape_html(d)))
        .unwrap_or_default();

    format!(
        r##"
<div class="p-4 my-4 bg-yellow-50 text-yellow-800 border border-yellow-200 rounded-lg shadow-sm">
  <h2 class="text-lg font-semibold mb-2">API quota exceeded</h2>
  <p class="mb-2">{message}</p>
  {details}
  <p class="text-sm">
    <strong>This demo component is shown because the API quota is exceeded.</strong>
    Available options:
  </p>
  <ul class="list-disc ml-5 mt-2 text-sm">
    <li>Check the billing plan of the API in use</li>
    <li>Add a payment method to your account</li>
    <li>Configure an alternative API in the <a href="/config" class="text-blue-600 hover:underline">configuration panel</a></li>
  </ul>
</div>"##,
        message = escape_html(message),
        details = details,
    )
}

/// Red banner with a collapsible technical-details block.
pub fn error_banner(message: &str, technical_details: &str) -> String {
    format!(
        r##"
<div class="p-4 my-4 bg-red-50 text-red-800 border border-red-200 rounded-lg shadow-sm">
  <h2 class="text-lg font-semibold mb-2">Error while generating the component</h2>
  <p class="mb-2">{message}</p>
  <details class="mt-2">
    <summary class="cursor-pointer text-sm text-red-600 hover:underline">Technical details for debugging</summary>
    <div class="mt-2 p-2 bg-red-100 text-red-700 rounded text-xs font-mono">
      {technical_details}
    </div>
  </details>
  <p class="mt-4 text-sm">
    Check the API configuration in the
    <a href="/config" class="text-blue-600 hover:underline">configuration panel</a>.
  </p>
</div>
"##,
        message = escape_html(message),
        technical_details = escape_html(technical_details),
    )
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
