//! Reply post-processing: wrap code-looking text in a fence.
//!
//! The markers mirror the source tokens the plugin has always keyed on.
//! A reply that already carries a fence anywhere is left untouched.

const CODE_MARKERS: [&str; 5] = ["function", "const", "let", "var", "=>"];
const FENCE: &str = "```";

pub fn looks_like_code(text: &str) -> bool {
    CODE_MARKERS.iter().any(|m| text.contains(m))
}

/// Wrap `text` in a ```js fence when it looks like code and is not
/// already fenced.
pub fn wrap_if_code(text: String) -> String {
    if looks_like_code(&text) && !text.contains(FENCE) {
        format!("```js\n{}\n```", text)
    } else {
        text
    }
}
