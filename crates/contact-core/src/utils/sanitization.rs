/// Input sanitization for form fields
use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<\s*script[^>]*>.*?<\s*/\s*script\s*>").expect("valid script regex")
});

static JAVASCRIPT_PROTOCOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("valid protocol regex"));

static EVENT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=").expect("valid event handler regex"));

/// Sanitizes user input to prevent HTML/script injection
///
/// Script blocks are removed first so their content does not survive,
/// then `javascript:` and inline event handler prefixes are dropped, and
/// finally the remaining HTML special characters are encoded.
///
/// # Examples
/// ```
/// use contact_core::utils::sanitization::sanitize_input;
///
/// assert_eq!(sanitize_input("<script>alert('xss')</script>Hello"), "Hello");
/// assert_eq!(sanitize_input("Bread & Breakfast"), "Bread &amp; Breakfast");
/// assert_eq!(sanitize_input("  John Doe  "), "John Doe");
/// ```
pub fn sanitize_input(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    // Ampersand must be encoded first
    strip_active_content(input)
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .trim()
        .to_string()
}

/// Removes script blocks, `javascript:` and inline event handler prefixes
/// without encoding anything
pub fn strip_active_content(input: &str) -> String {
    let stripped = SCRIPT_BLOCK.replace_all(input, "");
    let stripped = JAVASCRIPT_PROTOCOL.replace_all(&stripped, "");
    EVENT_HANDLER.replace_all(&stripped, "").into_owned()
}
