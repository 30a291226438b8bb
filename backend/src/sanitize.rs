//! Output sanitization for user-supplied text

/// Escape HTML-significant characters so the text renders inert
///
/// `<`, `>` and `&` are encoded, so an entity already present in the input
/// comes back encoded once more.
pub fn escape_html(input: &str) -> String {
    html_escape::encode_text(input).into_owned()
}
