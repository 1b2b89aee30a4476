//! Server-side renderers for shared admin UI pieces.
//!
//! Renderers are pure: the same props always produce the same markup.

mod field_type;
mod modal;
mod text_field;

pub use field_type::FieldType;
pub use modal::AppModal;
pub use text_field::TextField;

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
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
