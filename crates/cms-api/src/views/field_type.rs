//! Type-specific validation for form fields.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid number pattern"));
static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug pattern"));

/// Kind of value a text field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Number,
    Slug,
}

impl FieldType {
    /// Error message for `value`, or `None` when it is acceptable.
    ///
    /// Empty values pass; whether a field is required is checked elsewhere.
    pub fn validate(&self, value: &str) -> Option<&'static str> {
        if value.is_empty() {
            return None;
        }

        let (pattern, message) = match self {
            FieldType::Text => return None,
            FieldType::Email => (&*EMAIL, "Please enter a valid email address."),
            FieldType::Number => (&*NUMBER, "Please enter a valid number."),
            FieldType::Slug => (
                &*SLUG,
                "Use lowercase letters, numbers and single hyphens only.",
            ),
        };

        (!pattern.is_match(value)).then_some(message)
    }
}
