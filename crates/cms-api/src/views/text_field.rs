//! Labeled text input with an adjacent error slot.

use super::{escape_html, FieldType};

/// Text input bound to a named form field.
///
/// [`TextField::on_change`] stores the value and runs the field type's
/// validator; its message shows up in the error slot on the next render.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub name: String,
    pub label: Option<String>,
    pub field_type: FieldType,
    pub class_name: Option<String>,
    pub value: String,
    pub error: Option<String>,
}

impl TextField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Take a new value and re-validate.
    pub fn on_change(&mut self, value: &str) {
        self.value = value.to_string();
        self.error = self.field_type.validate(value).map(str::to_string);
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn render(&self) -> String {
        let name = escape_html(&self.name);
        let mut html = String::new();

        if let Some(label) = &self.label {
            html.push_str(&format!(
                r#"<label for="{name}">{label}</label>"#,
                name = name,
                label = escape_html(label)
            ));
        }

        let class = match &self.class_name {
            Some(extra) => format!("input_text mb-2 {}", escape_html(extra)),
            None => "input_text mb-2".to_string(),
        };
        html.push_str(&format!(
            r#"<input type="text" id="{name}" name="{name}" class="{class}" value="{value}">"#,
            name = name,
            class = class,
            value = escape_html(&self.value)
        ));

        if let Some(error) = &self.error {
            html.push_str(&format!(
                r#"<div class="error_message text-danger" data-field="{name}">{error}</div>"#,
                name = name,
                error = escape_html(error)
            ));
        }

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_label_and_input() {
        let field = TextField::new("title", FieldType::Text)
            .with_label("Title")
            .with_class("w-100");
        let html = field.render();

        assert!(html.starts_with(r#"<label for="title">Title</label>"#));
        assert!(html.contains(r#"name="title" class="input_text mb-2 w-100" value="""#));
        assert!(!html.contains("error_message"));
    }

    #[test]
    fn test_on_change_runs_validator() {
        let mut field = TextField::new("email", FieldType::Email);

        field.on_change("not-an-email");
        assert!(!field.is_valid());
        assert!(field.render().contains("Please enter a valid email address."));

        field.on_change("jane@example.com");
        assert!(field.is_valid());
        assert!(field.render().contains(r#"value="jane@example.com""#));
    }

    #[test]
    fn test_value_is_escaped() {
        let mut field = TextField::new("title", FieldType::Text);
        field.on_change(r#""><script>"#);

        let html = field.render();
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }
}
