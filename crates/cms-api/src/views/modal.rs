//! Modal dialog.

use super::escape_html;

/// Modal dialog with a title, body, close control and primary action.
///
/// `children` is already-rendered markup and is inserted as is. The
/// `on_close` and `on_click` values name client-side actions and end up in
/// `data-action` attributes.
#[derive(Debug, Clone, Default)]
pub struct AppModal<'a> {
    pub show: bool,
    pub modal_title: &'a str,
    pub children: &'a str,
    pub button_title: &'a str,
    pub is_loading: bool,
    pub on_close: &'a str,
    pub on_click: &'a str,
}

impl AppModal<'_> {
    pub fn render(&self) -> String {
        if !self.show {
            return String::new();
        }

        let spinner = if self.is_loading {
            r#"<span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>"#
        } else {
            ""
        };

        format!(
            concat!(
                r#"<div class="modal fade show d-block" role="dialog" aria-modal="true">"#,
                r#"<div class="modal-dialog modal-dialog-centered modal-lg">"#,
                r#"<div class="modal-content">"#,
                r#"<div class="modal-header modal_header">"#,
                r#"<div class="modal-title h4">{title}</div>"#,
                r#"<button type="button" class="icon_modal_close" aria-label="Close" data-action="{on_close}">&times;</button>"#,
                r#"</div>"#,
                r#"<div class="modal-body">{children}</div>"#,
                r#"<div class="modal-footer modal_header">"#,
                r#"{spinner}<button type="button" class="btn btn-primary btn_modal" data-action="{on_click}">{button_title}</button>"#,
                r#"</div></div></div></div>"#,
            ),
            title = escape_html(self.modal_title),
            on_close = escape_html(self.on_close),
            children = self.children,
            spinner = spinner,
            on_click = escape_html(self.on_click),
            button_title = escape_html(self.button_title),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> AppModal<'static> {
        AppModal {
            show: true,
            modal_title: "Delete entry",
            children: "<p>Are you sure?</p>",
            button_title: "Delete",
            is_loading: false,
            on_close: "close-delete",
            on_click: "confirm-delete",
        }
    }

    #[test]
    fn test_hidden_modal_renders_nothing() {
        let hidden = AppModal {
            show: false,
            ..modal()
        };
        assert!(hidden.render().is_empty());
    }

    #[test]
    fn test_renders_title_body_and_actions() {
        let html = modal().render();

        assert!(html.contains(r#"<div class="modal-title h4">Delete entry</div>"#));
        assert!(html.contains("<p>Are you sure?</p>"));
        assert!(html.contains(r#"data-action="close-delete""#));
        assert!(html.contains(r#"data-action="confirm-delete">Delete</button>"#));
        assert!(!html.contains("spinner-border"));
    }

    #[test]
    fn test_spinner_while_loading() {
        let loading = AppModal {
            is_loading: true,
            ..modal()
        };
        assert!(loading.render().contains("spinner-border"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = AppModal {
            modal_title: "<script>x</script>",
            ..modal()
        }
        .render();

        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
