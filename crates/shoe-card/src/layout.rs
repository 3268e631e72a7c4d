//! Card grid and preview page shell.

use crate::card::render_card;
use crate::html::escape_html;
use crate::theme::card_styles;
use crate::view::CardView;

/// Render cards into a wrapping grid.
pub fn render_grid(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return r#"<section class="shoe-grid shoe-grid--empty" data-section="shoes">
    <p>No shoes to show.</p>
</section>"#
            .to_string();
    }

    let cards_html: Vec<String> = cards.iter().map(render_card).collect();

    format!(
        r#"<section class="shoe-grid" data-section="shoes">
{}
</section>"#,
        cards_html.join("\n")
    )
}

/// Document wrapper for a rendered body fragment.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub title: String,
    /// `(name, content)` pairs.
    pub meta: Vec<(String, String)>,
    /// Inline CSS placed in the head.
    pub styles: Vec<String>,
}

impl PageShell {
    /// Shell with the viewport meta tag and the card stylesheet.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            meta: vec![(
                "viewport".to_string(),
                "width=device-width, initial-scale=1".to_string(),
            )],
            styles: vec![card_styles()],
        }
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    pub fn with_style(mut self, css: impl Into<String>) -> Self {
        self.styles.push(css.into());
        self
    }

    /// Wrap `body_html` into a complete document.
    pub fn render(&self, body_html: &str) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html.push_str("</head>\n<body>\n<main>\n");
        html.push_str(body_html);
        html.push_str("\n</main>\n</body>\n</html>\n");
        html
    }
}

/// Render a full preview page around an already rendered grid.
pub fn render_page(title: &str, grid_html: &str) -> String {
    PageShell::new(title).render(grid_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let html = render_grid(&[]);
        assert!(html.contains("shoe-grid--empty"));
    }

    #[test]
    fn test_page_wraps_body() {
        let page = render_page("Sale & New", "<p>body</p>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Sale &amp; New</title>"));
        assert!(page.contains(r#"<meta name="viewport""#));
        assert!(page.contains(".shoe-card-link"));
        assert!(page.contains("<main>\n<p>body</p>\n</main>"));
    }

    #[test]
    fn test_shell_extra_style() {
        let page = PageShell::new("x")
            .with_meta("robots", "noindex")
            .with_style("body { margin: 0; }")
            .render("");
        assert!(page.contains(r#"<meta name="robots" content="noindex">"#));
        assert!(page.contains("<style>body { margin: 0; }</style>"));
    }
}
