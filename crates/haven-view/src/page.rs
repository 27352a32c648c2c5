//! Document shell around rendered sections.

use crate::format::escape_html;

/// Default document title.
pub const SITE_TITLE: &str = "MindHaven";

/// A full HTML document built from section fragments.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    meta: Vec<(String, String)>,
    stylesheets: Vec<String>,
    sections: Vec<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(SITE_TITLE)
    }
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            meta: vec![(
                "viewport".to_string(),
                "width=device-width, initial-scale=1".to_string(),
            )],
            stylesheets: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.stylesheets.push(href.to_string());
        self
    }

    /// Append a rendered section.
    pub fn with_section(mut self, html: impl Into<String>) -> Self {
        self.sections.push(html.into());
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }
        for href in &self.stylesheets {
            html.push_str(&format!(
                r#"<link rel="stylesheet" href="{}">"#,
                escape_html(href)
            ));
            html.push('\n');
        }

        html.push_str("</head>\n<body>\n");
        for section in &self.sections {
            html.push_str(section);
            html.push('\n');
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}
