//! Project detail rendering.
//!
//! Maps a [`ProjectRecord`] to the view-model the detail modal displays.
//! Pure: the same record always renders the same view.

use pulldown_cmark::{html, Event, Parser};

use crate::content::ProjectRecord;

/// Label on the external project link
pub const VISIT_LABEL: &str = "Visit Project";

/// Everything the modal body needs, already formatted for display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectView {
    pub title: String,
    pub image: String,
    pub image_alt: String,
    /// Ordered (label, value) rows of the "Project Info" list
    pub info: Vec<(String, String)>,
    /// Description as an HTML fragment
    pub description_html: String,
    /// Technology tags in declaration order
    pub technologies: Vec<String>,
    pub link: String,
    pub link_label: String,
}

/// Render a project record for the detail modal
pub fn render_project(project: &ProjectRecord) -> ProjectView {
    ProjectView {
        title: project.title.clone(),
        image: project.image.clone(),
        image_alt: project.title.clone(),
        info: vec![
            ("Category".to_string(), project.category.clone()),
            ("Client".to_string(), project.client.clone()),
            ("Date".to_string(), project.date.clone()),
        ],
        description_html: render_description(&project.description),
        technologies: project.technologies.clone(),
        link: project.link.clone(),
        link_label: VISIT_LABEL.to_string(),
    }
}

/// Render inline markdown to HTML, escaping any raw HTML in the source.
pub fn render_description(markdown: &str) -> String {
    let parser = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentRegistry, FALLBACK_PROJECT};

    #[test]
    fn renders_info_rows_in_order() {
        let registry = ContentRegistry::builtin();
        let view = render_project(registry.get_or_fallback("project1"));

        assert_eq!(view.title, "E-commerce Website");
        assert_eq!(view.image_alt, "E-commerce Website");
        let labels: Vec<&str> = view.info.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Category", "Client", "Date"]);
        assert_eq!(view.info[1].1, "Fashion Retailer");
        assert_eq!(view.technologies.first().map(String::as_str), Some("HTML5"));
        assert_eq!(view.technologies.len(), 6);
        assert_eq!(view.link_label, "Visit Project");
    }

    #[test]
    fn renders_fallback_without_technologies() {
        let view = render_project(&FALLBACK_PROJECT);
        assert_eq!(view.title, "Project Not Found");
        assert!(view.technologies.is_empty());
        assert_eq!(view.description_html, "<p>Project details not available.</p>\n");
    }

    #[test]
    fn description_supports_inline_markdown() {
        let html = render_description("Built with **care**.");
        assert_eq!(html, "<p>Built with <strong>care</strong>.</p>\n");
    }

    #[test]
    fn description_escapes_raw_html() {
        let html = render_description("Hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
