//! Semantic conventions: benefits, category tables and an example span.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{Doc, PanelContent, PanelContext};
use crate::data::semconv::{BENEFITS, CATEGORIES, EXAMPLE_HTTP_SPAN};
use crate::ui::code_block::{CodeSnippet, Language};

pub(super) fn http_span_snippet() -> CodeSnippet {
    CodeSnippet::new("Example: HTTP Span", Language::Json, EXAMPLE_HTTP_SPAN)
}

pub(super) fn content(ctx: &PanelContext) -> PanelContent {
    let mut doc = Doc::new(ctx);
    let theme = ctx.theme;

    doc.text(
        "Semantic Conventions are standardized attribute names defined by OpenTelemetry. \
         Using consistent names enables interoperability and portability across tools.",
    );

    doc.heading("Benefits");
    for (title, description) in BENEFITS {
        doc.bullet(title);
        doc.muted(&format!("    {}", description));
    }

    doc.heading("Convention Categories");
    let selected = ctx.semconv_category % CATEGORIES.len().max(1);
    let mut tabs = Vec::new();
    for (i, category) in CATEGORIES.iter().enumerate() {
        let style = if i == selected {
            theme.tab_active.add_modifier(Modifier::REVERSED)
        } else {
            theme.tab_inactive
        };
        tabs.push(Span::styled(format!(" {} ", category.name), style));
    }
    doc.line(Line::from(tabs));
    doc.muted("[ / ] to switch category");

    if let Some(category) = CATEGORIES.get(selected) {
        doc.heading(&format!("{} Attributes", category.name));
        doc.muted(category.description);
        doc.blank();
        let width = category.attributes.iter().map(|a| a.key.len()).max().unwrap_or(0);
        doc.line(Line::from(vec![
            Span::styled(format!("  {:<width$}  ", "Attribute"), theme.header),
            Span::styled("Example", theme.header),
        ]));
        for attr in category.attributes {
            doc.line(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}  ", attr.key),
                    Style::default().fg(theme.code_key),
                ),
                Span::styled(attr.example, Style::default().fg(theme.code_value)),
            ]));
            doc.muted(&format!("    {}", attr.description));
        }
    }

    doc.heading("Example: HTTP Span");
    doc.code(&http_span_snippet(), true);

    doc.insight(
        "Why This Matters",
        &[
            "When everyone uses http.request.method instead of inventing httpMethod,",
            "method, or req_method, dashboards and alerts work out of the box.",
        ],
    );
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::super::{render_text, PanelView};
    use super::*;

    #[test]
    fn test_selected_category_table() {
        let text = render_text(PanelView::SemConv, 0).join("\n");
        assert!(text.contains("HTTP Attributes"));
        assert!(text.contains("http.response.status_code"));

        let text = render_text(PanelView::SemConv, 1).join("\n");
        assert!(text.contains("Database Attributes"));
        assert!(!text.contains("HTTP Attributes"));
    }

    #[test]
    fn test_category_index_wraps() {
        let text = render_text(PanelView::SemConv, CATEGORIES.len()).join("\n");
        assert!(text.contains("HTTP Attributes"));
    }
}
