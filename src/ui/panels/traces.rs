//! Distributed trace: span tree, timeline bars and context propagation.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{Doc, PanelContent, PanelContext};
use crate::data::traces::{
    example_span_json, span_depth, trace_extent, CONCEPTS, EXAMPLE_TRACE, TRACEPARENT, TRACESTATE,
};
use crate::data::SpanStatus;
use crate::state::SignalKind;
use crate::ui::code_block::{CodeSnippet, Language};
use crate::ui::Theme;

/// Width of the timeline column in cells.
const TIMELINE_WIDTH: usize = 32;

pub(super) fn span_snippet() -> CodeSnippet {
    CodeSnippet::new("Span Example", Language::Json, example_span_json())
}

/// Cells before and inside a span's timeline bar.
fn timeline(start: u64, duration: u64, extent: u64) -> (usize, usize) {
    if extent == 0 {
        return (0, 0);
    }
    let scale = TIMELINE_WIDTH as f64 / extent as f64;
    let offset = ((start as f64 * scale).round() as usize).min(TIMELINE_WIDTH);
    let width = ((duration as f64 * scale).round() as usize)
        .max(1)
        .min(TIMELINE_WIDTH - offset);
    (offset, width)
}

pub(super) fn content(ctx: &PanelContext) -> PanelContent {
    let mut doc = Doc::new(ctx);
    let theme = ctx.theme;
    let trace_color = Theme::signal_color(SignalKind::Trace);

    doc.text(
        "A distributed trace tracks a request as it flows through multiple services. \
         Each operation is recorded as a span.",
    );

    doc.heading("Example Trace");
    if let Some(root) = EXAMPLE_TRACE.first() {
        doc.line(Line::from(vec![
            Span::styled("Trace ID: ", theme.muted_style()),
            Span::styled(root.trace_id, Style::default().fg(trace_color)),
        ]));
    }

    let extent = trace_extent(EXAMPLE_TRACE);
    for span in EXAMPLE_TRACE {
        let depth = span_depth(span, EXAMPLE_TRACE);
        let indent = "  ".repeat(depth);
        let branch = if depth > 0 { "└ " } else { "" };
        let status = match span.status {
            SpanStatus::Ok => Span::styled(" ✓", Style::default().fg(theme.healthy)),
            SpanStatus::Error => Span::styled(" ✗", Style::default().fg(theme.critical)),
        };
        doc.line(Line::from(vec![
            Span::raw(format!("{}{}", indent, branch)),
            Span::styled(format!("{} ", span.service_name), theme.muted_style()),
            Span::styled(span.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}ms", span.duration), Style::default().fg(theme.warning)),
            status,
        ]));

        let (offset, width) = timeline(span.start_time, span.duration, extent);
        doc.line(Line::from(vec![
            Span::raw(format!("{}  ", indent)),
            Span::styled("·".repeat(offset), Style::default().fg(theme.border)),
            Span::styled("█".repeat(width), Style::default().fg(trace_color)),
        ]));
    }

    doc.heading("Span Attributes");
    doc.code(&span_snippet(), true);

    doc.insight(
        "Context Propagation",
        &["Trace context is automatically propagated between services via HTTP headers:"],
    );
    doc.line(Line::from(vec![
        Span::styled("  traceparent: ", Style::default().fg(theme.code_key)),
        Span::styled(TRACEPARENT, Style::default().fg(theme.code_value)),
    ]));
    doc.line(Line::from(vec![
        Span::styled("  tracestate: ", Style::default().fg(theme.code_key)),
        Span::styled(TRACESTATE, Style::default().fg(theme.code_value)),
    ]));

    doc.heading("Key Concepts");
    for (term, description) in CONCEPTS {
        doc.term(term, description);
    }
    doc.finish()
}
