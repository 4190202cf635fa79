//! Trace-correlated log records.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{Doc, PanelContent, PanelContext};
use crate::data::logs::{
    example_log_json, CORRELATION_DESCRIPTION, CORRELATION_FIELDS, EXAMPLE_LOGS, LISTED_LOGS,
    SEVERITY_LEVELS,
};
use crate::data::short_id;
use crate::state::SignalKind;
use crate::ui::code_block::{CodeSnippet, Language};
use crate::ui::Theme;

/// Characters of the trace id shown next to each record.
const TRACE_ID_CHARS: usize = 12;

pub(super) fn record_snippet() -> CodeSnippet {
    CodeSnippet::new("OTel Log Record", Language::Json, example_log_json())
}

pub(super) fn content(ctx: &PanelContext) -> PanelContent {
    let mut doc = Doc::new(ctx);
    let theme = ctx.theme;

    doc.text(
        "OTel Logs are structured log records with standardized fields. The key feature: \
         automatic correlation with traces via trace_id.",
    );

    doc.heading("Correlated Logs");
    for log in EXAMPLE_LOGS.iter().take(LISTED_LOGS) {
        let severity = log.severity_text;
        doc.line(Line::from(vec![
            Span::styled(format!("{} ", severity.symbol()), theme.severity_style(severity)),
            Span::styled(
                format!("{:<5} ", severity.label()),
                theme.severity_style(severity),
            ),
            Span::styled(
                format!("{} ", log.service_name().unwrap_or("unknown")),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(log.time_of_day(), theme.muted_style()),
        ]));
        doc.line(Line::from(Span::raw(format!("  {}", log.body))));
        if let Some(trace_id) = log.trace_id {
            doc.line(Line::from(vec![
                Span::styled("  trace: ", theme.muted_style()),
                Span::styled(
                    short_id(trace_id, TRACE_ID_CHARS),
                    Style::default().fg(Theme::signal_color(SignalKind::Trace)),
                ),
            ]));
        }
    }

    doc.insight("Log-Trace Correlation", &[CORRELATION_DESCRIPTION]);
    for (field, meaning) in CORRELATION_FIELDS {
        doc.term(field, meaning);
    }

    doc.heading("Log Record Structure");
    doc.code(&record_snippet(), true);

    doc.heading("Severity Levels");
    for (number, severity, meaning) in SEVERITY_LEVELS {
        doc.line(Line::from(vec![
            Span::styled(
                format!("  {:<5} ({:>2})", severity.label(), number),
                theme.severity_style(*severity),
            ),
            Span::styled(format!("  {}", meaning), theme.muted_style()),
        ]));
    }

    doc.heading("Resource Context");
    doc.muted("Every log includes resource attributes identifying where it came from:");
    if let Some(log) = EXAMPLE_LOGS.first() {
        for (key, value) in log.resource.iter() {
            doc.line(Line::from(vec![
                Span::styled(format!("  {}: ", key), Style::default().fg(theme.code_key)),
                Span::styled(value.to_string(), Style::default().fg(theme.code_value)),
            ]));
        }
    }
    doc.finish()
}
