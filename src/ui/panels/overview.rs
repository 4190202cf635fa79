//! Landing content shown when no panel is expanded and all signals are selected.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{Doc, PanelContent, PanelContext};
use crate::state::{Panel, SignalKind};
use crate::ui::Theme;

/// Concepts that open a panel, with the key that opens them.
pub const CONCEPTS: &[(char, &str, &str, Panel)] = &[
    ('s', "OTel SDK", "Instrumentation library in your application", Panel::Sdk),
    ('c', "OTel Collector", "Process and route telemetry data", Panel::Collector),
    ('v', "Semantic Conventions", "Standardized attribute names", Panel::SemConv),
    ('r', "Resource Detection", "Automatic environment context", Panel::Resource),
];

const SIGNAL_LEGEND: [(SignalKind, &str, &str); 3] = [
    (SignalKind::Trace, "Traces", "Request flow across services"),
    (SignalKind::Metric, "Metrics", "Numerical measurements over time"),
    (SignalKind::Log, "Logs", "Discrete events with context"),
];

pub(super) fn content(ctx: &PanelContext) -> PanelContent {
    let mut doc = Doc::new(ctx);
    let theme = ctx.theme;

    doc.text(
        "Click on any component in the diagram to learn more, or explore the key \
         concepts below.",
    );

    doc.heading("Key Concepts");
    for (key, title, description, _) in CONCEPTS {
        doc.line(Line::from(vec![
            Span::styled(format!("  [{}] ", key), Style::default().fg(theme.highlight)),
            Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        doc.muted(&format!("      {}", description));
    }

    doc.heading("Signal Types");
    for (kind, name, description) in SIGNAL_LEGEND {
        doc.line(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(Theme::signal_color(kind))),
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" - {}", description), theme.muted_style()),
        ]));
    }
    doc.finish()
}
