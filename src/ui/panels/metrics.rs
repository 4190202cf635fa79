//! Metric instruments: counter, gauge and histogram cards.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{bar, group_thousands, Doc, PanelContent, PanelContext};
use crate::data::metrics::{
    MetricType, COUNTERS, COUNTER_TYPE, GAUGES, GAUGE_TYPE, HISTOGRAM, HISTOGRAM_TYPE,
};
use crate::state::SignalKind;
use crate::ui::Theme;

const GAUGE_BAR_WIDTH: usize = 24;
const BUCKET_BAR_WIDTH: usize = 20;

fn card_header(doc: &mut Doc, kind: &MetricType) {
    let color = Theme::signal_color(SignalKind::Metric);
    doc.heading(kind.name);
    doc.muted(&format!("Use case: {}", kind.use_case));
    doc.text(kind.description);
    doc.line(Line::from(Span::styled(
        format!("  {}", kind.example),
        Style::default().fg(color).add_modifier(Modifier::ITALIC),
    )));
    doc.blank();
}

pub(super) fn content(ctx: &PanelContext) -> PanelContent {
    let mut doc = Doc::new(ctx);
    let theme = ctx.theme;
    let value_style = Style::default()
        .fg(Theme::signal_color(SignalKind::Metric))
        .add_modifier(Modifier::BOLD);

    doc.text(
        "Metrics are numerical measurements collected over time. OTel supports three \
         metric types, each optimized for different use cases.",
    );

    card_header(&mut doc, &COUNTER_TYPE);
    if let Some(counter) = COUNTERS.first() {
        doc.line(Line::from(vec![
            Span::styled(format!("{}: ", counter.name), theme.muted_style()),
            Span::styled(group_thousands(counter.value), value_style),
        ]));
        doc.muted(counter.description);
    }

    card_header(&mut doc, &GAUGE_TYPE);
    if let Some(gauge) = GAUGES.first() {
        let percent = gauge.percent();
        doc.line(Line::from(vec![
            Span::styled("cpu_utilization: ", theme.muted_style()),
            Span::styled(format!("{:.1}%", gauge.value), value_style),
        ]));
        doc.line(Line::from(Span::styled(
            bar(percent / 100.0, GAUGE_BAR_WIDTH),
            Style::default().fg(Theme::signal_color(SignalKind::Metric)),
        )));
        doc.muted(gauge.description);
    }

    card_header(&mut doc, &HISTOGRAM_TYPE);
    doc.line(Line::from(vec![
        Span::styled(format!("{} ", HISTOGRAM.name), theme.muted_style()),
        Span::styled(
            format!("({} requests)", group_thousands(HISTOGRAM.count)),
            Style::default().fg(theme.text),
        ),
    ]));
    let increments = HISTOGRAM.bucket_increments();
    let peak = increments.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (le, count) in &increments {
        let fraction = if peak == 0 { 0.0 } else { *count as f64 / peak as f64 };
        doc.line(Line::from(vec![
            Span::styled(format!("  ≤{:>5}{} ", le, HISTOGRAM.unit), theme.muted_style()),
            Span::styled(
                bar(fraction, BUCKET_BAR_WIDTH),
                Style::default().fg(Theme::signal_color(SignalKind::Metric)),
            ),
            Span::raw(format!(" {:>5}", group_thousands(*count))),
            Span::styled(
                format!(" {:>4.1}%", HISTOGRAM.share(*count)),
                theme.muted_style(),
            ),
        ]));
    }
    let p = HISTOGRAM.percentiles;
    doc.line(Line::from(vec![
        Span::styled("  p50 ", theme.muted_style()),
        Span::styled(format!("{}ms", p.p50), value_style),
        Span::styled("  p95 ", theme.muted_style()),
        Span::styled(format!("{}ms", p.p95), value_style),
        Span::styled("  p99 ", theme.muted_style()),
        Span::styled(format!("{}ms", p.p99), value_style),
    ]));

    doc.insight(
        "Metric Aggregation",
        &[
            "OTel SDKs aggregate metrics in-memory before exporting, reducing network",
            "overhead. The Collector can further aggregate across instances.",
        ],
    );

    doc.heading("Metric Attributes");
    doc.muted("Attributes add dimensions to metrics, enabling filtering and grouping:");
    if let Some(counter) = COUNTERS.first() {
        for (key, value) in counter.attributes.iter() {
            doc.line(Line::from(vec![
                Span::styled(format!("  {}: ", key), Style::default().fg(theme.code_key)),
                Span::styled(value.to_string(), Style::default().fg(theme.code_value)),
            ]));
        }
    }
    doc.finish()
}
