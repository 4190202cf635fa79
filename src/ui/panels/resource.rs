//! Resource detection: what the SDK discovers about its environment.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{Doc, PanelContent, PanelContext};
use crate::data::semconv::{DETECTED_ATTRIBUTES, RESOURCE_DETECTION_CONFIG, RESOURCE_DETECTORS};
use crate::ui::code_block::{CodeSnippet, Language};

const PRACTICAL_USES: &[(&str, &str)] = &[
    ("Filter by region", "See only traces from us-west-2"),
    ("Group by pod", "Compare performance across k8s.pod.name"),
    ("Correlate with infra", "Join application metrics with host metrics via host.name"),
];

pub(super) fn config_snippet() -> CodeSnippet {
    CodeSnippet::new("Collector Configuration", Language::Yaml, RESOURCE_DETECTION_CONFIG)
}

pub(super) fn content(ctx: &PanelContext) -> PanelContent {
    let mut doc = Doc::new(ctx);
    let theme = ctx.theme;

    doc.text(
        "Resource Detection automatically discovers context about where your telemetry \
         originates. This metadata is attached to every span, metric, and log.",
    );

    doc.heading("Auto-Detected Context");
    doc.line(Line::from(Span::styled(
        "Your Application",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    doc.muted("OTel SDK automatically detects:");
    for (key, value, source) in DETECTED_ATTRIBUTES {
        doc.line(Line::from(vec![
            Span::styled(format!("  {}: ", key), Style::default().fg(theme.code_key)),
            Span::styled(format!("\"{}\"", value), Style::default().fg(theme.code_value)),
            Span::styled(format!("  ← {}", source), theme.muted_style()),
        ]));
    }

    doc.heading("Detection Sources");
    for detector in RESOURCE_DETECTORS {
        doc.line(Line::from(vec![
            Span::styled(
                format!("  {}", detector.detector),
                Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" [{}]", detector.origin().label()), theme.muted_style()),
            Span::raw(format!("  {}", detector.description)),
        ]));
        doc.muted(&format!("    {}", detector.attributes.join(", ")));
    }

    doc.heading("Collector Configuration");
    doc.code(&config_snippet(), true);

    doc.insight(
        "Zero Configuration Benefit",
        &[
            "Resource detection happens automatically. Your telemetry is enriched with",
            "environment context without any code changes. Filter by cloud.region or",
            "group by k8s.namespace.name immediately.",
        ],
    );

    doc.heading("Practical Uses");
    for (title, description) in PRACTICAL_USES {
        doc.term(title, description);
    }
    doc.finish()
}
