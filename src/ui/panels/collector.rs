//! Collector panel, whole or focused on one pipeline stage.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{CollectorFocus, Doc, PanelContent, PanelContext};
use crate::data::collector::{FULL_CONFIG, PIPELINES_EXPLANATION, WHY_COLLECTOR};
use crate::data::{CollectorComponent, PipelineStage};
use crate::ui::code_block::{CodeSnippet, Language};
use crate::ui::Theme;

/// Components listed for an unfocused receivers or processors section.
const PREVIEW_COMPONENTS: usize = 3;

pub(super) fn primary_snippet(focus: CollectorFocus) -> CodeSnippet {
    match focus.stage().and_then(|stage| stage.components().first()) {
        Some(component) => component_snippet(component),
        None => CodeSnippet::new("otel-collector-config.yaml", Language::Yaml, FULL_CONFIG),
    }
}

fn component_snippet(component: &CollectorComponent) -> CodeSnippet {
    CodeSnippet::new(component.name, Language::Yaml, component.config)
}

/// Components listed for `stage` under `focus`.
pub(super) fn listed_components(
    stage: PipelineStage,
    focus: CollectorFocus,
) -> &'static [CollectorComponent] {
    let all = stage.components();
    let focused = focus.stage() == Some(stage);
    if stage == PipelineStage::Exporter || focused {
        all
    } else {
        &all[..all.len().min(PREVIEW_COMPONENTS)]
    }
}

fn pipeline_strip(focus: CollectorFocus, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, stage) in PipelineStage::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" → ", theme.muted_style()));
        }
        let color = Theme::stage_color(stage);
        let style = if focus.stage() == Some(stage) {
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(color)
        };
        spans.push(Span::styled(format!(" {} ", stage.title()), style));
    }
    Line::from(spans)
}

pub(super) fn content(focus: CollectorFocus, ctx: &PanelContext) -> PanelContent {
    let mut doc = Doc::new(ctx);
    let theme = ctx.theme;
    let primary = primary_snippet(focus);

    doc.text(
        "The OpenTelemetry Collector is a vendor-agnostic proxy that receives, processes, \
         and exports telemetry data. It decouples your application from backend-specific \
         concerns.",
    );

    doc.heading("Pipeline Architecture");
    doc.line(pipeline_strip(focus, theme));
    let roles: Vec<&str> = PipelineStage::ALL.iter().map(|s| s.role()).collect();
    doc.muted(&format!(" {}", roles.join("  ·  ")));

    for stage in PipelineStage::ALL {
        if !focus.shows(stage) {
            continue;
        }
        doc.heading(stage.title());
        doc.muted(stage.explanation());
        for component in listed_components(stage, focus) {
            doc.blank();
            doc.line(Line::from(vec![
                Span::styled(
                    component.name.to_string(),
                    Style::default()
                        .fg(Theme::stage_color(stage))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", stage.title().trim_end_matches('s')), theme.muted_style()),
            ]));
            doc.text(component.description);
            let snippet = component_snippet(component);
            doc.code(&snippet, snippet == primary);
        }
    }

    if focus == CollectorFocus::Collector {
        doc.heading("Full Configuration");
        doc.muted(PIPELINES_EXPLANATION);
        doc.code(&primary, true);
    }

    doc.insight("Why Use the Collector?", &[]);
    for reason in WHY_COLLECTOR {
        doc.bullet(reason);
    }
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::super::{render_text, PanelView};
    use super::*;

    fn text(focus: CollectorFocus) -> String {
        render_text(PanelView::Collector(focus), 0).join("\n")
    }

    #[test]
    fn test_processors_focus_shows_only_processors() {
        let text = text(CollectorFocus::Processors);
        assert!(text.contains("Data transformation"));
        assert!(!text.contains("Data ingestion - how"));
        assert!(!text.contains("Data egress - send"));
        assert!(!text.contains("otel-collector-config.yaml"));
        // All six processors when focused
        for p in PipelineStage::Processor.components() {
            assert!(text.contains(p.description), "{}", p.name);
        }
    }

    #[test]
    fn test_whole_collector_previews_three() {
        assert_eq!(
            listed_components(PipelineStage::Receiver, CollectorFocus::Collector).len(),
            3
        );
        assert_eq!(
            listed_components(PipelineStage::Processor, CollectorFocus::Collector).len(),
            3
        );
        assert_eq!(
            listed_components(PipelineStage::Exporter, CollectorFocus::Collector).len(),
            PipelineStage::Exporter.components().len()
        );
        assert_eq!(
            listed_components(PipelineStage::Receiver, CollectorFocus::Receivers).len(),
            PipelineStage::Receiver.components().len()
        );

        let text = text(CollectorFocus::Collector);
        assert!(text.contains("otel-collector-config.yaml"));
        assert!(text.contains("Data ingestion - how"));
        assert!(text.contains("Data egress - send"));
    }

    #[test]
    fn test_focused_stage_copies_first_component() {
        let snippet = primary_snippet(CollectorFocus::Exporters);
        assert_eq!(snippet.title, "otlp/elastic");
        assert_eq!(snippet.code, PipelineStage::Exporter.components()[0].config);
    }
}
