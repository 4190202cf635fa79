//! Sidebar detail panels.
//!
//! [`PanelView`] is resolved from [`UiState`] on every frame. Each variant
//! renders to plain [`Line`]s, so the sidebar only has to wrap and scroll
//! them.

mod collector;
mod logs;
mod metrics;
mod overview;
mod resource;
mod sdk;
mod semconv;
mod traces;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::data::PipelineStage;
use crate::state::{Panel, SignalFilter, UiState};

use super::code_block::{self, CodeSnippet, Hint};
use super::Theme;

/// Which part of the collector the collector panel focuses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorFocus {
    Collector,
    Receivers,
    Processors,
    Exporters,
}

impl CollectorFocus {
    /// The focused stage, or `None` for the whole collector.
    pub fn stage(self) -> Option<PipelineStage> {
        match self {
            CollectorFocus::Collector => None,
            CollectorFocus::Receivers => Some(PipelineStage::Receiver),
            CollectorFocus::Processors => Some(PipelineStage::Processor),
            CollectorFocus::Exporters => Some(PipelineStage::Exporter),
        }
    }

    /// A stage section is shown for the whole collector or for its own focus.
    pub fn shows(self, stage: PipelineStage) -> bool {
        self.stage().map_or(true, |s| s == stage)
    }
}

/// Content of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView {
    Sdk,
    Collector(CollectorFocus),
    SemConv,
    Resource,
    Traces,
    Metrics,
    Logs,
    Overview,
}

impl PanelView {
    /// The expanded panel wins; otherwise the active signal decides.
    pub fn from_state(state: &UiState) -> Self {
        match state.expanded_panel() {
            Some(Panel::Sdk) => PanelView::Sdk,
            Some(Panel::Collector) => PanelView::Collector(CollectorFocus::Collector),
            Some(Panel::Receivers) => PanelView::Collector(CollectorFocus::Receivers),
            Some(Panel::Processors) => PanelView::Collector(CollectorFocus::Processors),
            Some(Panel::Exporters) => PanelView::Collector(CollectorFocus::Exporters),
            Some(Panel::SemConv) => PanelView::SemConv,
            Some(Panel::Resource) => PanelView::Resource,
            None => match state.active_signal() {
                SignalFilter::Traces => PanelView::Traces,
                SignalFilter::Metrics => PanelView::Metrics,
                SignalFilter::Logs => PanelView::Logs,
                SignalFilter::All => PanelView::Overview,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelView::Sdk => "OpenTelemetry SDK",
            PanelView::Collector(CollectorFocus::Collector) => "OTel Collector",
            PanelView::Collector(CollectorFocus::Receivers) => "Collector - Receivers",
            PanelView::Collector(CollectorFocus::Processors) => "Collector - Processors",
            PanelView::Collector(CollectorFocus::Exporters) => "Collector - Exporters",
            PanelView::SemConv => "Semantic Conventions",
            PanelView::Resource => "Resource Detection",
            PanelView::Traces => "Distributed Traces",
            PanelView::Metrics => "Metrics",
            PanelView::Logs => "Logs",
            PanelView::Overview => "Overview",
        }
    }

    /// True when the view comes from an expanded panel and `Esc` closes it.
    pub fn is_expanded(&self) -> bool {
        matches!(
            self,
            PanelView::Sdk | PanelView::Collector(_) | PanelView::SemConv | PanelView::Resource
        )
    }

    /// True when the panel shows at least one code block.
    pub fn has_code(&self) -> bool {
        !matches!(self, PanelView::Metrics | PanelView::Overview)
    }

    /// Render the panel: its lines plus the code blocks they contain.
    pub fn content(&self, ctx: &PanelContext) -> PanelContent {
        match self {
            PanelView::Sdk => sdk::content(ctx),
            PanelView::Collector(focus) => collector::content(*focus, ctx),
            PanelView::SemConv => semconv::content(ctx),
            PanelView::Resource => resource::content(ctx),
            PanelView::Traces => traces::content(ctx),
            PanelView::Metrics => metrics::content(ctx),
            PanelView::Logs => logs::content(ctx),
            PanelView::Overview => overview::content(ctx),
        }
    }
}

/// Panel opened by an overview concept shortcut key.
pub fn concept_panel(key: char) -> Option<Panel> {
    overview::CONCEPTS
        .iter()
        .find(|(shortcut, ..)| *shortcut == key)
        .map(|(.., panel)| *panel)
}

/// Inputs a panel needs besides the fixtures.
pub struct PanelContext<'a> {
    pub theme: &'a Theme,
    /// Selected semantic-convention category.
    pub semconv_category: usize,
    /// Index of the selected code block; `None` selects the panel's primary block.
    pub selected_block: Option<usize>,
    /// Whether the copy acknowledgement is showing.
    pub copied: bool,
}

/// A code block and the line its header starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBlock {
    pub line: usize,
    pub snippet: CodeSnippet,
}

/// A rendered panel.
#[derive(Debug, Clone, Default)]
pub struct PanelContent {
    pub lines: Vec<Line<'static>>,
    /// Code blocks in display order.
    pub blocks: Vec<PlacedBlock>,
    /// Index into `blocks` of the block drawn with the `y:copy` hint.
    pub selected: Option<usize>,
}

impl PanelContent {
    /// The block `y` copies.
    pub fn selected_block(&self) -> Option<&PlacedBlock> {
        self.selected.and_then(|i| self.blocks.get(i))
    }
}

/// Line builder shared by the panels.
struct Doc<'a> {
    ctx: &'a PanelContext<'a>,
    lines: Vec<Line<'static>>,
    blocks: Vec<PlacedBlock>,
    selected: Option<usize>,
}

impl<'a> Doc<'a> {
    fn new(ctx: &'a PanelContext<'a>) -> Self {
        Self {
            ctx,
            lines: Vec::new(),
            blocks: Vec::new(),
            selected: None,
        }
    }

    fn theme(&self) -> &'a Theme {
        self.ctx.theme
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, title: &str) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.lines.push(Line::from(Span::styled(title.to_string(), self.theme().header)));
    }

    fn text(&mut self, text: &str) {
        self.lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(self.theme().text),
        )));
    }

    fn muted(&mut self, text: &str) {
        self.lines.push(Line::from(Span::styled(text.to_string(), self.theme().muted_style())));
    }

    fn bullet(&mut self, text: &str) {
        self.lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(self.theme().highlight)),
            Span::raw(text.to_string()),
        ]));
    }

    /// Bold term followed by a muted description.
    fn term(&mut self, term: &str, description: &str) {
        self.lines.push(Line::from(vec![
            Span::styled(format!("  {}", term), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", description), self.theme().muted_style()),
        ]));
    }

    fn line(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    /// Append a code block. Only the selected block carries the copy hint.
    fn code(&mut self, snippet: &CodeSnippet, primary: bool) {
        let index = self.blocks.len();
        let selected = match self.ctx.selected_block {
            Some(chosen) => chosen == index,
            None => primary && self.selected.is_none(),
        };
        let hint = match (selected, self.ctx.copied) {
            (false, _) => Hint::None,
            (true, false) => Hint::Copy,
            (true, true) => Hint::Copied,
        };
        if selected {
            self.selected = Some(index);
        }
        self.blocks.push(PlacedBlock {
            line: self.lines.len(),
            snippet: snippet.clone(),
        });
        let rendered = code_block::render(snippet, self.theme(), hint);
        self.lines.extend(rendered);
    }

    /// Callout box with a title and body lines.
    fn insight(&mut self, title: &str, body: &[&str]) {
        let bar = Style::default().fg(self.theme().highlight);
        self.blank();
        self.lines.push(Line::from(vec![
            Span::styled("▌ ", bar),
            Span::styled(title.to_string(), bar.add_modifier(Modifier::BOLD)),
        ]));
        for text in body {
            self.lines.push(Line::from(vec![Span::styled("▌ ", bar), Span::raw(text.to_string())]));
        }
    }

    fn finish(self) -> PanelContent {
        PanelContent {
            lines: self.lines,
            blocks: self.blocks,
            selected: self.selected,
        }
    }
}

/// Horizontal bar `width` cells wide, `fraction` of it filled.
fn bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an integer with thousands separators, e.g. `1847293` → `1,847,293`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render a view with the dark theme and the given selection, for assertions.
#[cfg(test)]
fn render_content(view: PanelView, selected_block: Option<usize>, copied: bool) -> PanelContent {
    let theme = Theme::dark();
    let ctx = PanelContext {
        theme: &theme,
        semconv_category: 0,
        selected_block,
        copied,
    };
    view.content(&ctx)
}

/// Plain text of a view, for assertions.
#[cfg(test)]
fn render_text(view: PanelView, semconv_category: usize) -> Vec<String> {
    let theme = Theme::dark();
    let ctx = PanelContext {
        theme: &theme,
        semconv_category,
        selected_block: None,
        copied: false,
    };
    view.content(&ctx).lines.iter().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ThemeMode;

    #[test]
    fn test_from_state_prefers_expanded_panel() {
        let mut state = UiState::new(ThemeMode::Dark, true);
        assert_eq!(PanelView::from_state(&state), PanelView::Overview);

        state.set_active_signal(SignalFilter::Logs);
        assert_eq!(PanelView::from_state(&state), PanelView::Logs);

        state.set_expanded_panel(Some(Panel::Exporters));
        assert_eq!(
            PanelView::from_state(&state),
            PanelView::Collector(CollectorFocus::Exporters)
        );

        state.set_expanded_panel(None);
        assert_eq!(PanelView::from_state(&state), PanelView::Logs);
    }

    #[test]
    fn test_concept_shortcuts() {
        assert_eq!(concept_panel('v'), Some(Panel::SemConv));
        assert_eq!(concept_panel('s'), Some(Panel::Sdk));
        assert_eq!(concept_panel('x'), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(PanelView::Collector(CollectorFocus::Receivers).title(), "Collector - Receivers");
        assert_eq!(PanelView::Traces.title(), "Distributed Traces");
        assert_eq!(PanelView::Overview.title(), "Overview");
    }

    const VIEWS: [PanelView; 11] = [
        PanelView::Sdk,
        PanelView::Collector(CollectorFocus::Collector),
        PanelView::Collector(CollectorFocus::Receivers),
        PanelView::Collector(CollectorFocus::Processors),
        PanelView::Collector(CollectorFocus::Exporters),
        PanelView::SemConv,
        PanelView::Resource,
        PanelView::Traces,
        PanelView::Metrics,
        PanelView::Logs,
        PanelView::Overview,
    ];

    /// Header lines of every code block, in display order.
    fn headers(content: &PanelContent) -> Vec<String> {
        content
            .blocks
            .iter()
            .map(|b| content.lines[b.line].to_string())
            .collect()
    }

    #[test]
    fn test_default_selection_is_primary_block() {
        let content = render_content(PanelView::Collector(CollectorFocus::Collector), None, false);
        let selected = content.selected_block().unwrap();
        assert_eq!(selected.snippet.code, crate::data::collector::FULL_CONFIG);
        assert!(render_content(PanelView::Metrics, None, false).selected_block().is_none());
        assert!(render_content(PanelView::Overview, None, false).blocks.is_empty());
    }

    #[test]
    fn test_copy_hint_marks_exactly_the_selected_block() {
        for view in VIEWS {
            let count = render_content(view, None, false).blocks.len();
            assert_eq!(view.has_code(), count > 0, "{view:?}");
            for chosen in 0..count {
                let content = render_content(view, Some(chosen), false);
                let headers = headers(&content);
                assert_eq!(content.selected, Some(chosen), "{view:?}");
                for (i, header) in headers.iter().enumerate() {
                    assert_eq!(header.contains("y:copy"), i == chosen, "{view:?} {header}");
                }
                // The header carries the title of the block `y` copies
                let selected = content.selected_block().unwrap();
                assert!(headers[chosen].contains(selected.snippet.title));
            }
        }
    }

    #[test]
    fn test_sdk_custom_span_block_is_selectable() {
        let content = render_content(PanelView::Sdk, Some(1), true);
        let headers = headers(&content);
        assert_eq!(headers.len(), 2);
        assert!(!headers[0].contains("y:copy"));
        assert!(!headers[0].contains("Copied"));
        assert!(headers[1].contains("Custom span example"));
        assert!(headers[1].contains("✓ Copied"));
        assert!(content.selected_block().unwrap().snippet.code.contains("start_as_current_span"));
    }

    #[test]
    fn test_out_of_range_selection_selects_nothing() {
        let content = render_content(PanelView::Traces, Some(9), false);
        assert!(content.selected_block().is_none());
        assert!(headers(&content).iter().all(|h| !h.contains("y:copy")));
    }

    #[test]
    fn test_every_view_renders_its_title_content() {
        for view in VIEWS {
            assert!(render_text(view, 0).len() > 5, "{view:?}");
        }
    }

    #[test]
    fn test_bar_and_grouping() {
        assert_eq!(bar(0.5, 4), "██░░");
        assert_eq!(bar(2.0, 3), "███");
        assert_eq!(bar(f64::NAN, 2), "░░");
        assert_eq!(group_thousands(1_847_293), "1,847,293");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
    }
}
