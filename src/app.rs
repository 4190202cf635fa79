//! Application state and navigation logic.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::clipboard::{self, CopyNotice};
use crate::config::Settings;
use crate::data::semconv::CATEGORIES;
use crate::diagram::layout::{self, NodeAction, NodeId, Viewport, PAN_STEP};
use crate::state::{Panel, SignalFilter, ThemeMode, UiState};
use crate::ui::panels::{PanelContent, PanelContext, PanelView};
use crate::ui::sidebar;
use crate::ui::Theme;

/// Screen regions from the last draw, used to route mouse clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Areas {
    pub tabs: Rect,
    /// Inner canvas area of the diagram, without its border.
    pub diagram: Rect,
    pub sidebar: Rect,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    /// Shared presentation state; every renderer reads it through `&App`.
    pub state: UiState,
    pub theme: Theme,
    pub settings: Settings,

    // Diagram
    pub focused: Option<NodeId>,
    pub pan: f64,
    started: Instant,

    // Sidebar
    pub sidebar_scroll: u16,
    /// Wrapped rows of the panel at the last draw.
    pub sidebar_rows: u16,
    /// Visible rows inside the sidebar border at the last draw.
    pub sidebar_height: u16,
    pub semconv_category: usize,
    /// Code block chosen with `n`/`N`; `None` means the panel's primary block.
    pub selected_block: Option<usize>,

    pub areas: Areas,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
    pub copy_notice: Option<CopyNotice>,
}

impl App {
    /// Create the app for a terminal `width` columns wide at start-up.
    pub fn new(settings: Settings, theme: ThemeMode, width: u16) -> Self {
        let mut state = UiState::for_viewport(theme, width, settings.sidebar_breakpoint);
        state.set_animation_enabled(settings.animation);
        tracing::info!(
            width,
            sidebar_open = state.sidebar_open(),
            theme = theme.label(),
            "starting guide"
        );
        Self {
            running: true,
            show_help: false,
            theme: Theme::for_mode(theme),
            state,
            settings,
            focused: None,
            pan: 0.0,
            started: Instant::now(),
            sidebar_scroll: 0,
            sidebar_rows: 0,
            sidebar_height: 0,
            semconv_category: 0,
            selected_block: None,
            areas: Areas::default(),
            status_message: None,
            copy_notice: None,
        }
    }

    /// Seconds since start-up; drives the flow animation.
    pub fn elapsed(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Content currently shown in the sidebar.
    pub fn panel_view(&self) -> PanelView {
        PanelView::from_state(&self.state)
    }

    /// Render the current panel with the app's theme and selection.
    pub fn panel_content(&self) -> PanelContent {
        self.panel_view().content(&PanelContext {
            theme: &self.theme,
            semconv_category: self.semconv_category,
            selected_block: self.selected_block,
            copied: self.copy_acknowledged(),
        })
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// True while the "Copied" acknowledgement should be shown.
    pub fn copy_acknowledged(&self) -> bool {
        self.copy_acknowledged_at(Instant::now())
    }

    pub fn copy_acknowledged_at(&self, now: Instant) -> bool {
        self.copy_notice.is_some_and(|n| n.is_active(now))
    }

    pub fn select_signal(&mut self, signal: SignalFilter) {
        tracing::debug!(signal = signal.label(), "signal selected");
        self.state.set_active_signal(signal);
        self.reset_sidebar();
    }

    pub fn expand_panel(&mut self, panel: Panel) {
        tracing::debug!(?panel, "panel expanded");
        self.state.set_expanded_panel(Some(panel));
        self.reset_sidebar();
    }

    /// Close the expanded panel; content falls back to the active signal.
    pub fn collapse_panel(&mut self) {
        if self.state.expanded_panel().is_some() {
            self.state.set_expanded_panel(None);
            self.reset_sidebar();
        } else {
            self.focused = None;
        }
    }

    fn reset_sidebar(&mut self) {
        self.sidebar_scroll = 0;
        self.selected_block = None;
    }

    pub fn toggle_theme(&mut self) {
        self.state.toggle_theme();
        self.theme = Theme::for_mode(self.state.theme());
    }

    pub fn toggle_animation(&mut self) {
        self.state.toggle_animation();
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.toggle_sidebar();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn apply_action(&mut self, action: NodeAction) {
        match action {
            NodeAction::ExpandPanel(panel) => self.expand_panel(panel),
            NodeAction::SelectSignal(signal) => self.select_signal(signal),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = Some(layout::focus_next(self.focused));
    }

    pub fn focus_prev(&mut self) {
        self.focused = Some(layout::focus_prev(self.focused));
    }

    /// Run the focused node's action. Without focus, nothing happens.
    pub fn activate_focused(&mut self) {
        if let Some(action) = self.focused.and_then(|id| layout::node(id).action) {
            self.apply_action(action);
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::fit(self.areas.diagram.width, self.pan)
    }

    /// Handle a left click at a terminal cell inside the diagram.
    ///
    /// Returns the node that was hit, if any.
    pub fn click_diagram(&mut self, column: u16, row: u16) -> Option<NodeId> {
        let point = self.viewport().cell_to_virtual(self.areas.diagram, column, row)?;
        let node = layout::hit_test(point)?;
        tracing::debug!(node = ?node.id, x = point.x, y = point.y, "diagram click");
        self.focused = Some(node.id);
        if let Some(action) = node.action {
            self.apply_action(action);
        }
        Some(node.id)
    }

    /// Record the diagram canvas area from the last draw.
    ///
    /// A wider area allows less panning, so the stored offset is clamped too.
    pub fn set_diagram_area(&mut self, area: Rect) {
        self.areas.diagram = area;
        self.pan = self.pan.min(Viewport::max_pan(area.width)).max(0.0);
    }

    pub fn pan_left(&mut self) {
        let max = Viewport::max_pan(self.areas.diagram.width);
        self.pan = (self.pan.min(max) - PAN_STEP).max(0.0);
    }

    pub fn pan_right(&mut self) {
        let max = Viewport::max_pan(self.areas.diagram.width);
        self.pan = (self.pan + PAN_STEP).min(max);
    }

    /// Record the sidebar's wrapped content height and visible height.
    pub fn set_sidebar_extent(&mut self, rows: u16, height: u16) {
        self.sidebar_rows = rows;
        self.sidebar_height = height;
        self.sidebar_scroll = self.sidebar_scroll.min(self.max_scroll());
    }

    /// Largest scroll offset that still fills the pane.
    pub fn max_scroll(&self) -> u16 {
        self.sidebar_rows.saturating_sub(self.sidebar_height)
    }

    pub fn scroll_down(&mut self, n: u16) {
        self.sidebar_scroll = self.sidebar_scroll.saturating_add(n).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, n: u16) {
        self.sidebar_scroll = self.sidebar_scroll.saturating_sub(n);
    }

    pub fn scroll_top(&mut self) {
        self.sidebar_scroll = 0;
    }

    pub fn scroll_bottom(&mut self) {
        self.sidebar_scroll = self.max_scroll();
    }

    pub fn next_category(&mut self) {
        self.semconv_category = (self.semconv_category + 1) % CATEGORIES.len();
        self.selected_block = None;
    }

    pub fn prev_category(&mut self) {
        self.semconv_category = (self.semconv_category + CATEGORIES.len() - 1) % CATEGORIES.len();
        self.selected_block = None;
    }

    /// Select the next code block in the panel and scroll it into view.
    pub fn next_block(&mut self) {
        self.step_block(true);
    }

    pub fn prev_block(&mut self) {
        self.step_block(false);
    }

    fn step_block(&mut self, forward: bool) {
        let content = self.panel_content();
        let count = content.blocks.len();
        if count == 0 {
            self.set_status_message("No code blocks in this panel".to_string());
            return;
        }
        let next = match content.selected {
            Some(current) if forward => (current + 1) % count,
            Some(current) => (current + count - 1) % count,
            None => 0,
        };
        self.selected_block = Some(next);

        let block = &content.blocks[next];
        let width = sidebar::inner(self.areas.sidebar).width;
        let row = sidebar::wrapped_rows(&content.lines[..block.line], width);
        self.sidebar_scroll = row.min(self.max_scroll());
        tracing::debug!(index = next, title = block.snippet.title, "code block selected");
    }

    /// Copy the selected code block to the clipboard.
    pub fn copy_code(&mut self) {
        self.copy_selected_with(clipboard::copy, Instant::now());
    }

    /// Copy the selected code block with `copy`, which receives the block's text.
    pub fn copy_selected_with<F>(&mut self, copy: F, now: Instant)
    where
        F: FnOnce(&str) -> crate::error::Result<usize>,
    {
        let content = self.panel_content();
        let Some(block) = content.selected_block() else {
            self.set_status_message("Nothing to copy in this panel".to_string());
            return;
        };
        match copy(&block.snippet.code) {
            Ok(_) => {
                self.copy_notice = Some(CopyNotice::new(now));
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.set_status_message(format!("Copy failed: {}", e));
            }
        }
    }

    /// Export the example datasets to a file.
    pub fn export_fixtures(&self, path: &std::path::Path) -> crate::error::Result<()> {
        crate::data::write_export(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PipelineStage;
    use crate::ui::panels::{CollectorFocus, PlacedBlock};

    fn app() -> App {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 160);
        app.areas.diagram = Rect::new(0, 2, 122, 35);
        app
    }

    #[test]
    fn test_sidebar_defaults_follow_width() {
        assert!(App::new(Settings::default(), ThemeMode::Dark, 160).state.sidebar_open());
        assert!(!App::new(Settings::default(), ThemeMode::Dark, 80).state.sidebar_open());
    }

    #[test]
    fn test_no_animation_setting() {
        let settings = Settings {
            animation: false,
            ..Settings::default()
        };
        let app = App::new(settings, ThemeMode::Light, 160);
        assert!(!app.state.animation_enabled());
        assert_eq!(app.state.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_click_processors_block() {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 80);
        app.areas.diagram = Rect::new(0, 2, 122, 35);
        assert!(!app.state.sidebar_open());

        // 122 columns over 1220 px: column 69 is x = 695; row 12 is y = 210
        let hit = app.click_diagram(69, 12);
        assert_eq!(hit, Some(NodeId::Processors));
        assert_eq!(app.state.expanded_panel(), Some(Panel::Processors));
        assert!(app.state.sidebar_open());
        assert_eq!(app.panel_view(), PanelView::Collector(CollectorFocus::Processors));
    }

    #[test]
    fn test_click_store_selects_signal() {
        let mut app = app();
        app.expand_panel(Panel::Sdk);
        // x = 1105, y = 230: Metrics store
        assert_eq!(app.click_diagram(110, 13), Some(NodeId::MetricsStore));
        assert_eq!(app.state.active_signal(), SignalFilter::Metrics);
        assert_eq!(app.state.expanded_panel(), None);
    }

    #[test]
    fn test_click_outside_diagram_is_ignored() {
        let mut app = app();
        assert_eq!(app.click_diagram(130, 10), None);
        assert_eq!(app.click_diagram(30, 1), None);
        assert_eq!(app.state, App::new(Settings::default(), ThemeMode::Dark, 160).state);
    }

    #[test]
    fn test_focus_and_activate() {
        let mut app = app();
        app.activate_focused();
        assert_eq!(app.state.expanded_panel(), None);

        app.focus_next();
        assert_eq!(app.focused, Some(NodeId::WebFrontend));
        app.activate_focused();
        assert_eq!(app.state.expanded_panel(), Some(Panel::Sdk));

        app.focus_prev();
        app.focus_prev();
        assert_eq!(app.focused, Some(NodeId::MetricsStore));
    }

    #[test]
    fn test_escape_collapses_then_clears_focus() {
        let mut app = app();
        app.focus_next();
        app.expand_panel(Panel::Resource);
        app.collapse_panel();
        assert_eq!(app.state.expanded_panel(), None);
        assert!(app.focused.is_some());
        app.collapse_panel();
        assert!(app.focused.is_none());
    }

    #[test]
    fn test_theme_toggle_swaps_palette() {
        let mut app = app();
        app.toggle_theme();
        assert_eq!(app.state.theme(), ThemeMode::Light);
        assert_eq!(app.theme.text, Theme::light().text);
    }

    #[test]
    fn test_pan_is_clamped() {
        let mut app = app();
        app.areas.diagram.width = 50;
        app.pan_left();
        assert_eq!(app.pan, 0.0);
        for _ in 0..20 {
            app.pan_right();
        }
        assert_eq!(app.pan, Viewport::max_pan(50));

        app.areas.diagram.width = 140;
        app.pan = 0.0;
        app.pan_right();
        assert_eq!(app.pan, 0.0);
    }

    #[test]
    fn test_widening_the_diagram_clamps_pan() {
        let mut app = app();
        app.set_diagram_area(Rect::new(1, 3, 50, 30));
        for _ in 0..20 {
            app.pan_right();
        }
        assert_eq!(app.pan, Viewport::max_pan(50));

        app.set_diagram_area(Rect::new(1, 3, 80, 30));
        assert_eq!(app.pan, Viewport::max_pan(80));
        // The first step left moves the visible window
        app.pan_left();
        assert_eq!(app.pan, (Viewport::max_pan(80) - PAN_STEP).max(0.0));

        app.set_diagram_area(Rect::new(1, 3, 120, 30));
        assert_eq!(app.pan, 0.0);
    }

    #[test]
    fn test_pan_left_from_stale_offset_moves_window() {
        let mut app = app();
        app.areas.diagram.width = 80;
        app.pan = 1000.0;
        app.pan_left();
        assert_eq!(app.pan, (Viewport::max_pan(80) - PAN_STEP).max(0.0));
    }

    #[test]
    fn test_scroll_is_bounded_by_content() {
        let mut app = app();
        // 12 wrapped rows in an 8-row pane
        app.set_sidebar_extent(12, 8);
        app.scroll_down(10);
        assert_eq!(app.sidebar_scroll, 4);
        app.scroll_up(1);
        assert_eq!(app.sidebar_scroll, 3);
        app.scroll_bottom();
        assert_eq!(app.sidebar_scroll, 4);
        app.select_signal(SignalFilter::Logs);
        assert_eq!(app.sidebar_scroll, 0);

        app.set_sidebar_extent(5, 8);
        app.scroll_bottom();
        assert_eq!(app.sidebar_scroll, 0);
    }

    #[test]
    fn test_taller_pane_clamps_scroll() {
        let mut app = app();
        app.set_sidebar_extent(50, 10);
        app.scroll_bottom();
        assert_eq!(app.sidebar_scroll, 40);
        app.set_sidebar_extent(50, 30);
        assert_eq!(app.sidebar_scroll, 20);
    }

    #[test]
    fn test_category_cycles() {
        let mut app = app();
        app.prev_category();
        assert_eq!(app.semconv_category, CATEGORIES.len() - 1);
        app.next_category();
        assert_eq!(app.semconv_category, 0);
    }

    fn copy_into(app: &mut App, out: &mut Vec<u8>, now: Instant) {
        app.copy_selected_with(|text| clipboard::copy_to(out, text, false), now);
    }

    #[test]
    fn test_copy_sets_two_second_notice() {
        let mut app = app();
        app.expand_panel(Panel::Collector);
        let now = Instant::now();
        let mut out = Vec::new();
        copy_into(&mut app, &mut out, now);

        let expected = clipboard::osc52_sequence(crate::data::collector::FULL_CONFIG);
        assert_eq!(out, expected.as_bytes());
        assert!(app.copy_acknowledged_at(now + Duration::from_millis(500)));
        assert!(!app.copy_acknowledged_at(now + Duration::from_secs(2)));
    }

    #[test]
    fn test_copy_without_code_reports_status() {
        let mut app = app();
        let mut out = Vec::new();
        copy_into(&mut app, &mut out, Instant::now());
        assert!(out.is_empty());
        assert!(app.copy_notice.is_none());
        assert_eq!(app.get_status_message(), Some("Nothing to copy in this panel"));

        app.next_block();
        assert_eq!(app.selected_block, None);
        assert_eq!(app.get_status_message(), Some("No code blocks in this panel"));
    }

    #[test]
    fn test_copy_failure_reports_status() {
        let mut app = app();
        app.expand_panel(Panel::Sdk);
        app.copy_selected_with(
            |_| Err(std::io::Error::new(std::io::ErrorKind::Other, "closed").into()),
            Instant::now(),
        );
        assert!(app.copy_notice.is_none());
        assert!(app.get_status_message().unwrap().starts_with("Copy failed"));
    }

    #[test]
    fn test_copied_block_is_the_one_with_the_hint() {
        let mut app = app();
        app.expand_panel(Panel::Sdk);

        // Move the selection to the custom span example
        app.next_block();
        assert_eq!(app.selected_block, Some(1));
        let content = app.panel_content();
        let hinted: Vec<&PlacedBlock> = content
            .blocks
            .iter()
            .filter(|b| content.lines[b.line].to_string().contains("y:copy"))
            .collect();
        assert_eq!(hinted.len(), 1);
        assert_eq!(hinted[0].snippet.title, "Custom span example");

        let mut out = Vec::new();
        copy_into(&mut app, &mut out, Instant::now());
        let expected = clipboard::osc52_sequence(&hinted[0].snippet.code);
        assert_eq!(out, expected.as_bytes());

        // Wraps around, both ways
        app.next_block();
        assert_eq!(app.selected_block, Some(0));
        app.prev_block();
        assert_eq!(app.selected_block, Some(1));
    }

    #[test]
    fn test_component_block_in_whole_collector_is_copyable() {
        let mut app = app();
        app.expand_panel(Panel::Collector);
        app.next_block();
        let content = app.panel_content();
        let selected = content.selected_block().unwrap().clone();
        assert_eq!(selected.snippet.code, PipelineStage::Receiver.components()[0].config);

        let mut out = Vec::new();
        copy_into(&mut app, &mut out, Instant::now());
        assert_eq!(out, clipboard::osc52_sequence(&selected.snippet.code).as_bytes());
    }

    #[test]
    fn test_block_selection_scrolls_sidebar_and_resets_with_panel() {
        let mut app = app();
        app.areas.sidebar = Rect::new(124, 2, 36, 37);
        app.expand_panel(Panel::Sdk);
        app.set_sidebar_extent(200, 35);
        app.next_block();
        assert!(app.sidebar_scroll > 0);

        app.expand_panel(Panel::Resource);
        assert_eq!(app.selected_block, None);
        assert_eq!(app.sidebar_scroll, 0);
    }
}
