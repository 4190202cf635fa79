//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::state::SignalFilter;
use crate::ui::Theme;

/// Cells of padding `Tabs` puts around each title, and the divider width.
const TAB_PADDING: u16 = 2;
const TAB_DIVIDER: u16 = 1;

/// Render the header bar: title, tagline, animation state and theme.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (icon, status) = if app.state.animation_enabled() {
        ("▶", "Playing")
    } else {
        ("⏸", "Paused")
    };

    let line = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(app.theme.highlight)),
        Span::styled(
            "OpenTelemetry Visual Guide ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled("A visual walkthrough of an OTel pipeline", app.theme.muted_style()),
        Span::raw(" │ "),
        Span::styled(format!("{} {}", icon, status), Style::default().fg(app.theme.highlight)),
        Span::raw(" │ "),
        Span::raw(format!("Theme: {}", app.state.theme().label())),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn tab_title(signal: SignalFilter) -> String {
    let index = SignalFilter::TABS.iter().position(|s| *s == signal).unwrap_or(0) + 1;
    format!("{}:{}", index, signal.label())
}

/// Render the signal tabs.
///
/// Highlights the active signal.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = SignalFilter::TABS
        .iter()
        .map(|signal| {
            let mut spans = Vec::new();
            if let Some(kind) = crate::state::SignalKind::ALL.iter().find(|k| k.plural() == *signal) {
                spans.push(Span::styled("● ", Style::default().fg(Theme::signal_color(*kind))));
            }
            spans.push(Span::raw(tab_title(*signal)));
            Line::from(spans)
        })
        .collect();

    let selected = SignalFilter::TABS
        .iter()
        .position(|s| *s == app.state.active_signal())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Which tab, if any, covers `column` of a tab row starting at `area_x`.
pub fn tab_at(area_x: u16, column: u16) -> Option<SignalFilter> {
    let mut x = area_x;
    for signal in SignalFilter::TABS {
        let dot = if signal == SignalFilter::All { 0 } else { 2 };
        let width = TAB_PADDING + dot + tab_title(signal).chars().count() as u16;
        if column >= x && column < x + width {
            return Some(signal);
        }
        x += width + TAB_DIVIDER;
    }
    None
}

/// Render the status bar at the bottom.
///
/// Shows the copy acknowledgement or a temporary status message, otherwise
/// the available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if app.copy_acknowledged() {
        let paragraph = Paragraph::new(" ✓ Copied to clipboard ")
            .style(Style::default().fg(app.theme.healthy));
        frame.render_widget(paragraph, area);
        return;
    }

    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let focus = match app.focused {
        Some(id) => format!("{} | ", crate::diagram::node(id).label),
        None => String::new(),
    };
    let controls = if app.panel_view().has_code() {
        "Tab:focus Enter:open 1-4:signal n/N:block y:copy j/k:scroll space:pause ?:help q:quit"
    } else {
        "Tab:focus Enter:open 1-4:signal j/k:scroll space:pause ?:help q:quit"
    };

    let paragraph = Paragraph::new(format!(" {}{}", focus, controls))
        .style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(title, Style::default().add_modifier(Modifier::BOLD))])
    };
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Diagram"),
        Line::from("  Tab/S-Tab   Focus next/previous node"),
        Line::from("  Enter       Open focused node"),
        Line::from("  ←/→         Pan a narrow diagram"),
        Line::from("  Click       Open a node"),
        Line::from(""),
        section(" Signals & Panels"),
        Line::from("  1-4 a/t/m/l Select signal"),
        Line::from("  s c v r     SDK, Collector, SemConv, Resource"),
        Line::from("  Esc         Close panel"),
        Line::from("  ↑/↓ j/k     Scroll sidebar"),
        Line::from("  PgUp/PgDn   Scroll 10 lines"),
        Line::from("  [ ]         Switch convention category"),
        Line::from("  n/N         Select next/previous code block"),
        Line::from("  y           Copy selected code block"),
        Line::from(""),
        section(" General"),
        Line::from("  Space       Pause/resume animation"),
        Line::from("  T           Toggle theme"),
        Line::from("  b           Toggle sidebar"),
        Line::from("  e           Export data to JSON"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 50u16.min(area.width.saturating_sub(4));
    let help_height = 29u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_hit_ranges() {
        // " 1:All Signals " is 15 wide, then the divider
        assert_eq!(tab_at(0, 0), Some(SignalFilter::All));
        assert_eq!(tab_at(0, 14), Some(SignalFilter::All));
        assert_eq!(tab_at(0, 15), None);
        // " ● 2:Traces " spans 16..28
        assert_eq!(tab_at(0, 16), Some(SignalFilter::Traces));
        assert_eq!(tab_at(0, 27), Some(SignalFilter::Traces));
        assert_eq!(tab_at(0, 29), Some(SignalFilter::Metrics));
        assert_eq!(tab_at(10, 5), None);
        assert_eq!(tab_at(0, 200), None);
    }
}
