//! Terminal rendering.
//!
//! [`draw`] lays out one frame: header, signal tabs, the diagram with the
//! optional sidebar beside it, and the status bar. It records the screen
//! areas on [`App`] so mouse events can be mapped back to targets.

pub mod code_block;
pub mod common;
pub mod diagram;
pub mod panels;
pub mod sidebar;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub use theme::Theme;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// Draw a full frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5.min(area.height));
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Signal tabs
        Constraint::Min(8),    // Diagram and sidebar
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let (diagram_area, sidebar_area) = if app.state.sidebar_open() {
        let columns = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(app.settings.sidebar_width.min(area.width / 2)),
        ])
        .split(chunks[2]);
        (columns[0], Some(columns[1]))
    } else {
        (chunks[2], None)
    };

    app.areas.tabs = chunks[1];
    app.set_diagram_area(diagram::inner(diagram_area));
    app.areas.sidebar = sidebar_area.unwrap_or_default();

    let view = app.panel_view();
    let content = app.panel_content();
    let text_area = sidebar::inner(app.areas.sidebar);
    app.set_sidebar_extent(
        sidebar::wrapped_rows(&content.lines, text_area.width),
        text_area.height,
    );

    let app = &*app;
    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);
    diagram::render(frame, app, diagram_area);
    if let Some(sidebar_area) = sidebar_area {
        sidebar::render(frame, app, sidebar_area, view, content.lines);
    }
    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::{Panel, ThemeMode};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_smoke_render_with_sidebar() {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 160);
        let text = render(&mut app, 160, 45);
        assert!(text.contains("OpenTelemetry Visual Guide"));
        assert!(text.contains("All Signals"));
        assert!(text.contains("Overview"));
        assert!(text.contains("Web Frontend"));
        assert_eq!(app.areas.sidebar.width, 56);
        assert!(app.sidebar_rows > 0);
        assert_eq!(app.sidebar_height, 45 - 3 - 2);
    }

    #[test]
    fn test_end_keeps_the_pane_full() {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 160);
        app.expand_panel(Panel::Collector);
        render(&mut app, 160, 45);
        assert!(app.sidebar_rows > app.sidebar_height);

        app.scroll_bottom();
        assert_eq!(app.sidebar_scroll + app.sidebar_height, app.sidebar_rows);
        let text = render(&mut app, 160, 45);
        let indicator = format!(
            " {}-{}/{} ",
            app.sidebar_scroll + 1,
            app.sidebar_rows,
            app.sidebar_rows
        );
        assert!(text.contains(&indicator), "{indicator}");
        // The last line of the panel is on screen
        assert!(text.contains("Switch backends without code changes"));
    }

    #[test]
    fn test_taller_terminal_clamps_scroll_offset() {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 160);
        app.expand_panel(Panel::Sdk);
        render(&mut app, 160, 45);
        app.scroll_bottom();
        // A taller terminal shows more rows, so the old offset is too far
        render(&mut app, 160, 60);
        assert!(app.sidebar_scroll <= app.max_scroll());
    }

    #[test]
    fn test_expanded_panel_title_and_help() {
        let mut app = App::new(Settings::default(), ThemeMode::Light, 160);
        app.expand_panel(Panel::Processors);
        app.toggle_help();
        let text = render(&mut app, 160, 45);
        assert!(text.contains("Collector - Processors"));
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_sidebar_closed_gives_diagram_full_width() {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 80);
        render(&mut app, 120, 30);
        assert_eq!(app.areas.sidebar, Rect::default());
        assert_eq!(app.areas.diagram.width, 118);
    }

    #[test]
    fn test_too_small_terminal() {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 40);
        let text = render(&mut app, 40, 10);
        assert!(text.contains("Terminal too small"));
    }
}
