use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::state::SignalFilter;
use crate::ui::{common, panels};

/// Where `e` writes the fixture export.
const EXPORT_FILE: &str = "otel-guide-export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Signal tabs
        KeyCode::Char('1') | KeyCode::Char('a') => app.select_signal(SignalFilter::All),
        KeyCode::Char('2') | KeyCode::Char('t') => app.select_signal(SignalFilter::Traces),
        KeyCode::Char('3') | KeyCode::Char('m') => app.select_signal(SignalFilter::Metrics),
        KeyCode::Char('4') | KeyCode::Char('l') => app.select_signal(SignalFilter::Logs),

        // Diagram focus
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev();
            } else {
                app.focus_next();
            }
        }
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Left => app.pan_left(),
        KeyCode::Right => app.pan_right(),

        // Close panel, then clear focus
        KeyCode::Esc | KeyCode::Backspace => app.collapse_panel(),

        // Sidebar scrolling
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::Home => app.scroll_top(),
        KeyCode::End => app.scroll_bottom(),

        KeyCode::Char('[') => app.prev_category(),
        KeyCode::Char(']') => app.next_category(),

        KeyCode::Char(' ') => app.toggle_animation(),
        KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('b') => app.toggle_sidebar(),
        KeyCode::Char('n') => app.next_block(),
        KeyCode::Char('N') => app.prev_block(),
        KeyCode::Char('y') => app.copy_code(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => {
            let export_path = std::path::PathBuf::from(EXPORT_FILE);
            match app.export_fixtures(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        // Overview concept shortcuts
        KeyCode::Char(c) => {
            if let Some(panel) = panels::concept_panel(c) {
                app.expand_panel(panel);
            }
        }

        _ => {}
    }
}

/// Handle a mouse event
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);
    let over_sidebar = contains(app.areas.sidebar, column, row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(app.areas.tabs, column, row) {
                if let Some(signal) = common::tab_at(app.areas.tabs.x, column) {
                    app.select_signal(signal);
                }
            } else if contains(app.areas.diagram, column, row) {
                app.click_diagram(column, row);
            }
        }
        MouseEventKind::Down(MouseButton::Right) => app.collapse_panel(),
        MouseEventKind::ScrollUp if over_sidebar => app.scroll_up(3),
        MouseEventKind::ScrollDown if over_sidebar => app.scroll_down(3),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => app.pan_left(),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => app.pan_right(),
        _ => {}
    }
}

fn contains(area: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::{Panel, ThemeMode};
    use crate::ui::panels::{CollectorFocus, PanelView};
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 160);
        app.areas.tabs = Rect::new(0, 1, 104, 1);
        app.areas.diagram = Rect::new(1, 3, 122, 35);
        app.areas.sidebar = Rect::new(124, 2, 36, 37);
        app.set_sidebar_extent(100, 35);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_and_help() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        // Any key closes help without acting
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_signal_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.state.active_signal(), SignalFilter::Metrics);
        handle_key_event(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.state.active_signal(), SignalFilter::Logs);
        handle_key_event(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.panel_view(), PanelView::Overview);
    }

    #[test]
    fn test_toggles() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        assert!(!app.state.animation_enabled());
        handle_key_event(&mut app, key(KeyCode::Char('T')));
        assert_eq!(app.state.theme(), ThemeMode::Light);
        handle_key_event(&mut app, key(KeyCode::Char('b')));
        assert!(!app.state.sidebar_open());
    }

    #[test]
    fn test_focus_enter_and_escape() {
        let mut app = app();
        for _ in 0..7 {
            handle_key_event(&mut app, key(KeyCode::Tab));
        }
        assert_eq!(app.focused, Some(crate::diagram::NodeId::Collector));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.panel_view(), PanelView::Collector(CollectorFocus::Collector));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.panel_view(), PanelView::Overview);
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.focused, Some(crate::diagram::NodeId::SystemLogs));
    }

    #[test]
    fn test_concept_shortcut_opens_panel() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('v')));
        assert_eq!(app.state.expanded_panel(), Some(Panel::SemConv));
        handle_key_event(&mut app, key(KeyCode::Char(']')));
        assert_eq!(app.semconv_category, 1);
        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.state.expanded_panel(), Some(Panel::Resource));
    }

    #[test]
    fn test_block_keys_move_selection() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('s')));
        handle_key_event(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.selected_block, Some(1));
        handle_key_event(&mut app, key(KeyCode::Char('N')));
        assert_eq!(app.selected_block, Some(0));
        assert_eq!(
            app.panel_content().selected_block().unwrap().snippet.title,
            "Auto-instrumentation setup"
        );
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::PageDown));
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.sidebar_scroll, 11);
        handle_key_event(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.sidebar_scroll, 10);
        handle_key_event(&mut app, key(KeyCode::Home));
        assert_eq!(app.sidebar_scroll, 0);
    }

    #[test]
    fn test_click_tab_selects_signal() {
        let mut app = app();
        handle_mouse_event(&mut app, click(MouseEventKind::Down(MouseButton::Left), 20, 1));
        assert_eq!(app.state.active_signal(), SignalFilter::Traces);
    }

    #[test]
    fn test_click_diagram_expands_panel() {
        let mut app = app();
        // Diagram starts at column 1, row 3: column 70 is x = 695, row 13 is y = 210
        handle_mouse_event(&mut app, click(MouseEventKind::Down(MouseButton::Left), 70, 13));
        assert_eq!(app.state.expanded_panel(), Some(Panel::Processors));

        handle_mouse_event(&mut app, click(MouseEventKind::Down(MouseButton::Right), 70, 13));
        assert_eq!(app.state.expanded_panel(), None);
    }

    #[test]
    fn test_wheel_scrolls_sidebar_only_when_over_it() {
        let mut app = app();
        handle_mouse_event(&mut app, click(MouseEventKind::ScrollDown, 130, 10));
        assert_eq!(app.sidebar_scroll, 3);
        handle_mouse_event(&mut app, click(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.sidebar_scroll, 3);
    }
}
