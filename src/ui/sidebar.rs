//! Scrollable sidebar hosting the active detail panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::panels::PanelView;

/// The text area inside the sidebar border.
pub fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Rows `lines` occupy once wrapped to `width` columns.
pub fn wrapped_rows(lines: &[Line<'static>], width: u16) -> u16 {
    let rows = Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn render(frame: &mut Frame, app: &App, area: Rect, view: PanelView, lines: Vec<Line<'static>>) {
    let mut title = vec![Span::styled(format!(" {} ", view.title()), app.theme.header)];
    if view.is_expanded() {
        title.push(Span::styled(
            "Esc:close ",
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    let scroll = app.sidebar_scroll.min(app.max_scroll());
    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    if app.max_scroll() > 0 {
        let last = scroll.saturating_add(app.sidebar_height).min(app.sidebar_rows);
        block = block.title_bottom(
            Line::from(format!(" {}-{}/{} ", scroll + 1, last, app.sidebar_rows)).right_aligned(),
        );
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_rows_counts_wrapping() {
        let lines = vec![
            Line::from("short"),
            Line::from("x".repeat(40)),
            Line::default(),
        ];
        assert_eq!(wrapped_rows(&lines, 80), 3);
        assert_eq!(wrapped_rows(&lines, 20), 4);
        assert_eq!(wrapped_rows(&lines, 0), 0);
    }
}
