//! Pipeline diagram drawn on a braille canvas.
//!
//! The model lives in [`crate::diagram`]; this module only maps it onto
//! ratatui canvas shapes. Virtual y grows downwards, canvas y upwards, so
//! every y coordinate goes through [`flip`].

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as Segment, Points, Rectangle},
        Block, Borders,
    },
    Frame,
};

use crate::app::App;
use crate::data::collector::{DIAGRAM_EXPORTERS, DIAGRAM_PROCESSORS, DIAGRAM_RECEIVERS};
use crate::data::PipelineStage;
use crate::diagram::geometry::{self, CANVAS_HEIGHT};
use crate::diagram::layout::{
    DiagramNode, Layer, NodeId, NodeStyle, INFRA_CAPTION, NODES, SERVICES_CAPTION,
};
use crate::diagram::{visible_markers, Stroke, PATHS};
use crate::state::SignalKind;
use crate::ui::theme::{ELASTIC_COLOR, Theme};

/// Length of one curve piece, and of each dash, in virtual pixels.
const CURVE_STEP: f64 = 12.0;
const MARKER_RADIUS: f64 = 6.0;
/// Left padding of text inside a node, in virtual pixels.
const TEXT_INSET: f64 = 8.0;

fn flip(y: f64) -> f64 {
    CANVAS_HEIGHT - y
}

fn block(app: &App, partial: bool) -> Block<'static> {
    let title = if partial {
        " Pipeline  ←/→ pan "
    } else {
        " Pipeline "
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
}

/// The canvas area inside the diagram border.
pub fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Render the diagram into `area` (border included).
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let canvas_area = inner(area);
    let viewport = app.viewport();
    let theme = &app.theme;
    let markers = visible_markers(&app.state, app.elapsed());
    let row_px = if canvas_area.height == 0 {
        CANVAS_HEIGHT
    } else {
        CANVAS_HEIGHT / f64::from(canvas_area.height)
    };

    let canvas = Canvas::default()
        .block(block(app, viewport.is_partial()))
        .marker(symbols::Marker::Braille)
        .x_bounds([viewport.x_min, viewport.x_max])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| {
            for flow in PATHS {
                let touches_focus = app.focused.is_some_and(|f| f == flow.from || f == flow.to);
                let color = if touches_focus {
                    theme.highlight
                } else {
                    match flow.tint {
                        Some(kind) if app.state.active_signal().admits(kind) => {
                            Theme::signal_color(kind)
                        }
                        _ => theme.border,
                    }
                };
                draw_curve(ctx, &flow.curve, flow.stroke, color);
            }

            for node in NODES {
                draw_node_frame(ctx, node, app.focused == Some(node.id), theme);
            }

            ctx.layer();
            for marker in &markers {
                let color = Theme::signal_color(marker.kind);
                let (x, y) = (marker.at.x, flip(marker.at.y));
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: MARKER_RADIUS,
                    color,
                });
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color,
                });
            }

            for layer in [Layer::Sources, Layer::Collector, Layer::Backend] {
                let origin = layer.label_origin();
                ctx.print(
                    origin.x,
                    flip(origin.y),
                    Span::styled(layer.label(), theme.muted_style().add_modifier(Modifier::BOLD)),
                );
            }
            for (caption, at) in [SERVICES_CAPTION, INFRA_CAPTION] {
                ctx.print(at.x, flip(at.y), Span::styled(caption, theme.muted_style()));
            }

            for node in NODES {
                let focused = app.focused == Some(node.id);
                print_stack(ctx, node, row_px, node_text(node, focused, theme));
            }
            print_footers(ctx, theme);
        });

    frame.render_widget(canvas, area);
}

fn draw_curve(ctx: &mut Context, curve: &geometry::CubicBezier, stroke: Stroke, color: Color) {
    let points = curve.sample(curve.segments_for(CURVE_STEP));
    for (i, pair) in points.windows(2).enumerate() {
        if stroke == Stroke::Dashed && i % 2 == 1 {
            continue;
        }
        ctx.draw(&Segment {
            x1: pair[0].x,
            y1: flip(pair[0].y),
            x2: pair[1].x,
            y2: flip(pair[1].y),
            color,
        });
    }
}

fn node_color(node: &DiagramNode, theme: &Theme) -> Color {
    match node.style {
        NodeStyle::Service => theme.text,
        NodeStyle::Infra => theme.muted,
        NodeStyle::CollectorFrame => theme.highlight,
        NodeStyle::Stage(stage) => Theme::stage_color(stage),
        NodeStyle::BackendFrame => ELASTIC_COLOR,
        NodeStyle::Store(kind) => Theme::signal_color(kind),
    }
}

fn draw_node_frame(ctx: &mut Context, node: &DiagramNode, focused: bool, theme: &Theme) {
    let r = node.rect;
    ctx.draw(&Rectangle {
        x: r.x,
        y: flip(r.bottom()),
        width: r.width,
        height: r.height,
        color: node_color(node, theme),
    });
    if focused {
        let inset = 4.0;
        ctx.draw(&Rectangle {
            x: r.x + inset,
            y: flip(r.bottom()) + inset,
            width: r.width - 2.0 * inset,
            height: r.height - 2.0 * inset,
            color: theme.highlight,
        });
    }
}

fn signal_dots<'a>(kinds: &[SignalKind]) -> Vec<Span<'a>> {
    kinds
        .iter()
        .map(|kind| Span::styled("● ", Style::default().fg(Theme::signal_color(*kind))))
        .collect()
}

/// Text lines printed inside a node, top to bottom.
fn node_text<'a>(node: &DiagramNode, focused: bool, theme: &Theme) -> Vec<Line<'a>> {
    let title_style = if focused {
        theme.selected.fg(node_color(node, theme))
    } else {
        Style::default()
            .fg(node_color(node, theme))
            .add_modifier(Modifier::BOLD)
    };
    let title = Span::styled(node.label, title_style);
    let subtitle = Span::styled(node.subtitle, theme.muted_style());

    match node.style {
        NodeStyle::Service => {
            let mut badge = vec![Span::styled("OTel SDK ", Style::default().fg(theme.highlight))];
            badge.extend(signal_dots(&SignalKind::ALL));
            vec![Line::from(title), Line::from(subtitle), Line::from(badge)]
        }
        NodeStyle::Infra => {
            let mut third = vec![subtitle, Span::raw(" ")];
            third.extend(signal_dots(&[SignalKind::Metric, SignalKind::Log]));
            vec![Line::from(title), Line::from(third)]
        }
        NodeStyle::CollectorFrame => vec![Line::from(title)],
        NodeStyle::Stage(stage) => {
            let names = match stage {
                PipelineStage::Receiver => DIAGRAM_RECEIVERS,
                PipelineStage::Processor => DIAGRAM_PROCESSORS,
                PipelineStage::Exporter => DIAGRAM_EXPORTERS,
            };
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{} ", node.subtitle), title_style),
                title,
            ])];
            lines.extend(
                names
                    .iter()
                    .map(|name| Line::from(Span::styled(*name, Style::default().fg(theme.text)))),
            );
            lines
        }
        NodeStyle::BackendFrame => vec![Line::from(title), Line::from(subtitle)],
        NodeStyle::Store(_) => vec![Line::from(vec![title, Span::raw(" "), subtitle])],
    }
}

/// Print `lines` one text row apart, dropping whatever does not fit.
fn print_stack<'a>(ctx: &mut Context<'a>, node: &DiagramNode, row_px: f64, lines: Vec<Line<'a>>) {
    let r = node.rect;
    let limit = match node.style {
        // Stages sit inside the frame; only the header strip is free.
        NodeStyle::CollectorFrame => r.y + crate::diagram::layout::COLLECTOR_HEADER_HEIGHT,
        // Stores sit inside the backend frame below its title.
        NodeStyle::BackendFrame => node_top(NodeId::Apm),
        _ => r.bottom(),
    };
    let mut y = r.y + row_px.min(r.height / 2.0) * 0.75;
    for line in lines {
        if y > limit - 2.0 {
            break;
        }
        ctx.print(r.x + TEXT_INSET, flip(y), line);
        y += row_px;
    }
}

fn node_top(id: NodeId) -> f64 {
    crate::diagram::node(id).rect.y
}

/// Captions below the collector stages and the backend stores.
fn print_footers(ctx: &mut Context, theme: &Theme) {
    let collector = crate::diagram::node(NodeId::Collector).rect;
    let mut legend = Vec::new();
    for kind in SignalKind::ALL {
        legend.push(Span::styled("● ", Style::default().fg(Theme::signal_color(kind))));
        legend.push(Span::styled(format!("{}  ", kind.label()), theme.muted_style()));
    }
    ctx.print(
        collector.x + TEXT_INSET,
        flip(collector.bottom() - 14.0),
        Line::from(legend),
    );

    let backend = crate::diagram::node(NodeId::Backend).rect;
    ctx.print(
        backend.x + TEXT_INSET,
        flip(backend.bottom() - 20.0),
        Span::styled("via OTLP", theme.muted_style()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::ThemeMode;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_labels_at_full_width() {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 140);
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.areas.diagram = inner(area);
                render(frame, &app, area);
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Pipeline"));
        assert!(text.contains("SOURCES"));
        assert!(text.contains("Web Frontend"));
        assert!(text.contains("via OTLP"));
        assert!(!text.contains("pan"));
    }

    #[test]
    fn test_narrow_area_shows_pan_hint() {
        let mut app = App::new(Settings::default(), ThemeMode::Dark, 60);
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.areas.diagram = inner(area);
                render(frame, &app, area);
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("pan"));
        assert!(text.contains("SOURCES"));
        assert!(!text.contains("BACKEND"));
    }
}
