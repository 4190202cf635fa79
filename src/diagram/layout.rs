//! Fixed node layout, click targets and the pannable viewport.

use crate::data::PipelineStage;
use crate::state::{Panel, SignalFilter, SignalKind};

use super::geometry::{Point, Rect, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Every box drawn on the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    WebFrontend,
    ApiGateway,
    OrderService,
    LinuxVms,
    Kubernetes,
    SystemLogs,
    Collector,
    Receivers,
    Processors,
    Exporters,
    Backend,
    Apm,
    MetricsStore,
    LogsStore,
}

/// Column of the diagram a node lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Sources,
    Collector,
    Backend,
}

impl Layer {
    pub fn label(&self) -> &'static str {
        match self {
            Layer::Sources => "SOURCES",
            Layer::Collector => "COLLECTOR",
            Layer::Backend => "BACKEND",
        }
    }

    /// Where the layer caption is printed (top-left, virtual pixels).
    pub fn label_origin(&self) -> Point {
        match self {
            Layer::Sources => Point::new(16.0, 16.0),
            Layer::Collector => Point::new(500.0, 16.0),
            Layer::Backend => Point::new(1040.0, 16.0),
        }
    }
}

/// How a node is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStyle {
    Service,
    Infra,
    CollectorFrame,
    Stage(PipelineStage),
    BackendFrame,
    Store(SignalKind),
}

/// What clicking (or activating) a node does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeAction {
    ExpandPanel(Panel),
    SelectSignal(SignalFilter),
}

#[derive(Debug, Clone, Copy)]
pub struct DiagramNode {
    pub id: NodeId,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub layer: Layer,
    pub style: NodeStyle,
    pub rect: Rect,
    pub action: Option<NodeAction>,
}

const SERVICE_X: f64 = 32.0;
const SERVICE_WIDTH: f64 = 200.0;
const SERVICE_HEIGHT: f64 = 84.0;
const INFRA_HEIGHT: f64 = 70.0;
const STAGE_TOP: f64 = 130.0;
const STAGE_HEIGHT: f64 = 160.0;
const STORE_X: f64 = 1037.0;
const STORE_WIDTH: f64 = 146.0;
const STORE_HEIGHT: f64 = 44.0;

/// Height of the clickable title strip at the top of the collector frame.
pub const COLLECTOR_HEADER_HEIGHT: f64 = 45.0;

/// Section captions over the sources column.
pub const SERVICES_CAPTION: (&str, Point) = ("Application Services", Point::new(40.0, 56.0));
pub const INFRA_CAPTION: (&str, Point) = ("Infrastructure", Point::new(40.0, 410.0));

pub const NODES: &[DiagramNode] = &[
    DiagramNode {
        id: NodeId::WebFrontend,
        label: "Web Frontend",
        subtitle: "React",
        layer: Layer::Sources,
        style: NodeStyle::Service,
        rect: Rect::new(SERVICE_X, 79.0, SERVICE_WIDTH, SERVICE_HEIGHT),
        action: Some(NodeAction::ExpandPanel(Panel::Sdk)),
    },
    DiagramNode {
        id: NodeId::ApiGateway,
        label: "API Gateway",
        subtitle: "Node.js",
        layer: Layer::Sources,
        style: NodeStyle::Service,
        rect: Rect::new(SERVICE_X, 181.0, SERVICE_WIDTH, SERVICE_HEIGHT),
        action: Some(NodeAction::ExpandPanel(Panel::Sdk)),
    },
    DiagramNode {
        id: NodeId::OrderService,
        label: "Order Service",
        subtitle: "Python",
        layer: Layer::Sources,
        style: NodeStyle::Service,
        rect: Rect::new(SERVICE_X, 283.0, SERVICE_WIDTH, SERVICE_HEIGHT),
        action: Some(NodeAction::ExpandPanel(Panel::Sdk)),
    },
    DiagramNode {
        id: NodeId::LinuxVms,
        label: "Linux VMs",
        subtitle: "CPU, Memory, Disk",
        layer: Layer::Sources,
        style: NodeStyle::Infra,
        rect: Rect::new(SERVICE_X, 434.0, SERVICE_WIDTH, INFRA_HEIGHT),
        action: Some(NodeAction::ExpandPanel(Panel::Resource)),
    },
    DiagramNode {
        id: NodeId::Kubernetes,
        label: "Kubernetes",
        subtitle: "Pods, Nodes, Events",
        layer: Layer::Sources,
        style: NodeStyle::Infra,
        rect: Rect::new(SERVICE_X, 520.0, SERVICE_WIDTH, INFRA_HEIGHT),
        action: Some(NodeAction::ExpandPanel(Panel::Resource)),
    },
    DiagramNode {
        id: NodeId::SystemLogs,
        label: "System Logs",
        subtitle: "syslog, journald",
        layer: Layer::Sources,
        style: NodeStyle::Infra,
        rect: Rect::new(SERVICE_X, 606.0, SERVICE_WIDTH, INFRA_HEIGHT),
        action: Some(NodeAction::ExpandPanel(Panel::Resource)),
    },
    DiagramNode {
        id: NodeId::Collector,
        label: "OpenTelemetry Collector",
        subtitle: "traces · metrics · logs",
        layer: Layer::Collector,
        style: NodeStyle::CollectorFrame,
        rect: Rect::new(480.0, 80.0, 420.0, 240.0),
        action: Some(NodeAction::ExpandPanel(Panel::Collector)),
    },
    DiagramNode {
        id: NodeId::Receivers,
        label: "Receivers",
        subtitle: "↓",
        layer: Layer::Collector,
        style: NodeStyle::Stage(PipelineStage::Receiver),
        rect: Rect::new(496.0, STAGE_TOP, 124.0, STAGE_HEIGHT),
        action: Some(NodeAction::ExpandPanel(Panel::Receivers)),
    },
    DiagramNode {
        id: NodeId::Processors,
        label: "Processors",
        subtitle: "⚙",
        layer: Layer::Collector,
        style: NodeStyle::Stage(PipelineStage::Processor),
        rect: Rect::new(630.0, STAGE_TOP, 124.0, STAGE_HEIGHT),
        action: Some(NodeAction::ExpandPanel(Panel::Processors)),
    },
    DiagramNode {
        id: NodeId::Exporters,
        label: "Exporters",
        subtitle: "↑",
        layer: Layer::Collector,
        style: NodeStyle::Stage(PipelineStage::Exporter),
        rect: Rect::new(764.0, STAGE_TOP, 120.0, STAGE_HEIGHT),
        action: Some(NodeAction::ExpandPanel(Panel::Exporters)),
    },
    DiagramNode {
        id: NodeId::Backend,
        label: "Elastic",
        subtitle: "Observability",
        layer: Layer::Backend,
        style: NodeStyle::BackendFrame,
        rect: Rect::new(1020.0, 80.0, 180.0, 300.0),
        action: None,
    },
    DiagramNode {
        id: NodeId::Apm,
        label: "APM",
        subtitle: "Traces",
        layer: Layer::Backend,
        style: NodeStyle::Store(SignalKind::Trace),
        rect: Rect::new(STORE_X, 151.0, STORE_WIDTH, STORE_HEIGHT),
        action: Some(NodeAction::SelectSignal(SignalFilter::Traces)),
    },
    DiagramNode {
        id: NodeId::MetricsStore,
        label: "Metrics",
        subtitle: "Time Series",
        layer: Layer::Backend,
        style: NodeStyle::Store(SignalKind::Metric),
        rect: Rect::new(STORE_X, 208.0, STORE_WIDTH, STORE_HEIGHT),
        action: Some(NodeAction::SelectSignal(SignalFilter::Metrics)),
    },
    DiagramNode {
        id: NodeId::LogsStore,
        label: "Logs",
        subtitle: "Records",
        layer: Layer::Backend,
        style: NodeStyle::Store(SignalKind::Log),
        rect: Rect::new(STORE_X, 265.0, STORE_WIDTH, STORE_HEIGHT),
        action: Some(NodeAction::SelectSignal(SignalFilter::Logs)),
    },
];

/// Tab order for keyboard focus: left to right, top to bottom.
pub const FOCUS_ORDER: [NodeId; 13] = [
    NodeId::WebFrontend,
    NodeId::ApiGateway,
    NodeId::OrderService,
    NodeId::LinuxVms,
    NodeId::Kubernetes,
    NodeId::SystemLogs,
    NodeId::Collector,
    NodeId::Receivers,
    NodeId::Processors,
    NodeId::Exporters,
    NodeId::Apm,
    NodeId::MetricsStore,
    NodeId::LogsStore,
];

/// Look up a node by id.
pub fn node(id: NodeId) -> &'static DiagramNode {
    NODES
        .iter()
        .find(|n| n.id == id)
        .unwrap_or(&NODES[0])
}

impl DiagramNode {
    /// The part of the node that reacts to clicks.
    ///
    /// The collector frame only reacts on its header strip; the stages below
    /// it are separate targets.
    pub fn hit_area(&self) -> Rect {
        match self.style {
            NodeStyle::CollectorFrame => Rect::new(
                self.rect.x,
                self.rect.y,
                self.rect.width,
                COLLECTOR_HEADER_HEIGHT,
            ),
            _ => self.rect,
        }
    }
}

/// Innermost interactive node under `p`.
pub fn hit_test(p: Point) -> Option<&'static DiagramNode> {
    NODES
        .iter()
        .filter(|n| n.action.is_some() && n.hit_area().contains(p))
        .min_by(|a, b| a.hit_area().area().total_cmp(&b.hit_area().area()))
}

/// Next node in [`FOCUS_ORDER`], wrapping. `None` starts at the first node.
pub fn focus_next(current: Option<NodeId>) -> NodeId {
    match current.and_then(|id| FOCUS_ORDER.iter().position(|n| *n == id)) {
        Some(i) => FOCUS_ORDER[(i + 1) % FOCUS_ORDER.len()],
        None => FOCUS_ORDER[0],
    }
}

/// Previous node in [`FOCUS_ORDER`], wrapping. `None` starts at the last node.
pub fn focus_prev(current: Option<NodeId>) -> NodeId {
    let len = FOCUS_ORDER.len();
    match current.and_then(|id| FOCUS_ORDER.iter().position(|n| *n == id)) {
        Some(i) => FOCUS_ORDER[(i + len - 1) % len],
        None => FOCUS_ORDER[len - 1],
    }
}

/// Below this many columns the canvas stops shrinking and becomes pannable.
pub const MIN_DIAGRAM_COLUMNS: u16 = 100;

/// Virtual pixels moved per pan step.
pub const PAN_STEP: f64 = 80.0;

/// Horizontal window of the virtual canvas shown in the diagram area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
}

impl Viewport {
    /// Window for an area `columns` wide, scrolled `pan` pixels to the right.
    ///
    /// `pan` is clamped so the window never leaves the canvas.
    pub fn fit(columns: u16, pan: f64) -> Self {
        let width = Self::visible_width(columns);
        let offset = if pan.is_finite() {
            pan.clamp(0.0, CANVAS_WIDTH - width)
        } else {
            0.0
        };
        Self {
            x_min: offset,
            x_max: offset + width,
        }
    }

    fn visible_width(columns: u16) -> f64 {
        if columns >= MIN_DIAGRAM_COLUMNS || columns == 0 {
            CANVAS_WIDTH
        } else {
            CANVAS_WIDTH * f64::from(columns) / f64::from(MIN_DIAGRAM_COLUMNS)
        }
    }

    /// Largest useful pan offset for an area `columns` wide.
    pub fn max_pan(columns: u16) -> f64 {
        CANVAS_WIDTH - Self::visible_width(columns)
    }

    /// True when part of the canvas is hidden.
    pub fn is_partial(&self) -> bool {
        self.x_max - self.x_min < CANVAS_WIDTH
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Map a terminal cell inside `area` to virtual coordinates (cell centre).
    pub fn cell_to_virtual(
        &self,
        area: ratatui::layout::Rect,
        column: u16,
        row: u16,
    ) -> Option<Point> {
        if area.width == 0
            || area.height == 0
            || column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
        let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
        Some(Point::new(
            self.x_min + fx * self.width(),
            fy * CANVAS_HEIGHT,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_focusable_node_is_interactive() {
        for id in FOCUS_ORDER {
            assert!(node(id).action.is_some(), "{id:?}");
        }
        let interactive = NODES.iter().filter(|n| n.action.is_some()).count();
        assert_eq!(interactive, FOCUS_ORDER.len());
    }

    #[test]
    fn test_hit_processors_block() {
        let hit = hit_test(Point::new(690.0, 200.0)).map(|n| n.id);
        assert_eq!(hit, Some(NodeId::Processors));
        assert_eq!(
            node(NodeId::Processors).action,
            Some(NodeAction::ExpandPanel(Panel::Processors))
        );
    }

    #[test]
    fn test_collector_header_and_gaps() {
        assert_eq!(hit_test(Point::new(600.0, 100.0)).map(|n| n.id), Some(NodeId::Collector));
        // Between the receivers and processors blocks
        assert_eq!(hit_test(Point::new(625.0, 200.0)).map(|n| n.id), None);
    }

    #[test]
    fn test_hit_stores_and_sources() {
        assert_eq!(hit_test(Point::new(1100.0, 230.0)).map(|n| n.id), Some(NodeId::MetricsStore));
        assert_eq!(hit_test(Point::new(100.0, 640.0)).map(|n| n.id), Some(NodeId::SystemLogs));
        assert_eq!(
            node(NodeId::SystemLogs).action,
            Some(NodeAction::ExpandPanel(Panel::Resource))
        );
        // Backend frame padding has no action
        assert_eq!(hit_test(Point::new(1030.0, 350.0)).map(|n| n.id), None);
        assert!(hit_test(Point::new(350.0, 20.0)).is_none());
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(focus_next(None), NodeId::WebFrontend);
        assert_eq!(focus_prev(None), NodeId::LogsStore);
        assert_eq!(focus_next(Some(NodeId::LogsStore)), NodeId::WebFrontend);
        assert_eq!(focus_prev(Some(NodeId::WebFrontend)), NodeId::LogsStore);
        assert_eq!(focus_next(Some(NodeId::Collector)), NodeId::Receivers);
        // Non-focusable ids restart the cycle
        assert_eq!(focus_next(Some(NodeId::Backend)), NodeId::WebFrontend);
    }

    #[test]
    fn test_viewport_shows_whole_canvas_when_wide() {
        let vp = Viewport::fit(120, 300.0);
        assert_eq!(vp, Viewport { x_min: 0.0, x_max: CANVAS_WIDTH });
        assert!(!vp.is_partial());
        assert_eq!(Viewport::max_pan(120), 0.0);
    }

    #[test]
    fn test_viewport_pans_when_narrow() {
        let vp = Viewport::fit(50, 0.0);
        assert!(vp.is_partial());
        assert!((vp.width() - 610.0).abs() < 1e-9);

        let panned = Viewport::fit(50, 10_000.0);
        assert!((panned.x_max - CANVAS_WIDTH).abs() < 1e-9);
        assert!((panned.x_min - 610.0).abs() < 1e-9);
        assert_eq!(Viewport::fit(50, -5.0).x_min, 0.0);
    }

    #[test]
    fn test_cell_to_virtual() {
        let area = ratatui::layout::Rect::new(10, 5, 100, 35);
        let vp = Viewport::fit(100, 0.0);
        let p = vp.cell_to_virtual(area, 10, 5).unwrap();
        assert!((p.x - 6.1).abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
        assert!(vp.cell_to_virtual(area, 9, 5).is_none());
        assert!(vp.cell_to_virtual(area, 110, 5).is_none());
        assert!(vp.cell_to_virtual(area, 20, 40).is_none());
    }
}
