//! Flow paths between nodes and the marker animation schedule.
//!
//! Markers are not stored anywhere. A marker is `(path, kind, index)` and its
//! position at a given time follows from the stream's [`Schedule`] alone, so
//! rendering is a pure function of `(state, elapsed)`.

use crate::state::SignalKind::{self, Log, Metric, Trace};
use crate::state::UiState;

use super::geometry::{CubicBezier, Point};
use super::layout::NodeId;

/// Share of the loop duration a marker rests before restarting.
pub const REPEAT_DELAY_FACTOR: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathId {
    WebFrontend,
    ApiGateway,
    OrderService,
    LinuxVms,
    Kubernetes,
    SystemLogs,
    ToApm,
    ToMetrics,
    ToLogs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
}

/// Timing of the markers of one stream, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    pub duration: f64,
    pub delay: f64,
    pub count: usize,
    /// Gap between consecutive markers; `duration / count` when unset.
    pub spacing: Option<f64>,
}

impl Schedule {
    pub const fn single(duration: f64, delay: f64) -> Self {
        Self {
            duration,
            delay,
            count: 1,
            spacing: None,
        }
    }

    pub fn spacing(&self) -> f64 {
        self.spacing.unwrap_or(self.duration / self.count.max(1) as f64)
    }

    pub fn repeat_delay(&self) -> f64 {
        self.duration * REPEAT_DELAY_FACTOR
    }

    pub fn period(&self) -> f64 {
        self.duration + self.repeat_delay()
    }

    /// Time at which marker `index` first sets off.
    pub fn begin(&self, index: usize) -> f64 {
        self.delay + index as f64 * self.spacing()
    }

    /// Progress of marker `index` along its path in `[0, 1]`, or `None` when
    /// the marker is not on the path at `elapsed`.
    pub fn progress(&self, index: usize, elapsed: f64) -> Option<f64> {
        if !self.duration.is_finite() || self.duration <= 0.0 || index >= self.count {
            return None;
        }
        let begin = self.begin(index);
        if !elapsed.is_finite() || !begin.is_finite() || elapsed < begin {
            return None;
        }
        let phase = (elapsed - begin) % self.period();
        if phase > self.duration {
            return None;
        }
        Some(phase / self.duration)
    }
}

/// One signal kind travelling along a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stream {
    pub kind: SignalKind,
    pub schedule: Schedule,
}

const fn stream(kind: SignalKind, duration: f64, delay: f64) -> Stream {
    Stream {
        kind,
        schedule: Schedule::single(duration, delay),
    }
}

const fn export_stream(kind: SignalKind, delay: f64) -> Stream {
    Stream {
        kind,
        schedule: Schedule {
            duration: 2.0,
            delay,
            count: 3,
            spacing: Some(0.7),
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlowPath {
    pub id: PathId,
    pub from: NodeId,
    pub to: NodeId,
    pub curve: CubicBezier,
    pub stroke: Stroke,
    /// Exporter paths are tinted with the colour of the signal they carry.
    pub tint: Option<SignalKind>,
    pub streams: &'static [Stream],
}

impl FlowPath {
    pub fn stream(&self, kind: SignalKind) -> Option<&'static Stream> {
        self.streams.iter().find(|s| s.kind == kind)
    }
}

const fn curve(p: [(f64, f64); 4]) -> CubicBezier {
    CubicBezier::new(
        Point::new(p[0].0, p[0].1),
        Point::new(p[1].0, p[1].1),
        Point::new(p[2].0, p[2].1),
        Point::new(p[3].0, p[3].1),
    )
}

pub const PATHS: &[FlowPath] = &[
    FlowPath {
        id: PathId::WebFrontend,
        from: NodeId::WebFrontend,
        to: NodeId::Receivers,
        curve: curve([(232.0, 121.0), (320.0, 121.0), (420.0, 150.0), (496.0, 190.0)]),
        stroke: Stroke::Solid,
        tint: None,
        streams: &[stream(Trace, 3.0, 0.0), stream(Metric, 4.0, 0.5), stream(Log, 5.0, 1.2)],
    },
    FlowPath {
        id: PathId::ApiGateway,
        from: NodeId::ApiGateway,
        to: NodeId::Receivers,
        curve: curve([(232.0, 223.0), (320.0, 223.0), (420.0, 210.0), (496.0, 195.0)]),
        stroke: Stroke::Solid,
        tint: None,
        streams: &[stream(Trace, 3.0, 0.8), stream(Metric, 4.0, 1.8), stream(Log, 5.0, 0.3)],
    },
    FlowPath {
        id: PathId::OrderService,
        from: NodeId::OrderService,
        to: NodeId::Receivers,
        curve: curve([(232.0, 325.0), (320.0, 325.0), (420.0, 260.0), (496.0, 200.0)]),
        stroke: Stroke::Solid,
        tint: None,
        streams: &[stream(Trace, 3.0, 1.5), stream(Metric, 4.0, 0.2), stream(Log, 5.0, 2.5)],
    },
    FlowPath {
        id: PathId::LinuxVms,
        from: NodeId::LinuxVms,
        to: NodeId::Receivers,
        curve: curve([(232.0, 469.0), (320.0, 469.0), (420.0, 350.0), (496.0, 210.0)]),
        stroke: Stroke::Dashed,
        tint: None,
        streams: &[stream(Metric, 4.5, 0.0), stream(Log, 5.5, 1.5)],
    },
    FlowPath {
        id: PathId::Kubernetes,
        from: NodeId::Kubernetes,
        to: NodeId::Receivers,
        curve: curve([(232.0, 555.0), (320.0, 555.0), (420.0, 400.0), (496.0, 220.0)]),
        stroke: Stroke::Dashed,
        tint: None,
        streams: &[stream(Metric, 4.5, 1.2), stream(Log, 5.5, 0.7)],
    },
    FlowPath {
        id: PathId::SystemLogs,
        from: NodeId::SystemLogs,
        to: NodeId::Receivers,
        curve: curve([(232.0, 641.0), (320.0, 641.0), (420.0, 450.0), (496.0, 230.0)]),
        stroke: Stroke::Dashed,
        tint: None,
        streams: &[stream(Metric, 4.5, 2.0), stream(Log, 5.5, 0.0)],
    },
    FlowPath {
        id: PathId::ToApm,
        from: NodeId::Exporters,
        to: NodeId::Apm,
        curve: curve([(884.0, 195.0), (920.0, 195.0), (980.0, 173.0), (1037.0, 173.0)]),
        stroke: Stroke::Solid,
        tint: Some(Trace),
        streams: &[export_stream(Trace, 0.0)],
    },
    FlowPath {
        id: PathId::ToMetrics,
        from: NodeId::Exporters,
        to: NodeId::MetricsStore,
        curve: curve([(884.0, 195.0), (920.0, 195.0), (980.0, 210.0), (1037.0, 230.0)]),
        stroke: Stroke::Solid,
        tint: Some(Metric),
        streams: &[export_stream(Metric, 0.2)],
    },
    FlowPath {
        id: PathId::ToLogs,
        from: NodeId::Exporters,
        to: NodeId::LogsStore,
        curve: curve([(884.0, 195.0), (920.0, 195.0), (980.0, 250.0), (1037.0, 287.0)]),
        stroke: Stroke::Solid,
        tint: Some(Log),
        streams: &[export_stream(Log, 0.4)],
    },
];

pub fn path(id: PathId) -> &'static FlowPath {
    PATHS.iter().find(|p| p.id == id).unwrap_or(&PATHS[0])
}

/// Where marker `index` of the `kind` stream on `path` is at `elapsed` seconds.
///
/// `None` when the path does not carry `kind`, the index is out of range, the
/// schedule is degenerate, or the marker is waiting or resting.
pub fn position(path_id: PathId, kind: SignalKind, index: usize, elapsed: f64) -> Option<Point> {
    let flow = path(path_id);
    let stream = flow.stream(kind)?;
    let t = stream.schedule.progress(index, elapsed)?;
    Some(flow.curve.eval(t))
}

/// A marker ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub path: PathId,
    pub kind: SignalKind,
    pub index: usize,
    pub at: Point,
}

/// Every marker that should be drawn for `state` at `elapsed` seconds.
pub fn visible_markers(state: &UiState, elapsed: f64) -> Vec<Marker> {
    let mut markers = Vec::new();
    for flow in PATHS {
        for stream in flow.streams {
            if !state.marker_visible(stream.kind) {
                continue;
            }
            for index in 0..stream.schedule.count {
                if let Some(at) = position(flow.id, stream.kind, index, elapsed) {
                    markers.push(Marker {
                        path: flow.id,
                        kind: stream.kind,
                        index,
                        at,
                    });
                }
            }
        }
    }
    markers
}
