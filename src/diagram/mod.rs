//! The pipeline diagram model: geometry, node layout and flow animation.
//!
//! Nothing here draws. [`crate::ui::diagram`] turns this model into canvas
//! shapes; events use [`layout::hit_test`] to resolve clicks.

pub mod flow;
pub mod geometry;
pub mod layout;

pub use flow::{position, visible_markers, FlowPath, Marker, PathId, Schedule, Stroke, PATHS};
pub use geometry::{CubicBezier, Point, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use layout::{hit_test, node, DiagramNode, Layer, NodeAction, NodeId, NodeStyle, Viewport, NODES};
