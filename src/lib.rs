// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # otel-guide
//!
//! An interactive terminal walkthrough of an OpenTelemetry pipeline.
//!
//! The guide draws a fixed diagram of application services and
//! infrastructure sources feeding an OTel Collector, which exports to an
//! observability backend. Coloured markers flow along the connections to
//! show traces, metrics and logs moving through the pipeline. Clicking a
//! node (or focusing it with Tab) opens a sidebar panel that explains that
//! part of the system with example data and copyable configuration.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │ events  │───▶│   app    │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (input) │    │ (state)  │    │(rendering)   │         │ │
//! │  └─────────┘    └────┬─────┘    └────┬────┘    └─────────┘ │
//! │                      │               │                      │
//! │                      ▼               ▼                      │
//! │                 ┌─────────┐    ┌──────────┐                 │
//! │                 │ diagram │    │   data   │                 │
//! │                 │ (model) │    │(fixtures)│                 │
//! │                 └─────────┘    └──────────┘                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`state`]**: the shared [`UiState`] (theme, signal filter, expanded
//!   panel, animation, sidebar) and its named mutators
//! - **[`app`]**: [`App`] owns the state and turns user intent into mutations
//! - **[`diagram`]**: node layout, hit testing, flow paths and the pure marker
//!   animation schedule
//! - **[`data`]**: static example traces, metrics, logs, collector components
//!   and semantic conventions
//! - **[`ui`]**: ratatui rendering of the header, tabs, diagram canvas and
//!   detail panels
//! - **[`config`]**: layered [`Settings`] from defaults, a TOML file, the
//!   environment and the command line
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Start the guide
//! otel-guide
//!
//! # Light theme, no animation
//! otel-guide --theme light --no-animation
//!
//! # Write the example data as JSON and exit
//! otel-guide --export fixtures.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use otel_guide::{App, Settings, SignalFilter, ThemeMode};
//! use otel_guide::ui::panels::PanelView;
//!
//! let mut app = App::new(Settings::default(), ThemeMode::Dark, 120);
//! app.select_signal(SignalFilter::Traces);
//! assert_eq!(app.panel_view(), PanelView::Traces);
//! ```
//!
//! ### Marker positions
//!
//! ```
//! use otel_guide::diagram::{position, PathId};
//! use otel_guide::SignalKind;
//!
//! // The first trace marker on the web frontend path, one second in.
//! let at = position(PathId::WebFrontend, SignalKind::Trace, 0, 1.0);
//! assert!(at.is_some());
//! ```

pub mod app;
pub mod clipboard;
pub mod config;
pub mod data;
pub mod diagram;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use crate::config::{Settings, ThemePreference};
pub use error::{GuideError, Result};
pub use state::{Panel, SignalFilter, SignalKind, ThemeMode, UiState};
