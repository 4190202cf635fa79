//! Shared UI state store.
//!
//! [`UiState`] is the single mutable value in the application. It is owned by
//! [`App`](crate::app::App) and handed to renderers by reference; every change
//! goes through one of the named mutators below so the forcing rules between
//! panel, signal and sidebar visibility always hold.

use serde::{Deserialize, Serialize};

/// Colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other theme.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// One of the three telemetry categories carried through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Trace,
    Metric,
    Log,
}

impl SignalKind {
    pub const ALL: [SignalKind; 3] = [SignalKind::Trace, SignalKind::Metric, SignalKind::Log];

    /// The signal filter that selects only this kind.
    pub fn plural(self) -> SignalFilter {
        match self {
            SignalKind::Trace => SignalFilter::Traces,
            SignalKind::Metric => SignalFilter::Metrics,
            SignalKind::Log => SignalFilter::Logs,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Trace => "trace",
            SignalKind::Metric => "metric",
            SignalKind::Log => "log",
        }
    }
}

/// The signal tab selected in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SignalFilter {
    #[default]
    All,
    Traces,
    Metrics,
    Logs,
}

impl SignalFilter {
    /// Tab order in the header.
    pub const TABS: [SignalFilter; 4] = [
        SignalFilter::All,
        SignalFilter::Traces,
        SignalFilter::Metrics,
        SignalFilter::Logs,
    ];

    /// Whether markers of `kind` pass this filter.
    pub fn admits(self, kind: SignalKind) -> bool {
        self == SignalFilter::All || self == kind.plural()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignalFilter::All => "All Signals",
            SignalFilter::Traces => "Traces",
            SignalFilter::Metrics => "Metrics",
            SignalFilter::Logs => "Logs",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SignalFilter::All => SignalFilter::Traces,
            SignalFilter::Traces => SignalFilter::Metrics,
            SignalFilter::Metrics => SignalFilter::Logs,
            SignalFilter::Logs => SignalFilter::All,
        }
    }
}

/// A detail panel that can be expanded from the diagram or the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Sdk,
    Collector,
    Receivers,
    Processors,
    Exporters,
    SemConv,
    Resource,
}

/// Shared presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    theme: ThemeMode,
    active_signal: SignalFilter,
    expanded_panel: Option<Panel>,
    animation_enabled: bool,
    sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ThemeMode::Dark, true)
    }
}

impl UiState {
    /// Create the start-up state.
    pub fn new(theme: ThemeMode, sidebar_open: bool) -> Self {
        Self {
            theme,
            active_signal: SignalFilter::All,
            expanded_panel: None,
            animation_enabled: true,
            sidebar_open,
        }
    }

    /// Start-up state whose sidebar visibility depends on the terminal width.
    pub fn for_viewport(theme: ThemeMode, width: u16, breakpoint: u16) -> Self {
        Self::new(theme, width >= breakpoint)
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn active_signal(&self) -> SignalFilter {
        self.active_signal
    }

    pub fn expanded_panel(&self) -> Option<Panel> {
        self.expanded_panel
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
    }

    /// Select a signal tab. Clears any expanded panel and opens the sidebar.
    pub fn set_active_signal(&mut self, signal: SignalFilter) {
        self.active_signal = signal;
        self.expanded_panel = None;
        self.sidebar_open = true;
    }

    /// Expand a panel, or collapse back to signal content with `None`.
    pub fn set_expanded_panel(&mut self, panel: Option<Panel>) {
        self.expanded_panel = panel;
        if panel.is_some() {
            self.sidebar_open = true;
        }
    }

    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.animation_enabled = enabled;
    }

    pub fn toggle_animation(&mut self) {
        self.animation_enabled = !self.animation_enabled;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Whether a marker of `kind` should be drawn right now.
    pub fn marker_visible(&self, kind: SignalKind) -> bool {
        self.animation_enabled && self.active_signal.admits(kind)
    }
}
