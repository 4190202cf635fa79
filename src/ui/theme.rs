//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::{PipelineStage, Severity};
use crate::state::{SignalKind, ThemeMode};

pub const TRACE_COLOR: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const METRIC_COLOR: Color = Color::Rgb(0x34, 0xd3, 0x99);
pub const LOG_COLOR: Color = Color::Rgb(0xfb, 0xbf, 0x24);
/// Receivers and exporters.
pub const EDGE_STAGE_COLOR: Color = Color::Rgb(0xf5, 0xa8, 0x00);
pub const PROCESSOR_COLOR: Color = Color::Rgb(0x42, 0x5c, 0xc7);
pub const ELASTIC_COLOR: Color = Color::Rgb(0x00, 0xbf, 0xb3);

/// Color and style theme for the TUI.
///
/// Use [`Theme::for_mode()`] with the mode held in [`crate::state::UiState`];
/// [`detect_mode()`] picks one from the terminal background.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements (OTel blue).
    pub highlight: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text: subtitles, captions, descriptions.
    pub muted: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Warning-level text and markers.
    pub warning: Color,
    /// Error-level text and markers.
    pub critical: Color,
    /// Success markers.
    pub healthy: Color,
    /// Background of code blocks.
    pub code_bg: Color,
    /// YAML keys and JSON property names.
    pub code_key: Color,
    /// Literal values in code blocks.
    pub code_value: Color,
    /// Style for section headers.
    pub header: Style,
    /// Style for the focused node and selected items.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Rgb(0x42, 0x8b, 0xf5),
            text: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            warning: Color::Yellow,
            critical: Color::Red,
            healthy: Color::Green,
            code_bg: Color::Rgb(0x16, 0x1b, 0x22),
            code_key: Color::Cyan,
            code_value: Color::LightGreen,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            text: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            warning: Color::Rgb(0xb4, 0x53, 0x09),
            critical: Color::Red,
            healthy: Color::Green,
            code_bg: Color::Rgb(0xf3, 0xf4, 0xf6),
            code_key: Color::Blue,
            code_value: Color::Rgb(0x04, 0x78, 0x57),
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Fixed colour of a signal kind, identical in both themes.
    pub fn signal_color(kind: SignalKind) -> Color {
        match kind {
            SignalKind::Trace => TRACE_COLOR,
            SignalKind::Metric => METRIC_COLOR,
            SignalKind::Log => LOG_COLOR,
        }
    }

    pub fn stage_color(stage: PipelineStage) -> Color {
        match stage {
            PipelineStage::Receiver | PipelineStage::Exporter => EDGE_STAGE_COLOR,
            PipelineStage::Processor => PROCESSOR_COLOR,
        }
    }

    /// Get style for a log severity.
    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Error | Severity::Fatal => {
                Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
            }
            Severity::Warn => Style::default().fg(self.warning),
            Severity::Info => Style::default().fg(self.highlight),
            Severity::Debug | Severity::Trace => Style::default().fg(self.muted),
        }
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

/// Auto-detect based on terminal background.
pub fn detect_mode() -> ThemeMode {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.5 => ThemeMode::Light,
        Ok(_) => ThemeMode::Dark,
        Err(e) => {
            tracing::debug!(error = %e, "background detection failed, using dark theme");
            ThemeMode::Dark
        }
    }
}
