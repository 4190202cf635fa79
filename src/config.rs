//! Layered settings: defaults, optional TOML file, environment, CLI flags.
//!
//! ```toml
//! # otel-guide.toml
//! theme = "light"
//! animation = true
//! tick_ms = 50
//! sidebar_breakpoint = 100
//! sidebar_width = 56
//! log_file = "otel-guide.log"
//! log_level = "debug"
//! ```
//!
//! Every key can also be set as `OTEL_GUIDE_<KEY>`, e.g. `OTEL_GUIDE_TICK_MS=30`.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};
use crate::state::ThemeMode;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "otel-guide.toml";
pub const ENV_PREFIX: &str = "OTEL_GUIDE";

const TICK_RANGE: std::ops::RangeInclusive<u64> = 10..=1000;

/// Requested theme. `Auto` asks the terminal for its background colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemePreference {
    pub fn resolve(self) -> ThemeMode {
        match self {
            ThemePreference::Auto => crate::ui::theme::detect_mode(),
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::Light => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
    /// Start with flow markers moving.
    pub animation: bool,
    /// Event poll timeout and redraw interval, in milliseconds.
    pub tick_ms: u64,
    /// Minimum start-up width (columns) for the sidebar to open by default.
    pub sidebar_breakpoint: u16,
    /// Width of the sidebar when open.
    pub sidebar_width: u16,
    /// Write tracing output here. Nothing is logged when unset.
    pub log_file: Option<PathBuf>,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Auto,
            animation: true,
            tick_ms: 50,
            sidebar_breakpoint: 100,
            sidebar_width: 56,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

/// Values given on the command line; `None` leaves the layered value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub theme: Option<ThemePreference>,
    pub no_animation: bool,
    pub tick_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load defaults, then `path` (or `otel-guide.toml` if present), then the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let defaults = Settings::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("theme", "auto")?
            .set_default("animation", defaults.animation)?
            .set_default("tick_ms", defaults.tick_ms as i64)?
            .set_default("sidebar_breakpoint", i64::from(defaults.sidebar_breakpoint))?
            .set_default("sidebar_width", i64::from(defaults.sidebar_width))?
            .set_default("log_level", defaults.log_level)?
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Apply command-line flags on top of the layered settings.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self> {
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if overrides.no_animation {
            self.animation = false;
        }
        if let Some(tick_ms) = overrides.tick_ms {
            self.tick_ms = tick_ms;
        }
        if let Some(ref log_file) = overrides.log_file {
            self.log_file = Some(log_file.clone());
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if !TICK_RANGE.contains(&self.tick_ms) {
            return Err(GuideError::InvalidSetting {
                key: "tick_ms",
                reason: format!(
                    "{} is outside {}..={}",
                    self.tick_ms,
                    TICK_RANGE.start(),
                    TICK_RANGE.end()
                ),
            });
        }
        if self.sidebar_width == 0 {
            return Err(GuideError::InvalidSetting {
                key: "sidebar_width",
                reason: "must be at least 1 column".to_string(),
            });
        }
        Ok(())
    }

    pub fn tick(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Settings::load_with_env(Some(&missing), env(&[])).is_err());
    }

    #[test]
    fn test_file_layer_overrides_defaults() {
        let (_dir, path) = write_config("theme = \"light\"\ntick_ms = 100\n");
        let settings = Settings::load_with_env(Some(&path), env(&[])).unwrap();
        assert_eq!(settings.theme, ThemePreference::Light);
        assert_eq!(settings.tick_ms, 100);
        assert!(settings.animation);
        assert_eq!(settings.sidebar_breakpoint, 100);
    }

    #[test]
    fn test_env_layer_overrides_file() {
        let (_dir, path) = write_config("tick_ms = 100\nanimation = true\n");
        let settings = Settings::load_with_env(
            Some(&path),
            env(&[("OTEL_GUIDE_TICK_MS", "75"), ("OTEL_GUIDE_ANIMATION", "false")]),
        )
        .unwrap();
        assert_eq!(settings.tick_ms, 75);
        assert!(!settings.animation);
    }

    #[test]
    fn test_cli_overrides_win() {
        let (_dir, path) = write_config("theme = \"light\"\n");
        let settings = Settings::load_with_env(Some(&path), env(&[]))
            .unwrap()
            .with_overrides(&Overrides {
                theme: Some(ThemePreference::Dark),
                no_animation: true,
                tick_ms: Some(20),
                log_file: Some(PathBuf::from("guide.log")),
            })
            .unwrap();
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert!(!settings.animation);
        assert_eq!(settings.tick_ms, 20);
        assert_eq!(settings.log_file, Some(PathBuf::from("guide.log")));
    }

    #[test]
    fn test_out_of_range_tick_is_rejected() {
        let (_dir, path) = write_config("tick_ms = 5\n");
        let err = Settings::load_with_env(Some(&path), env(&[])).unwrap_err();
        assert!(matches!(err, GuideError::InvalidSetting { key: "tick_ms", .. }));

        let err = Settings::default()
            .with_overrides(&Overrides {
                tick_ms: Some(5000),
                ..Overrides::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("tick_ms"));
    }

    #[test]
    fn test_explicit_themes_resolve_without_probing() {
        assert_eq!(ThemePreference::Dark.resolve(), ThemeMode::Dark);
        assert_eq!(ThemePreference::Light.resolve(), ThemeMode::Light);
    }
}
