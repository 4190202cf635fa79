//! Static example datasets rendered by the detail panels.
//!
//! Everything here is a `'static` constant. The few computations that the
//! panels need (span depth, histogram increments, gauge fill, identifier
//! truncation) live next to the data they derive from.
//!
//! ## Submodules
//!
//! - [`traces`]: an example checkout trace and its span tree
//! - [`metrics`]: counters, gauges and a latency histogram
//! - [`logs`]: trace-correlated log records and the severity table
//! - [`collector`]: receivers, processors, exporters and the full YAML
//! - [`semconv`]: semantic-convention categories and resource detectors

pub mod collector;
pub mod logs;
pub mod metrics;
pub mod semconv;
pub mod traces;

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{GuideError, Result as GuideResult};

pub use collector::{CollectorComponent, PipelineStage};
pub use logs::{LogRecord, Severity};
pub use metrics::{Bucket, Counter, Gauge, Histogram};
pub use semconv::{ResourceDetector, SemConvAttribute, SemConvCategory};
pub use traces::{Span, SpanKind, SpanStatus};

/// A scalar attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue {
    Str(&'static str),
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Str(s) => write!(f, "\"{}\"", s),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Float(x) => write!(f, "{}", x),
        }
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Str(s) => serializer.serialize_str(s),
            AttrValue::Int(i) => serializer.serialize_i64(*i),
            AttrValue::Float(x) => serializer.serialize_f64(*x),
        }
    }
}

/// Ordered key/value attributes, serialised as a JSON object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attributes(pub &'static [(&'static str, AttrValue)]);

impl Attributes {
    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, AttrValue)> {
        self.0.iter()
    }

    pub fn get(&self, key: &str) -> Option<AttrValue> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Truncate an identifier for inline display, e.g. `abc123def456...`.
pub fn short_id(id: &str, max_chars: usize) -> String {
    if id.chars().count() <= max_chars {
        id.to_string()
    } else {
        let head: String = id.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

/// All fixtures in one serialisable bundle, used by `--export`.
pub fn export_json() -> serde_json::Value {
    serde_json::json!({
        "traces": traces::EXAMPLE_TRACE,
        "trace_context": {
            "traceparent": traces::TRACEPARENT,
            "tracestate": traces::TRACESTATE,
        },
        "metrics": {
            "counters": metrics::COUNTERS,
            "gauges": metrics::GAUGES,
            "histogram": &metrics::HISTOGRAM,
        },
        "logs": logs::EXAMPLE_LOGS,
        "collector": {
            "receivers": collector::RECEIVERS,
            "processors": collector::PROCESSORS,
            "exporters": collector::EXPORTERS,
            "config": collector::FULL_CONFIG,
        },
        "semantic_conventions": semconv::CATEGORIES,
        "resource_detectors": semconv::RESOURCE_DETECTORS,
    })
}

/// Write [`export_json`] to `path` as pretty JSON.
pub fn write_export(path: &Path) -> GuideResult<()> {
    let json = serde_json::to_string_pretty(&export_json())?;
    std::fs::write(path, json).map_err(|source| GuideError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "exported example data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("abc123def456789", 12), "abc123def456...");
        assert_eq!(short_id("span-003", 12), "span-003");
    }

    #[test]
    fn test_attribute_lookup() {
        let attrs = Attributes(&[("a", AttrValue::Int(1)), ("b", AttrValue::Str("x"))]);
        assert_eq!(attrs.get("b"), Some(AttrValue::Str("x")));
        assert_eq!(attrs.get("c"), None);
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_export_contains_every_dataset() {
        let value = export_json();
        assert_eq!(value["traces"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["logs"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["collector"]["processors"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["traces"][0]["attributes"]["http.response.status_code"], 200);
        // Infinite histogram bound is exported as null
        assert!(value["metrics"]["histogram"]["buckets"][7]["le"].is_null());
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        write_export(&path).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, export_json());

        let bad = dir.path().join("missing").join("export.json");
        assert!(matches!(write_export(&bad), Err(GuideError::Export { .. })));
    }
}
