//! Example log records correlated with the example trace.

use serde::Serialize;

use super::{AttrValue, Attributes};

/// Log severity as text; the number lives on [`LogRecord::severity_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Single-character marker shown before each record.
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Error | Severity::Fatal => "✖",
            Severity::Warn => "▲",
            _ => "●",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub timestamp: &'static str,
    pub observed_timestamp: &'static str,
    pub severity_number: u8,
    pub severity_text: Severity,
    pub body: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_id: Option<&'static str>,
    pub attributes: Attributes,
    pub resource: Attributes,
}

impl LogRecord {
    /// `service.name` from the resource, if present.
    pub fn service_name(&self) -> Option<&'static str> {
        match self.resource.get("service.name") {
            Some(AttrValue::Str(name)) => Some(name),
            _ => None,
        }
    }

    /// Wall-clock time portion of the timestamp (`10:23:45.123`).
    pub fn time_of_day(&self) -> &'static str {
        self.timestamp
            .split_once('T')
            .map(|(_, time)| time.trim_end_matches('Z'))
            .unwrap_or(self.timestamp)
    }
}

const ORDER_SERVICE: Attributes = Attributes(&[
    ("service.name", AttrValue::Str("order-service")),
    ("service.version", AttrValue::Str("2.1.0")),
    ("deployment.environment", AttrValue::Str("production")),
]);

pub const EXAMPLE_LOGS: &[LogRecord] = &[
    LogRecord {
        timestamp: "2024-01-15T10:23:45.123Z",
        observed_timestamp: "2024-01-15T10:23:45.125Z",
        severity_number: 9,
        severity_text: Severity::Info,
        body: "Order created successfully",
        trace_id: Some("abc123def456789"),
        span_id: Some("span-003"),
        attributes: Attributes(&[
            ("order.id", AttrValue::Str("ORD-789")),
            ("customer.id", AttrValue::Str("CUST-123")),
            ("order.total", AttrValue::Float(149.99)),
            ("order.items_count", AttrValue::Int(3)),
        ]),
        resource: ORDER_SERVICE,
    },
    LogRecord {
        timestamp: "2024-01-15T10:23:45.150Z",
        observed_timestamp: "2024-01-15T10:23:45.152Z",
        severity_number: 9,
        severity_text: Severity::Info,
        body: "Payment processing initiated",
        trace_id: Some("abc123def456789"),
        span_id: Some("span-003"),
        attributes: Attributes(&[
            ("payment.method", AttrValue::Str("credit_card")),
            ("payment.provider", AttrValue::Str("stripe")),
        ]),
        resource: ORDER_SERVICE,
    },
    LogRecord {
        timestamp: "2024-01-15T10:23:44.800Z",
        observed_timestamp: "2024-01-15T10:23:44.802Z",
        severity_number: 9,
        severity_text: Severity::Info,
        body: "Incoming request: POST /api/orders",
        trace_id: Some("abc123def456789"),
        span_id: Some("span-002"),
        attributes: Attributes(&[
            ("http.request.method", AttrValue::Str("POST")),
            ("url.path", AttrValue::Str("/api/orders")),
            ("client.address", AttrValue::Str("192.168.1.100")),
        ]),
        resource: Attributes(&[
            ("service.name", AttrValue::Str("api-gateway")),
            ("service.version", AttrValue::Str("1.5.0")),
            ("deployment.environment", AttrValue::Str("production")),
        ]),
    },
    LogRecord {
        timestamp: "2024-01-15T10:23:46.200Z",
        observed_timestamp: "2024-01-15T10:23:46.205Z",
        severity_number: 13,
        severity_text: Severity::Warn,
        body: "Slow database query detected",
        trace_id: Some("abc123def456789"),
        span_id: Some("span-004"),
        attributes: Attributes(&[
            ("db.statement", AttrValue::Str("SELECT * FROM inventory WHERE...")),
            ("db.duration_ms", AttrValue::Int(1250)),
            ("db.threshold_ms", AttrValue::Int(500)),
        ]),
        resource: ORDER_SERVICE,
    },
];

/// Number of records listed in the correlated-logs section.
pub const LISTED_LOGS: usize = 3;

pub const CORRELATION_DESCRIPTION: &str =
    "Logs are automatically correlated with traces via trace_id and span_id";
pub const CORRELATION_FIELDS: &[(&str, &str)] = &[
    ("trace_id", "Links log to entire request flow across all services"),
    ("span_id", "Links log to specific operation within the trace"),
];

/// (number, severity, meaning)
pub const SEVERITY_LEVELS: &[(u8, Severity, &str)] = &[
    (1, Severity::Trace, "Finest-grained debugging info"),
    (5, Severity::Debug, "Debugging information"),
    (9, Severity::Info, "Normal operational messages"),
    (13, Severity::Warn, "Warning conditions"),
    (17, Severity::Error, "Error conditions"),
    (21, Severity::Fatal, "System is unusable"),
];

/// The pretty JSON shown in the "OTel Log Record" code block.
pub fn example_log_json() -> String {
    serde_json::to_string_pretty(&EXAMPLE_LOGS[0]).unwrap_or_default()
}
