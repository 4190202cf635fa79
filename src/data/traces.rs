//! Example distributed trace.

use std::collections::HashSet;

use serde::Serialize;

use super::{AttrValue, Attributes};

/// Role of a span within its trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Server,
    Client,
    Internal,
    Producer,
    Consumer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanStatus {
    Ok,
    Error,
}

/// An event recorded during a span.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpanEvent {
    pub name: &'static str,
    pub timestamp: u64,
    pub attributes: Attributes,
}

/// One recorded operation. Times are milliseconds relative to the trace start.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub trace_id: &'static str,
    pub span_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<&'static str>,
    pub name: &'static str,
    pub service_name: &'static str,
    pub kind: SpanKind,
    pub start_time: u64,
    pub duration: u64,
    pub status: SpanStatus,
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "no_events")]
    pub events: &'static [SpanEvent],
}

fn no_events(events: &&'static [SpanEvent]) -> bool {
    events.is_empty()
}

const TRACE_ID: &str = "abc123def456789";

/// A checkout request crossing three services.
pub const EXAMPLE_TRACE: &[Span] = &[
    Span {
        trace_id: TRACE_ID,
        span_id: "span-001",
        parent_span_id: None,
        name: "GET /checkout",
        service_name: "web-frontend",
        kind: SpanKind::Server,
        start_time: 0,
        duration: 450,
        status: SpanStatus::Ok,
        attributes: Attributes(&[
            ("http.request.method", AttrValue::Str("GET")),
            ("http.response.status_code", AttrValue::Int(200)),
            ("url.path", AttrValue::Str("/checkout")),
            ("url.scheme", AttrValue::Str("https")),
            ("user_agent.original", AttrValue::Str("Mozilla/5.0...")),
            ("client.address", AttrValue::Str("192.168.1.100")),
        ]),
        events: &[],
    },
    Span {
        trace_id: TRACE_ID,
        span_id: "span-002",
        parent_span_id: Some("span-001"),
        name: "POST /api/orders",
        service_name: "api-gateway",
        kind: SpanKind::Server,
        start_time: 20,
        duration: 380,
        status: SpanStatus::Ok,
        attributes: Attributes(&[
            ("http.request.method", AttrValue::Str("POST")),
            ("http.response.status_code", AttrValue::Int(201)),
            ("url.path", AttrValue::Str("/api/orders")),
            ("rpc.system", AttrValue::Str("grpc")),
        ]),
        events: &[],
    },
    Span {
        trace_id: TRACE_ID,
        span_id: "span-003",
        parent_span_id: Some("span-002"),
        name: "OrderService.CreateOrder",
        service_name: "order-service",
        kind: SpanKind::Server,
        start_time: 50,
        duration: 320,
        status: SpanStatus::Ok,
        attributes: Attributes(&[
            ("rpc.method", AttrValue::Str("CreateOrder")),
            ("rpc.service", AttrValue::Str("OrderService")),
        ]),
        events: &[],
    },
    Span {
        trace_id: TRACE_ID,
        span_id: "span-004",
        parent_span_id: Some("span-003"),
        name: "INSERT orders",
        service_name: "order-service",
        kind: SpanKind::Client,
        start_time: 80,
        duration: 45,
        status: SpanStatus::Ok,
        attributes: Attributes(&[
            ("db.system", AttrValue::Str("postgresql")),
            ("db.name", AttrValue::Str("orders_db")),
            ("db.operation", AttrValue::Str("INSERT")),
            (
                "db.statement",
                AttrValue::Str("INSERT INTO orders (id, customer_id, total) VALUES ($1, $2, $3)"),
            ),
        ]),
        events: &[],
    },
    Span {
        trace_id: TRACE_ID,
        span_id: "span-005",
        parent_span_id: Some("span-003"),
        name: "PUBLISH order.created",
        service_name: "order-service",
        kind: SpanKind::Producer,
        start_time: 140,
        duration: 15,
        status: SpanStatus::Ok,
        attributes: Attributes(&[
            ("messaging.system", AttrValue::Str("kafka")),
            ("messaging.destination.name", AttrValue::Str("order.created")),
            ("messaging.operation", AttrValue::Str("publish")),
        ]),
        events: &[SpanEvent {
            name: "message.sent",
            timestamp: 150,
            attributes: Attributes(&[("messaging.message.id", AttrValue::Str("msg-789"))]),
        }],
    },
];

/// W3C trace context headers propagated between the example services.
pub const TRACEPARENT: &str = "00-abc123def456789-span-002-01";
pub const TRACESTATE: &str = "elastic=s:1.0";

/// Key concepts listed under the trace view.
pub const CONCEPTS: &[(&str, &str)] = &[
    ("Trace", "Collection of spans sharing the same trace ID"),
    ("Span", "Single operation with name, timing, and attributes"),
    ("Span Kind", "Role: server, client, internal, producer, consumer"),
    ("Parent Span", "Span that triggered this operation (creates hierarchy)"),
];

/// Number of parent hops from `span` to its root.
///
/// The walk stops at a missing parent id, at a parent id that names no span
/// in `spans`, and is bounded by `spans.len()`. A dangling reference counts
/// as a root; a cycle makes the whole chain fall back to depth 0.
pub fn span_depth(span: &Span, spans: &[Span]) -> usize {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(span.span_id);

    let mut depth = 0;
    let mut current = span;
    while let Some(parent_id) = current.parent_span_id {
        let Some(parent) = spans.iter().find(|s| s.span_id == parent_id) else {
            break;
        };
        if !visited.insert(parent.span_id) || depth >= spans.len() {
            tracing::warn!(span = span.span_id, "cyclic parent chain, clamping depth to 0");
            return 0;
        }
        depth += 1;
        current = parent;
    }
    depth
}

/// End of the latest span, used to scale the timeline bars.
pub fn trace_extent(spans: &[Span]) -> u64 {
    spans.iter().map(|s| s.start_time + s.duration).max().unwrap_or(0)
}

/// The pretty JSON shown in the "Span Attributes" code block.
pub fn example_span_json() -> String {
    let span = &EXAMPLE_TRACE[3];
    let value = serde_json::json!({
        "name": span.name,
        "kind": span.kind,
        "attributes": span.attributes,
        "startTime": "2024-01-15T10:23:45.080Z",
        "duration": format!("{}ms", span.duration),
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}
