//! In-process SDK: instrumentation types and a Python setup example.

use super::{Doc, PanelContent, PanelContext};
use crate::ui::code_block::{CodeSnippet, Language};

const AUTO_LIBRARIES: &[&str] = &["HTTP", "gRPC", "SQL", "Redis", "Kafka", "Express", "Flask", "Spring"];

const SETUP: &str = "# Install
pip install opentelemetry-distro opentelemetry-exporter-otlp

# Auto-instrument
opentelemetry-bootstrap -a install

# Run your app with instrumentation
opentelemetry-instrument \\
  --service_name=order-service \\
  --exporter_otlp_endpoint=http://collector:4317 \\
  python app.py";

const MANUAL_SPAN: &str = "from opentelemetry import trace

tracer = trace.get_tracer(\"order-service\")

def process_order(order_id):
    with tracer.start_as_current_span(\"process_order\") as span:
        span.set_attribute(\"order.id\", order_id)
        span.set_attribute(\"order.priority\", \"high\")
        # Your business logic here
        validate_order(order_id)
        charge_payment(order_id)
        span.add_event(\"order_completed\")";

const PROVIDERS: &[(&str, &str)] = &[
    ("TracerProvider", "Creates and manages Tracer instances for creating spans"),
    ("MeterProvider", "Creates and manages Meter instances for recording metrics"),
    ("LoggerProvider", "Creates and manages Logger instances for emitting logs"),
];

pub(super) fn setup_snippet() -> CodeSnippet {
    CodeSnippet::new("Auto-instrumentation setup", Language::Shell, SETUP)
}

pub(super) fn content(ctx: &PanelContext) -> PanelContent {
    let mut doc = Doc::new(ctx);
    doc.text(
        "The OpenTelemetry SDK is a library you add to your application to generate \
         telemetry data. It provides APIs for creating traces, metrics, and logs.",
    );

    doc.heading("Instrumentation Types");
    doc.term("Auto-Instrumentation", "Zero code changes required");
    doc.muted("  Automatically captures telemetry from popular frameworks and libraries:");
    doc.muted(&format!("  {}", AUTO_LIBRARIES.join(" · ")));
    doc.blank();
    doc.term("Manual Instrumentation", "Custom spans and metrics");
    doc.muted(
        "  Add custom telemetry for business-specific operations not covered by \
         auto-instrumentation.",
    );

    doc.heading("Example: Python");
    doc.code(&setup_snippet(), true);

    doc.heading("Manual Span Creation");
    doc.code(&CodeSnippet::new("Custom span example", Language::Python, MANUAL_SPAN), false);

    doc.heading("SDK Components");
    for (name, description) in PROVIDERS {
        doc.term(name, description);
    }

    doc.insight(
        "Best Practice",
        &[
            "Start with auto-instrumentation to get immediate visibility. Add manual",
            "instrumentation later for business-specific context like order IDs,",
            "customer segments, or feature flags.",
        ],
    );
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::super::{render_text, PanelView};
    use super::*;

    #[test]
    fn test_sdk_lists_providers_and_libraries() {
        let text = render_text(PanelView::Sdk, 0).join("\n");
        for (name, _) in PROVIDERS {
            assert!(text.contains(name));
        }
        assert!(text.contains("HTTP · gRPC"));
        assert!(text.contains("opentelemetry-instrument \\"));
    }

    #[test]
    fn test_only_selected_block_shows_copy_ack() {
        let theme = crate::ui::Theme::dark();
        let ctx = PanelContext {
            theme: &theme,
            semconv_category: 0,
            selected_block: None,
            copied: true,
        };
        let rendered = content(&ctx);
        let copied: Vec<String> = rendered
            .lines
            .iter()
            .map(|l| l.to_string())
            .filter(|l| l.contains("Copied"))
            .collect();
        assert_eq!(copied.len(), 1);
        assert!(copied[0].contains("Auto-instrumentation setup"));
        assert_eq!(rendered.selected_block().unwrap().snippet, setup_snippet());
    }
}
