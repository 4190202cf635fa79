//! Semantic-convention tables and resource detectors.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SemConvAttribute {
    pub key: &'static str,
    pub example: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SemConvCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub attributes: &'static [SemConvAttribute],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceDetector {
    pub detector: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub attributes: &'static [&'static str],
}

impl ResourceDetector {
    /// Rough origin of the detector, used to pick its marker.
    pub fn origin(&self) -> DetectorOrigin {
        match self.detector {
            "gcp" | "aws" | "azure" => DetectorOrigin::Cloud,
            "k8s" => DetectorOrigin::Container,
            _ => DetectorOrigin::Host,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorOrigin {
    Host,
    Cloud,
    Container,
}

impl DetectorOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            DetectorOrigin::Host => "host",
            DetectorOrigin::Cloud => "cloud",
            DetectorOrigin::Container => "container",
        }
    }
}

macro_rules! attr {
    ($key:expr, $example:expr, $description:expr) => {
        SemConvAttribute {
            key: $key,
            example: $example,
            description: $description,
        }
    };
}

pub const CATEGORIES: &[SemConvCategory] = &[
    SemConvCategory {
        name: "HTTP",
        description: "Attributes for HTTP client and server spans",
        attributes: &[
            attr!("http.request.method", "GET", "HTTP request method"),
            attr!("http.response.status_code", "200", "HTTP response status code"),
            attr!("url.path", "/api/orders", "The URI path component"),
            attr!("url.scheme", "https", "The URI scheme (http/https)"),
            attr!("server.address", "api.example.com", "Server domain name"),
            attr!("server.port", "443", "Server port number"),
        ],
    },
    SemConvCategory {
        name: "Database",
        description: "Attributes for database client spans",
        attributes: &[
            attr!("db.system", "postgresql", "Database management system"),
            attr!("db.name", "orders_db", "Database name"),
            attr!("db.operation", "SELECT", "Database operation type"),
            attr!("db.statement", "SELECT * FROM...", "Database statement"),
            attr!("db.user", "app_user", "Database user"),
        ],
    },
    SemConvCategory {
        name: "Service",
        description: "Resource attributes identifying the service",
        attributes: &[
            attr!("service.name", "order-service", "Logical name of the service"),
            attr!("service.version", "2.1.0", "Version of the service"),
            attr!("service.namespace", "shop", "Namespace for the service"),
            attr!("service.instance.id", "pod-abc123", "Unique instance identifier"),
        ],
    },
    SemConvCategory {
        name: "Cloud",
        description: "Resource attributes for cloud environments",
        attributes: &[
            attr!("cloud.provider", "aws", "Cloud provider (aws, gcp, azure)"),
            attr!("cloud.region", "us-east-1", "Cloud region"),
            attr!("cloud.availability_zone", "us-east-1a", "Availability zone"),
            attr!("cloud.account.id", "123456789", "Cloud account ID"),
        ],
    },
    SemConvCategory {
        name: "Kubernetes",
        description: "Resource attributes for Kubernetes workloads",
        attributes: &[
            attr!("k8s.cluster.name", "prod-cluster", "Kubernetes cluster name"),
            attr!("k8s.namespace.name", "production", "Kubernetes namespace"),
            attr!("k8s.pod.name", "order-svc-7f8d9", "Pod name"),
            attr!("k8s.deployment.name", "order-service", "Deployment name"),
            attr!("k8s.node.name", "node-pool-1-abc", "Node name"),
        ],
    },
    SemConvCategory {
        name: "Host",
        description: "Resource attributes for the host machine",
        attributes: &[
            attr!("host.name", "prod-vm-03", "Hostname"),
            attr!("host.id", "i-0abc123", "Unique host identifier"),
            attr!("host.type", "m5.xlarge", "Host/VM type"),
            attr!("host.arch", "amd64", "CPU architecture"),
            attr!("os.type", "linux", "Operating system type"),
            attr!("os.version", "22.04", "OS version"),
        ],
    },
    SemConvCategory {
        name: "Messaging",
        description: "Attributes for messaging systems (Kafka, RabbitMQ, etc.)",
        attributes: &[
            attr!("messaging.system", "kafka", "Messaging system name"),
            attr!("messaging.destination.name", "orders", "Topic/queue name"),
            attr!("messaging.operation", "publish", "Operation type"),
            attr!("messaging.message.id", "msg-123", "Message identifier"),
        ],
    },
];

pub const RESOURCE_DETECTORS: &[ResourceDetector] = &[
    ResourceDetector {
        detector: "env",
        description: "Environment variables",
        example: "OTEL_SERVICE_NAME, OTEL_RESOURCE_ATTRIBUTES",
        attributes: &["service.name", "deployment.environment"],
    },
    ResourceDetector {
        detector: "host",
        description: "Local host information",
        example: "Reads from OS",
        attributes: &["host.name", "host.arch", "os.type"],
    },
    ResourceDetector {
        detector: "process",
        description: "Process runtime information",
        example: "Reads from runtime",
        attributes: &["process.pid", "process.executable.name", "process.runtime.name"],
    },
    ResourceDetector {
        detector: "gcp",
        description: "GCP metadata service",
        example: "http://metadata.google.internal",
        attributes: &["cloud.provider", "cloud.region", "gcp.project.id"],
    },
    ResourceDetector {
        detector: "aws",
        description: "AWS metadata service (EC2, ECS, EKS)",
        example: "http://169.254.169.254",
        attributes: &["cloud.provider", "cloud.region", "cloud.account.id", "host.id"],
    },
    ResourceDetector {
        detector: "azure",
        description: "Azure metadata service",
        example: "http://169.254.169.254",
        attributes: &["cloud.provider", "cloud.region", "azure.vm.name"],
    },
    ResourceDetector {
        detector: "k8s",
        description: "Kubernetes Downward API",
        example: "Environment variables injected by K8s",
        attributes: &["k8s.pod.name", "k8s.namespace.name", "k8s.node.name"],
    },
];

/// (key, value, where it was detected from)
pub const DETECTED_ATTRIBUTES: &[(&str, &str, &str)] = &[
    ("service.name", "order-service", "env var / config"),
    ("service.version", "2.1.0", "package.json"),
    ("host.name", "prod-vm-03", "hostname"),
    ("cloud.provider", "aws", "cloud metadata API"),
    ("cloud.region", "us-west-2", "cloud metadata API"),
    ("k8s.pod.name", "order-svc-7f8d9", "K8s downward API"),
    ("k8s.namespace.name", "production", "K8s downward API"),
];

pub const RESOURCE_DETECTION_CONFIG: &str = "processors:
  resourcedetection:
    detectors:
      - env
      - system
      - gcp
      - aws
      - azure
      - k8s
    timeout: 5s";

/// (title, description)
pub const BENEFITS: &[(&str, &str)] = &[
    ("Vendor Neutrality", "Same attribute names work across any observability backend"),
    (
        "Consistent Queries",
        "Query by service.name across all your telemetry, regardless of language or framework",
    ),
    (
        "Out-of-box Dashboards",
        "Pre-built dashboards and alerts that work because data follows known conventions",
    ),
    (
        "Cross-team Collaboration",
        "Teams using different languages produce telemetry with the same structure",
    ),
];

/// The example HTTP span shown under the category table.
pub const EXAMPLE_HTTP_SPAN: &str = r#"{
  "name": "GET /api/orders",
  "attributes": {
    "http.request.method": "GET",
    "http.response.status_code": 200,
    "url.path": "/api/orders",
    "server.address": "api.example.com"
  }
}"#;
