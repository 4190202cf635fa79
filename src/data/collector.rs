//! Collector pipeline components and configuration snippets.

use serde::Serialize;

/// Stage of the collector pipeline a component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Receiver,
    Processor,
    Exporter,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 3] =
        [PipelineStage::Receiver, PipelineStage::Processor, PipelineStage::Exporter];

    /// Section heading.
    pub fn title(&self) -> &'static str {
        match self {
            PipelineStage::Receiver => "Receivers",
            PipelineStage::Processor => "Processors",
            PipelineStage::Exporter => "Exporters",
        }
    }

    /// One-word role shown in the pipeline strip.
    pub fn role(&self) -> &'static str {
        match self {
            PipelineStage::Receiver => "Data ingestion",
            PipelineStage::Processor => "Transform",
            PipelineStage::Exporter => "Data egress",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            PipelineStage::Receiver => "Data ingestion - how telemetry enters the collector",
            PipelineStage::Processor => "Data transformation - enrich, filter, batch, transform",
            PipelineStage::Exporter => "Data egress - send telemetry to backends",
        }
    }

    pub fn components(&self) -> &'static [CollectorComponent] {
        match self {
            PipelineStage::Receiver => RECEIVERS,
            PipelineStage::Processor => PROCESSORS,
            PipelineStage::Exporter => EXPORTERS,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CollectorComponent {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub stage: PipelineStage,
    pub description: &'static str,
    pub config: &'static str,
}

pub const RECEIVERS: &[CollectorComponent] = &[
    CollectorComponent {
        name: "otlp",
        stage: PipelineStage::Receiver,
        description: "Receives telemetry via OpenTelemetry Protocol (gRPC and HTTP)",
        config: "otlp:
  protocols:
    grpc:
      endpoint: 0.0.0.0:4317
    http:
      endpoint: 0.0.0.0:4318",
    },
    CollectorComponent {
        name: "hostmetrics",
        stage: PipelineStage::Receiver,
        description: "Collects host-level metrics (CPU, memory, disk, network)",
        config: "hostmetrics:
  collection_interval: 30s
  scrapers:
    cpu:
    memory:
    disk:
    network:
    filesystem:",
    },
    CollectorComponent {
        name: "filelog",
        stage: PipelineStage::Receiver,
        description: "Reads and parses log files from the filesystem",
        config: "filelog:
  include:
    - /var/log/app/*.log
  start_at: end
  operators:
    - type: json_parser
      timestamp:
        parse_from: attributes.time
        layout: '%Y-%m-%dT%H:%M:%S'",
    },
    CollectorComponent {
        name: "k8s_cluster",
        stage: PipelineStage::Receiver,
        description: "Collects Kubernetes cluster-level metrics and events",
        config: "k8s_cluster:
  auth_type: serviceAccount
  collection_interval: 30s
  node_conditions_to_report:
    - Ready
    - MemoryPressure",
    },
    CollectorComponent {
        name: "kubeletstats",
        stage: PipelineStage::Receiver,
        description: "Collects pod/container metrics from Kubelet",
        config: "kubeletstats:
  auth_type: serviceAccount
  collection_interval: 20s
  endpoint: \"https://${K8S_NODE_NAME}:10250\"",
    },
];

pub const PROCESSORS: &[CollectorComponent] = &[
    CollectorComponent {
        name: "batch",
        stage: PipelineStage::Processor,
        description: "Batches telemetry to reduce network overhead",
        config: "batch:
  timeout: 10s
  send_batch_size: 1000
  send_batch_max_size: 1500",
    },
    CollectorComponent {
        name: "memory_limiter",
        stage: PipelineStage::Processor,
        description: "Prevents out-of-memory by limiting memory usage",
        config: "memory_limiter:
  check_interval: 1s
  limit_mib: 1500
  spike_limit_mib: 500",
    },
    CollectorComponent {
        name: "resourcedetection",
        stage: PipelineStage::Processor,
        description: "Automatically detects and adds resource attributes",
        config: "resourcedetection:
  detectors:
    - env
    - system
    - gcp
    - aws
    - azure
    - k8s
  timeout: 5s",
    },
    CollectorComponent {
        name: "attributes",
        stage: PipelineStage::Processor,
        description: "Modifies, adds, or removes attributes",
        config: "attributes:
  actions:
    - key: environment
      value: production
      action: upsert
    - key: team
      from_attribute: service.namespace
      action: insert",
    },
    CollectorComponent {
        name: "filter",
        stage: PipelineStage::Processor,
        description: "Filters telemetry based on conditions",
        config: "filter:
  error_mode: ignore
  traces:
    span:
      - 'attributes[\"http.target\"] == \"/health\"'
  metrics:
    metric:
      - 'name == \"unwanted.metric\"'",
    },
    CollectorComponent {
        name: "transform",
        stage: PipelineStage::Processor,
        description: "Transforms telemetry using OTTL expressions",
        config: "transform:
  trace_statements:
    - context: span
      statements:
        - set(status.code, 1) where name == \"health\"
        - set(attributes[\"processed\"], \"true\")",
    },
];

pub const EXPORTERS: &[CollectorComponent] = &[
    CollectorComponent {
        name: "otlp/elastic",
        stage: PipelineStage::Exporter,
        description: "Exports to Elastic Observability via OTLP",
        config: "otlp/elastic:
  endpoint: \"your-deployment.es.io:443\"
  headers:
    Authorization: \"ApiKey your-api-key\"
  compression: gzip",
    },
    CollectorComponent {
        name: "debug",
        stage: PipelineStage::Exporter,
        description: "Outputs telemetry to console for debugging",
        config: "debug:
  verbosity: detailed
  sampling_initial: 5
  sampling_thereafter: 200",
    },
];

/// Component names printed inside the diagram's sub-blocks.
pub const DIAGRAM_RECEIVERS: &[&str] = &["otlp", "hostmetrics", "filelog", "k8s_cluster"];
pub const DIAGRAM_PROCESSORS: &[&str] =
    &["batch", "memory_limiter", "resourcedetection", "attributes"];
pub const DIAGRAM_EXPORTERS: &[&str] = &["otlp/elastic"];

pub const PIPELINES_EXPLANATION: &str =
    "Connect receivers → processors → exporters per signal type";

pub const WHY_COLLECTOR: &[&str] = &[
    "Offload processing from your application",
    "Centralized configuration for all telemetry",
    "Buffer and retry on backend failures",
    "Switch backends without code changes",
];

pub const FULL_CONFIG: &str = "receivers:
  otlp:
    protocols:
      grpc:
        endpoint: 0.0.0.0:4317
      http:
        endpoint: 0.0.0.0:4318

  hostmetrics:
    collection_interval: 30s
    scrapers:
      cpu:
      memory:
      disk:
      network:

  filelog:
    include:
      - /var/log/app/*.log

processors:
  memory_limiter:
    check_interval: 1s
    limit_mib: 1500

  resourcedetection:
    detectors: [env, system, gcp, aws, k8s]

  batch:
    timeout: 10s
    send_batch_size: 1000

exporters:
  otlp/elastic:
    endpoint: \"your-deployment.es.io:443\"
    headers:
      Authorization: \"ApiKey ${ELASTIC_API_KEY}\"

service:
  pipelines:
    traces:
      receivers: [otlp]
      processors: [memory_limiter, resourcedetection, batch]
      exporters: [otlp/elastic]

    metrics:
      receivers: [otlp, hostmetrics]
      processors: [memory_limiter, resourcedetection, batch]
      exporters: [otlp/elastic]

    logs:
      receivers: [otlp, filelog]
      processors: [memory_limiter, resourcedetection, batch]
      exporters: [otlp/elastic]";
