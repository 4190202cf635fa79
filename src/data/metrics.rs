//! Example counter, gauge and histogram.

use serde::Serialize;

use super::{AttrValue, Attributes};

/// Monotonically increasing value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Counter {
    pub name: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub value: u64,
    pub attributes: Attributes,
}

/// Point-in-time value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Gauge {
    pub name: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub value: f64,
    pub attributes: Attributes,
}

impl Gauge {
    /// Fill of a 0-100 bar, clamped.
    pub fn percent(&self) -> f64 {
        if self.value.is_finite() {
            self.value.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

/// Cumulative bucket: number of observations less than or equal to `le`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bucket {
    pub le: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Percentiles {
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
}

/// Distribution of observations across cumulative buckets.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Histogram {
    pub name: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub count: u64,
    pub sum: u64,
    pub buckets: &'static [Bucket],
    pub percentiles: Percentiles,
    pub attributes: Attributes,
}

impl Histogram {
    /// Observations that fell into each finite bucket alone.
    pub fn bucket_increments(&self) -> Vec<(f64, u64)> {
        incremental_counts(self.buckets)
            .into_iter()
            .zip(self.buckets)
            .filter(|(_, bucket)| bucket.le.is_finite())
            .map(|(count, bucket)| (bucket.le, count))
            .collect()
    }

    /// Share of all observations held by `count`, in percent.
    pub fn share(&self, count: u64) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            count as f64 / self.count as f64 * 100.0
        }
    }
}

/// Convert cumulative bucket counts into per-bucket counts.
pub fn incremental_counts(buckets: &[Bucket]) -> Vec<u64> {
    let mut previous = 0;
    buckets
        .iter()
        .map(|bucket| {
            let count = bucket.count.saturating_sub(previous);
            previous = bucket.count;
            count
        })
        .collect()
}

/// Short explanation of a metric instrument.
#[derive(Debug, Clone, Copy)]
pub struct MetricType {
    pub name: &'static str,
    pub description: &'static str,
    pub use_case: &'static str,
    pub example: &'static str,
}

pub const COUNTER_TYPE: MetricType = MetricType {
    name: "Counter",
    description: "Monotonically increasing value. Only goes up (or resets to zero).",
    use_case: "Request counts, errors, bytes processed",
    example: "http_requests_total: 1,847 → 1,848 → 1,849",
};

pub const GAUGE_TYPE: MetricType = MetricType {
    name: "Gauge",
    description: "Point-in-time value that can go up or down.",
    use_case: "Temperature, memory usage, queue size",
    example: "cpu_utilization: 67% → 72% → 65%",
};

pub const HISTOGRAM_TYPE: MetricType = MetricType {
    name: "Histogram",
    description: "Distribution of values across buckets. Captures count, sum, and bucket counts.",
    use_case: "Request latency, response sizes",
    example: "Calculate p50, p95, p99 percentiles",
};

pub const COUNTERS: &[Counter] = &[
    Counter {
        name: "http.server.request.total",
        description: "Total number of HTTP requests received",
        unit: "1",
        value: 15847,
        attributes: Attributes(&[
            ("http.request.method", AttrValue::Str("GET")),
            ("http.response.status_code", AttrValue::Str("200")),
            ("service.name", AttrValue::Str("api-gateway")),
        ]),
    },
    Counter {
        name: "orders.created.total",
        description: "Total number of orders created",
        unit: "1",
        value: 1234,
        attributes: Attributes(&[
            ("service.name", AttrValue::Str("order-service")),
            ("order.type", AttrValue::Str("standard")),
        ]),
    },
];

pub const GAUGES: &[Gauge] = &[
    Gauge {
        name: "process.runtime.cpython.cpu.utilization",
        description: "CPU utilization of the Python process",
        unit: "%",
        value: 67.3,
        attributes: Attributes(&[
            ("service.name", AttrValue::Str("order-service")),
            ("host.name", AttrValue::Str("prod-vm-03")),
        ]),
    },
    Gauge {
        name: "process.runtime.memory.usage",
        description: "Memory usage of the process",
        unit: "MB",
        value: 512.0,
        attributes: Attributes(&[
            ("service.name", AttrValue::Str("api-gateway")),
            ("host.name", AttrValue::Str("prod-vm-02")),
        ]),
    },
    Gauge {
        name: "system.memory.utilization",
        description: "System memory utilization",
        unit: "%",
        value: 78.5,
        attributes: Attributes(&[("host.name", AttrValue::Str("prod-vm-03"))]),
    },
];

pub const HISTOGRAM: Histogram = Histogram {
    name: "http.server.request.duration",
    description: "Duration of HTTP server requests",
    unit: "ms",
    count: 15847,
    sum: 892450,
    buckets: &[
        Bucket { le: 10.0, count: 2450 },
        Bucket { le: 25.0, count: 5200 },
        Bucket { le: 50.0, count: 9800 },
        Bucket { le: 100.0, count: 13200 },
        Bucket { le: 250.0, count: 15100 },
        Bucket { le: 500.0, count: 15600 },
        Bucket { le: 1000.0, count: 15800 },
        Bucket { le: f64::INFINITY, count: 15847 },
    ],
    percentiles: Percentiles {
        p50: 45,
        p95: 230,
        p99: 890,
    },
    attributes: Attributes(&[
        ("http.request.method", AttrValue::Str("GET")),
        ("service.name", AttrValue::Str("api-gateway")),
    ]),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_counts() {
        let buckets = [
            Bucket { le: 10.0, count: 2450 },
            Bucket { le: 25.0, count: 5200 },
            Bucket { le: 50.0, count: 9800 },
        ];
        assert_eq!(incremental_counts(&buckets), vec![2450, 2750, 4600]);
    }

    #[test]
    fn test_incremental_counts_never_underflow() {
        let buckets = [Bucket { le: 1.0, count: 10 }, Bucket { le: 2.0, count: 4 }];
        assert_eq!(incremental_counts(&buckets), vec![10, 0]);
        assert!(incremental_counts(&[]).is_empty());
    }

    #[test]
    fn test_histogram_increments_skip_infinite_bucket() {
        let increments = HISTOGRAM.bucket_increments();
        assert_eq!(increments.len(), 7);
        assert_eq!(increments[0], (10.0, 2450));
        assert_eq!(increments[6], (1000.0, 200));
        let finite_total: u64 = increments.iter().map(|(_, c)| c).sum();
        assert_eq!(finite_total, 15800);
    }

    #[test]
    fn test_gauge_percent_clamps() {
        assert!((GAUGES[0].percent() - 67.3).abs() < f64::EPSILON);
        let over = Gauge { value: 512.0, ..GAUGES[0] };
        assert_eq!(over.percent(), 100.0);
        let nan = Gauge { value: f64::NAN, ..GAUGES[0] };
        assert_eq!(nan.percent(), 0.0);
    }

    #[test]
    fn test_histogram_share() {
        let share = HISTOGRAM.share(2450);
        assert!((share - 15.46).abs() < 0.01);
    }
}
