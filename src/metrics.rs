//! Prometheus metrics for the relay pipeline.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

use crate::lookup::QueryKind;

// === Metric Name Constants ===

/// Upstream lookup latency metric name.
pub const METRIC_LOOKUP_LATENCY: &str = "lookup_latency_ms";
/// Webhook dispatch latency metric name.
pub const METRIC_DISPATCH_LATENCY: &str = "webhook_dispatch_latency_ms";
/// Lookups performed counter metric name.
pub const METRIC_LOOKUPS: &str = "lookups_total";
/// Failed lookups counter metric name.
pub const METRIC_LOOKUP_FAILURES: &str = "lookup_failures_total";
/// Delivered notifications counter metric name.
pub const METRIC_NOTIFICATIONS_DELIVERED: &str = "notifications_delivered_total";
/// Failed notifications counter metric name.
pub const METRIC_NOTIFICATIONS_FAILED: &str = "notifications_failed_total";
/// Rejected requests counter metric name.
pub const METRIC_REQUESTS_REJECTED: &str = "requests_rejected_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_LOOKUP_LATENCY,
        "Upstream lookup latency in milliseconds"
    );
    describe_histogram!(
        METRIC_DISPATCH_LATENCY,
        "Webhook dispatch latency in milliseconds"
    );

    describe_counter!(METRIC_LOOKUPS, "Total number of upstream lookups performed");
    describe_counter!(
        METRIC_LOOKUP_FAILURES,
        "Total number of upstream lookups that failed"
    );
    describe_counter!(
        METRIC_NOTIFICATIONS_DELIVERED,
        "Total number of notifications delivered to the webhook"
    );
    describe_counter!(
        METRIC_NOTIFICATIONS_FAILED,
        "Total number of notifications that failed to deliver"
    );
    describe_counter!(
        METRIC_REQUESTS_REJECTED,
        "Total number of requests rejected before any lookup"
    );

    debug!("Metrics initialized");
}

/// Record upstream lookup latency.
pub fn record_lookup_latency(start: Instant, kind: QueryKind) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_LOOKUP_LATENCY, "kind" => kind.to_string()).record(latency_ms);
}

/// Record webhook dispatch latency.
pub fn record_dispatch_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_DISPATCH_LATENCY).record(latency_ms);
}

/// Increment lookups counter.
pub fn inc_lookups(kind: QueryKind) {
    counter!(METRIC_LOOKUPS, "kind" => kind.to_string()).increment(1);
}

/// Increment lookup failures counter.
pub fn inc_lookup_failures(kind: QueryKind) {
    counter!(METRIC_LOOKUP_FAILURES, "kind" => kind.to_string()).increment(1);
}

/// Increment delivered notifications counter.
pub fn inc_notifications_delivered() {
    counter!(METRIC_NOTIFICATIONS_DELIVERED).increment(1);
}

/// Increment failed notifications counter.
pub fn inc_notifications_failed() {
    counter!(METRIC_NOTIFICATIONS_FAILED).increment(1);
}

/// Increment rejected requests counter.
pub fn inc_requests_rejected() {
    counter!(METRIC_REQUESTS_REJECTED).increment(1);
}
