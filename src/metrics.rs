//! Prometheus metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::IntCounter;

/// Global Prometheus handle reused in tests.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics") // exposed URL
        .build()
        .expect("metrics builder")
});

/// Requests actually sent to the upstream stats API.
pub static UPSTREAM_REQUESTS: Lazy<IntCounter> = Lazy::new(|| {
    let counter = IntCounter::new("upstream_requests_total", "Requests sent to the upstream API")
        .expect("counter");
    METRICS
        .registry
        .register(Box::new(counter.clone()))
        .expect("register upstream_requests_total");
    counter
});

/// Upstream lookups served from the in-memory response cache.
pub static UPSTREAM_CACHE_HITS: Lazy<IntCounter> = Lazy::new(|| {
    let counter = IntCounter::new(
        "upstream_cache_hits_total",
        "Upstream responses served from the in-memory cache",
    )
    .expect("counter");
    METRICS
        .registry
        .register(Box::new(counter.clone()))
        .expect("register upstream_cache_hits_total");
    counter
});
