//! Metric metadata for the `telegraf/varnish` monitor.
//!
//! Declares every metric the Varnish statistics monitor can produce, each
//! metric's kind, and the default-enabled subset. The collector that actually
//! polls `varnishstat` and emits datapoints lives elsewhere; this crate is the
//! declaration it registers with the monitoring framework.
//!
//! The tables are assembled once on first access and are immutable afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]

use monitor_metadata::{MetadataBuilder, MetricKind, MonitorMetadata};
use std::sync::LazyLock;

/// Monitor type name this integration registers under.
pub const MONITOR_TYPE: &str = "telegraf/varnish";

// Metric identifiers.

/// Backend connection attempts that found all backend connections busy.
pub const VARNISH_BACKEND_BUSY: &str = "varnish.backend_busy";
/// Backend connections successfully opened.
pub const VARNISH_BACKEND_CONN: &str = "varnish.backend_conn";
/// Backend connection attempts that failed.
pub const VARNISH_BACKEND_FAIL: &str = "varnish.backend_fail";
/// Backend connections returned to the idle pool.
pub const VARNISH_BACKEND_RECYCLE: &str = "varnish.backend_recycle";
/// Requests sent to a backend.
pub const VARNISH_BACKEND_REQ: &str = "varnish.backend_req";
/// Backend connections reused from the idle pool.
pub const VARNISH_BACKEND_REUSE: &str = "varnish.backend_reuse";
/// Idle backend connections closed for being stale.
pub const VARNISH_BACKEND_TOOLATE: &str = "varnish.backend_toolate";
/// Backend connection attempts skipped because the backend was unhealthy.
pub const VARNISH_BACKEND_UNHEALTHY: &str = "varnish.backend_unhealthy";
/// Requests served from cache.
pub const VARNISH_CACHE_HIT: &str = "varnish.cache_hit";
/// Hits on objects marked hit-for-pass.
pub const VARNISH_CACHE_HITPASS: &str = "varnish.cache_hitpass";
/// Requests that missed the cache.
pub const VARNISH_CACHE_MISS: &str = "varnish.cache_miss";
/// Client requests received.
pub const VARNISH_CLIENT_REQ: &str = "varnish.client_req";
/// Backends currently configured.
pub const VARNISH_N_BACKEND: &str = "varnish.n_backend";
/// Objects evicted from cache to make room for new ones.
pub const VARNISH_N_LRU_NUKED: &str = "varnish.n_lru_nuked";
/// Sessions dropped because the session queue was full.
pub const VARNISH_SESS_DROPPED: &str = "varnish.sess_dropped";
/// Sessions queued waiting for a worker thread.
pub const VARNISH_SESS_QUEUED: &str = "varnish.sess_queued";
/// Length of the session queue waiting for threads.
pub const VARNISH_THREAD_QUEUE_LEN: &str = "varnish.thread_queue_len";
/// Worker threads currently live.
pub const VARNISH_THREADS: &str = "varnish.threads";
/// Worker threads created.
pub const VARNISH_THREADS_CREATED: &str = "varnish.threads_created";
/// Worker thread creation failures.
pub const VARNISH_THREADS_FAILED: &str = "varnish.threads_failed";
/// Times thread creation was held back by thread-pool limits.
pub const VARNISH_THREADS_LIMITED: &str = "varnish.threads_limited";

static METADATA: LazyLock<MonitorMetadata> = LazyLock::new(|| {
    MetadataBuilder::new(MONITOR_TYPE)
        .metrics([
            (VARNISH_BACKEND_BUSY, MetricKind::Gauge),
            (VARNISH_BACKEND_CONN, MetricKind::Gauge),
            (VARNISH_BACKEND_FAIL, MetricKind::Gauge),
            (VARNISH_BACKEND_RECYCLE, MetricKind::Gauge),
            (VARNISH_BACKEND_REQ, MetricKind::Gauge),
            (VARNISH_BACKEND_REUSE, MetricKind::Gauge),
            (VARNISH_BACKEND_TOOLATE, MetricKind::Gauge),
            (VARNISH_BACKEND_UNHEALTHY, MetricKind::Gauge),
            (VARNISH_CACHE_HIT, MetricKind::Counter),
            (VARNISH_CACHE_HITPASS, MetricKind::Counter),
            (VARNISH_CACHE_MISS, MetricKind::Counter),
            (VARNISH_CLIENT_REQ, MetricKind::Counter),
            (VARNISH_N_BACKEND, MetricKind::Gauge),
            (VARNISH_N_LRU_NUKED, MetricKind::Counter),
            (VARNISH_SESS_DROPPED, MetricKind::Gauge),
            (VARNISH_SESS_QUEUED, MetricKind::Gauge),
            (VARNISH_THREAD_QUEUE_LEN, MetricKind::Gauge),
            (VARNISH_THREADS, MetricKind::Gauge),
            (VARNISH_THREADS_CREATED, MetricKind::Gauge),
            (VARNISH_THREADS_FAILED, MetricKind::Gauge),
            (VARNISH_THREADS_LIMITED, MetricKind::Gauge),
        ])
        .default_metrics([
            VARNISH_BACKEND_FAIL,
            VARNISH_BACKEND_REQ,
            VARNISH_BACKEND_UNHEALTHY,
            VARNISH_CACHE_HIT,
            VARNISH_CACHE_MISS,
            VARNISH_CLIENT_REQ,
            VARNISH_SESS_DROPPED,
            VARNISH_SESS_QUEUED,
            VARNISH_THREAD_QUEUE_LEN,
            VARNISH_THREADS,
            VARNISH_THREADS_CREATED,
            VARNISH_THREADS_FAILED,
            VARNISH_THREADS_LIMITED,
        ])
        .build()
        .expect("varnish metric tables are internally consistent")
});

/// The registration record for this integration.
pub fn metadata() -> &'static MonitorMetadata {
    &METADATA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let metadata = metadata();
        assert_eq!(metadata.monitor_type(), MONITOR_TYPE);
        assert_eq!(metadata.metric_count(), 21);
        assert_eq!(metadata.default_metric_names().count(), 13);
        assert_eq!(metadata.group_names().count(), 0);
        assert!(!metadata.send_all());
        assert!(!metadata.send_unknown());
    }

    #[test]
    fn test_metric_kinds() {
        let metadata = metadata();
        assert_eq!(metadata.metric_kind(VARNISH_CACHE_HIT), Some(MetricKind::Counter));
        assert_eq!(metadata.metric_kind(VARNISH_CACHE_HITPASS), Some(MetricKind::Counter));
        assert_eq!(metadata.metric_kind(VARNISH_CACHE_MISS), Some(MetricKind::Counter));
        assert_eq!(metadata.metric_kind(VARNISH_CLIENT_REQ), Some(MetricKind::Counter));
        assert_eq!(metadata.metric_kind(VARNISH_N_LRU_NUKED), Some(MetricKind::Counter));
        assert_eq!(metadata.metric_kind(VARNISH_N_BACKEND), Some(MetricKind::Gauge));
        assert_eq!(metadata.metric_kind(VARNISH_THREADS), Some(MetricKind::Gauge));

        let counters = metadata
            .metric_names()
            .filter(|name| metadata.metric_kind(name) == Some(MetricKind::Counter))
            .count();
        assert_eq!(counters, 5);
    }

    #[test]
    fn test_default_set() {
        let metadata = metadata();
        assert!(metadata.is_default_metric(VARNISH_CACHE_HIT));
        assert!(metadata.is_default_metric(VARNISH_THREADS));
        assert!(!metadata.is_default_metric(VARNISH_N_BACKEND));
        assert!(!metadata.is_default_metric(VARNISH_BACKEND_BUSY));
        assert!(!metadata.is_default_metric(VARNISH_CACHE_HITPASS));
    }

    #[test]
    fn test_default_set_is_subset_of_metric_set() {
        let metadata = metadata();
        for name in metadata.default_metric_names() {
            assert!(metadata.has_metric(name), "no descriptor for {name}");
        }
    }

    #[test]
    fn test_identifier_namespace() {
        let metadata = metadata();
        for name in metadata.metric_names() {
            assert!(name.starts_with("varnish."), "unexpected namespace: {name}");
        }
    }

    #[test]
    fn test_unknown_metric_is_not_an_error() {
        let metadata = metadata();
        assert_eq!(metadata.metric_kind("varnish.bogus"), None);
        assert!(!metadata.has_metric("varnish.bogus"));
        assert!(!metadata.is_default_metric("varnish.bogus"));
    }
}
