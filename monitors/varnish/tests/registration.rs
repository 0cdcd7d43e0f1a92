//! Registration of the varnish metadata with a framework registry.

use monitor_metadata::{MetricKind, Registry};

#[test]
fn registers_and_answers_framework_queries() {
    let mut registry = Registry::new();
    registry.register(monitor_varnish::metadata().clone()).unwrap();

    assert_eq!(
        registry.monitor_types().collect::<Vec<_>>(),
        ["telegraf/varnish"]
    );

    // What metrics can this integration produce?
    let metadata = registry.get("telegraf/varnish").unwrap();
    assert_eq!(metadata.metric_count(), 21);

    // What is each metric's kind?
    assert_eq!(
        registry.metric_kind("telegraf/varnish", "varnish.cache_hit"),
        Some(MetricKind::Counter)
    );
    assert_eq!(
        registry.metric_kind("telegraf/varnish", "varnish.n_backend"),
        Some(MetricKind::Gauge)
    );

    // Which metrics are on by default?
    assert!(registry.is_default_metric("telegraf/varnish", "varnish.cache_hit"));
    assert!(!registry.is_default_metric("telegraf/varnish", "varnish.n_backend"));
}

#[test]
fn concurrent_reads_need_no_synchronization() {
    let metadata = monitor_varnish::metadata();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for name in metadata.metric_names() {
                    assert!(metadata.metric_kind(name).is_some());
                }
            });
        }
    });
}
