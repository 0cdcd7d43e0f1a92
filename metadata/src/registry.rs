//! Registry of metadata records, keyed by monitor type.

use crate::MetricKind;
use crate::error::MetadataError;
use crate::metadata::MonitorMetadata;
use std::collections::HashMap;

/// Collects the metadata records of every known monitoring integration.
///
/// The hosting framework builds one of these at startup, registers each
/// integration's record, and reads it (without further synchronization) to
/// answer which metrics an integration can produce, what kind each metric is,
/// and which are emitted by default.
#[derive(Debug, Default)]
pub struct Registry {
    monitors: HashMap<&'static str, MonitorMetadata>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an integration's metadata record.
    ///
    /// Each monitor type may be registered at most once.
    pub fn register(&mut self, metadata: MonitorMetadata) -> Result<(), MetadataError> {
        let monitor_type = metadata.monitor_type();
        if self.monitors.contains_key(monitor_type) {
            return Err(MetadataError::DuplicateMonitor(monitor_type));
        }
        tracing::debug!(
            monitor_type,
            metrics = metadata.metric_count(),
            "registered monitor metadata"
        );
        self.monitors.insert(monitor_type, metadata);
        Ok(())
    }

    /// The metadata record for the named monitor type, if registered.
    pub fn get(&self, monitor_type: &str) -> Option<&MonitorMetadata> {
        self.monitors.get(monitor_type)
    }

    /// The kind of a metric under a monitor type, or `None` if either the
    /// monitor type or the metric is unknown.
    pub fn metric_kind(&self, monitor_type: &str, metric: &str) -> Option<MetricKind> {
        self.get(monitor_type)?.metric_kind(metric)
    }

    /// Whether a metric under a monitor type is emitted by default.
    pub fn is_default_metric(&self, monitor_type: &str, metric: &str) -> bool {
        self.get(monitor_type)
            .is_some_and(|metadata| metadata.is_default_metric(metric))
    }

    /// All registered monitor type names, in no particular order.
    pub fn monitor_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.monitors.keys().copied()
    }

    /// Number of registered monitor types.
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Whether no monitor types have been registered.
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MetadataBuilder;

    fn sample() -> MonitorMetadata {
        MetadataBuilder::new("telegraf/sample")
            .metric("sample.requests", MetricKind::Counter)
            .default_metric("sample.requests")
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_query() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.register(sample()).unwrap();
        assert_eq!(registry.len(), 1);

        assert_eq!(
            registry.metric_kind("telegraf/sample", "sample.requests"),
            Some(MetricKind::Counter)
        );
        assert!(registry.is_default_metric("telegraf/sample", "sample.requests"));

        // Unknown monitor or metric is not an error
        assert_eq!(registry.metric_kind("telegraf/other", "sample.requests"), None);
        assert_eq!(registry.metric_kind("telegraf/sample", "sample.bogus"), None);
        assert!(!registry.is_default_metric("telegraf/other", "sample.requests"));
    }

    #[test]
    fn test_duplicate_monitor_rejected() {
        let mut registry = Registry::new();
        registry.register(sample()).unwrap();
        assert_eq!(
            registry.register(sample()).unwrap_err(),
            MetadataError::DuplicateMonitor("telegraf/sample")
        );
    }
}
