//! The registration record a monitoring integration hands to the framework.

use crate::MetricKind;
use crate::error::MetadataError;
use std::collections::{HashMap, HashSet};

/// Metric metadata for a single monitoring integration.
///
/// Describes every metric the integration can produce: its name, its
/// [`MetricKind`], whether it is emitted by default, and (optionally) named
/// groups of metrics that can be toggled together. Immutable once built; all
/// queries are pure lookups where a missing key simply means the metric is
/// unknown to this integration.
#[derive(Debug, Clone)]
pub struct MonitorMetadata {
    monitor_type: &'static str,
    metrics: HashMap<&'static str, MetricKind>,
    default_metrics: HashSet<&'static str>,
    groups: HashSet<&'static str>,
    group_metrics: HashMap<&'static str, Vec<&'static str>>,
    send_all: bool,
    send_unknown: bool,
}

impl MonitorMetadata {
    /// The monitor type name this record registers under, e.g. `"telegraf/varnish"`.
    pub fn monitor_type(&self) -> &'static str {
        self.monitor_type
    }

    /// The kind of the named metric, or `None` if the metric is unknown.
    pub fn metric_kind(&self, name: &str) -> Option<MetricKind> {
        self.metrics.get(name).copied()
    }

    /// Whether the named metric is known to this integration.
    pub fn has_metric(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    /// Whether the named metric is emitted without explicit opt-in.
    pub fn is_default_metric(&self, name: &str) -> bool {
        self.default_metrics.contains(name)
    }

    /// All metric names, in no particular order.
    pub fn metric_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.metrics.keys().copied()
    }

    /// The default-enabled subset of metric names, in no particular order.
    pub fn default_metric_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.default_metrics.iter().copied()
    }

    /// Number of metrics this integration declares.
    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    /// All declared group names, in no particular order.
    pub fn group_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().copied()
    }

    /// Members of the named group, or `None` if the group is unknown.
    pub fn group_members(&self, group: &str) -> Option<&[&'static str]> {
        self.group_metrics.get(group).map(Vec::as_slice)
    }

    /// Whether every metric should be emitted regardless of the default set.
    pub fn send_all(&self) -> bool {
        self.send_all
    }

    /// Whether datapoints not named in the metric set should be passed through.
    pub fn send_unknown(&self) -> bool {
        self.send_unknown
    }
}

/// Builder for [`MonitorMetadata`].
///
/// Declaration methods are chainable and infallible; [`build`](Self::build)
/// verifies the assembled tables and rejects inconsistent ones:
///
/// - every metric name has exactly one descriptor
/// - the default-enabled set is a subset of the metric set
/// - every group member belongs to the metric set
/// - group members are only listed for declared groups
pub struct MetadataBuilder {
    monitor_type: &'static str,
    metrics: HashMap<&'static str, MetricKind>,
    duplicate: Option<&'static str>,
    default_metrics: HashSet<&'static str>,
    groups: HashSet<&'static str>,
    group_metrics: HashMap<&'static str, Vec<&'static str>>,
    send_all: bool,
    send_unknown: bool,
}

impl MetadataBuilder {
    /// Start a record for the given monitor type name.
    pub fn new(monitor_type: &'static str) -> Self {
        Self {
            monitor_type,
            metrics: HashMap::new(),
            duplicate: None,
            default_metrics: HashSet::new(),
            groups: HashSet::new(),
            group_metrics: HashMap::new(),
            send_all: false,
            send_unknown: false,
        }
    }

    /// Declare one metric and its kind.
    pub fn metric(mut self, name: &'static str, kind: MetricKind) -> Self {
        if self.metrics.insert(name, kind).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(name);
        }
        self
    }

    /// Declare a batch of metrics.
    pub fn metrics<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, MetricKind)>,
    {
        for (name, kind) in entries {
            self = self.metric(name, kind);
        }
        self
    }

    /// Mark one metric as default-enabled.
    pub fn default_metric(mut self, name: &'static str) -> Self {
        self.default_metrics.insert(name);
        self
    }

    /// Mark a batch of metrics as default-enabled.
    pub fn default_metrics<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        for name in names {
            self.default_metrics.insert(name);
        }
        self
    }

    /// Declare the set of valid group names.
    pub fn group_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        for name in names {
            self.groups.insert(name);
        }
        self
    }

    /// List member metrics for a declared group.
    pub fn group(mut self, name: &'static str, members: &[&'static str]) -> Self {
        self.group_metrics
            .entry(name)
            .or_default()
            .extend_from_slice(members);
        self
    }

    /// Emit every metric regardless of the default-enabled set.
    pub fn send_all(mut self, send_all: bool) -> Self {
        self.send_all = send_all;
        self
    }

    /// Pass through datapoints not named in the metric set.
    pub fn send_unknown(mut self, send_unknown: bool) -> Self {
        self.send_unknown = send_unknown;
        self
    }

    /// Verify the assembled tables and produce the immutable record.
    pub fn build(self) -> Result<MonitorMetadata, MetadataError> {
        if let Some(name) = self.duplicate {
            return Err(MetadataError::DuplicateMetric(name));
        }

        for &name in &self.default_metrics {
            if !self.metrics.contains_key(name) {
                return Err(MetadataError::UnknownDefaultMetric(name));
            }
        }

        for (&group, members) in &self.group_metrics {
            if !self.groups.contains(group) {
                return Err(MetadataError::UndeclaredGroup(group));
            }
            for &metric in members {
                if !self.metrics.contains_key(metric) {
                    return Err(MetadataError::UnknownGroupMetric { group, metric });
                }
            }
        }

        Ok(MonitorMetadata {
            monitor_type: self.monitor_type,
            metrics: self.metrics,
            default_metrics: self.default_metrics,
            groups: self.groups,
            group_metrics: self.group_metrics,
            send_all: self.send_all,
            send_unknown: self.send_unknown,
        })
    }
}
