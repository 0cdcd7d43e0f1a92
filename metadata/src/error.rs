//! Errors for metadata construction and registration.

/// Errors detected when building or registering a metadata record.
///
/// All of these indicate a malformed declaration table; none can occur at
/// query time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// The same metric name was declared more than once.
    #[error("duplicate metric: {0}")]
    DuplicateMetric(&'static str),

    /// A metric was marked default-enabled but has no descriptor.
    #[error("default-enabled metric has no descriptor: {0}")]
    UnknownDefaultMetric(&'static str),

    /// A group lists a metric that has no descriptor.
    #[error("group {group:?} lists metric with no descriptor: {metric}")]
    UnknownGroupMetric {
        /// The group naming the unknown metric.
        group: &'static str,
        /// The metric name with no descriptor.
        metric: &'static str,
    },

    /// Group members were listed for a group that was never declared.
    #[error("metrics listed for undeclared group: {0}")]
    UndeclaredGroup(&'static str),

    /// A monitor type was registered more than once.
    #[error("monitor type already registered: {0}")]
    DuplicateMonitor(&'static str),
}

/// Error returned when a string is not a recognized metric kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized metric kind: {0:?}")]
pub struct ParseKindError(pub String);
