//! Metric metadata records for monitoring integrations.
//!
//! A monitoring integration declares, up front, the set of metrics it can
//! produce: each metric's name, its measurement kind (gauge or counter), and
//! whether it is emitted by default. This crate provides the types that carry
//! that declaration — [`MonitorMetadata`], built through [`MetadataBuilder`] —
//! and a [`Registry`] the hosting framework reads to answer three questions:
//! which metrics an integration can produce, what kind each metric is, and
//! which are on by default.
//!
//! The records are pure data. They are constructed once, verified for internal
//! consistency at build time, and never mutated afterwards, so they are safe to
//! read concurrently from any number of threads.
//!
//! # Example
//!
//! ```
//! use monitor_metadata::{MetadataBuilder, MetricKind, Registry};
//!
//! let metadata = MetadataBuilder::new("telegraf/example")
//!     .metric("example.requests", MetricKind::Counter)
//!     .metric("example.connections", MetricKind::Gauge)
//!     .default_metric("example.requests")
//!     .build()
//!     .unwrap();
//!
//! let mut registry = Registry::new();
//! registry.register(metadata).unwrap();
//!
//! let kind = registry.metric_kind("telegraf/example", "example.requests");
//! assert_eq!(kind, Some(MetricKind::Counter));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod kind;
mod metadata;
mod registry;

pub use error::{MetadataError, ParseKindError};
pub use kind::MetricKind;
pub use metadata::{MetadataBuilder, MonitorMetadata};
pub use registry::Registry;
