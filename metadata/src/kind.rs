//! Metric measurement kinds.

use crate::error::ParseKindError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a metric's values are to be interpreted.
///
/// These are the only two kinds a metadata record may reference; anything else
/// is rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// An instantaneous value that can rise or fall.
    Gauge,
    /// A monotonically increasing total.
    Counter,
}

impl MetricKind {
    /// The lowercase name used in configuration and display output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("gauge") {
            Ok(MetricKind::Gauge)
        } else if s.eq_ignore_ascii_case("counter") {
            Ok(MetricKind::Counter)
        } else {
            Err(ParseKindError(s.to_string()))
        }
    }
}
