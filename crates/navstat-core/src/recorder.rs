//! The metrics backend seam.
//!
//! A `Recorder` is built once at startup and shared across concurrent
//! requests, so implementations must not keep per-request mutable state.
//! `normalize` and `validate` default to the dotted-namespace rules in
//! [`crate::stat`]; backends with stricter naming override them.

use crate::error::Result;
use crate::stat;

/// Pluggable sink for metric emission.
pub trait Recorder: Send + Sync {
    /// Short backend name for logs and labels (e.g. `statsd`).
    fn name(&self) -> &str;

    /// Emit one timing value. Negative values are passed through; the backend
    /// decides whether it can represent them.
    fn push(&self, metric: &str, value: i64) -> Result<()>;

    /// Metric-name prefix for a page identifier.
    fn normalize(&self, uri: &str) -> String {
        stat::normalize(uri)
    }

    /// Whether this backend can accept metrics derived from `uri`.
    fn validate(&self, uri: &str) -> bool {
        stat::validate(uri)
    }
}
