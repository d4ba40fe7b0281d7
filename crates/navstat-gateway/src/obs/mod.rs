//! Collector self-observability.
//!
//! Counters about the collector itself (reports handled, pushes, push
//! failures), kept in-process and rendered by the `/metrics` handler.

pub mod metrics;
