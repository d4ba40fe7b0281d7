//! navstat core: report shapes, metric-name derivation, and the recorder seam.
//!
//! This crate holds everything that turns a decoded browser report into a set
//! of namespaced metric emissions: the URI normalizer, the stat validator, the
//! field-descriptor flattener, and the `Recorder` trait that backends
//! implement. It carries no transport or runtime dependencies so the gateway
//! and tests can drive it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible path
//! surfaces as `NavstatError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod flatten;
pub mod recorder;
pub mod report;
pub mod stat;

/// Shared result type.
pub use error::{Result, NavstatError};
pub use flatten::{flatten, FieldDescriptor, Flatten};
pub use recorder::Recorder;
