//! Recorder fan-out.
//!
//! Re-exports the recorder set so handlers depend on this module directly.

pub mod fanout;

pub use fanout::RecorderSet;
