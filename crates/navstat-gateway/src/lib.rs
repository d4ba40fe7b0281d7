//! navstat gateway library entry.
//!
//! This crate wires configuration, recorder adapters, the recorder fan-out,
//! and the HTTP report endpoints into a collector service. It is consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod obs;
pub mod ops;
pub mod recorders;
pub mod router;
pub mod transport;
