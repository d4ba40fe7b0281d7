//! HTTP transport for browser reports.
//!
//! Exposes the three report endpoints and the fixed plain-text rejections
//! they answer with.

pub mod rejection;
pub mod reports;

pub use rejection::Rejection;
