//! Top-level facade crate for navstat.
//!
//! Re-exports the core pipeline and the gateway library so users can depend on a single crate.

pub mod core {
    pub use navstat_core::*;
}

pub mod gateway {
    pub use navstat_gateway::*;
}
