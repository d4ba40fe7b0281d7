//! Decoded browser report shapes.
//!
//! - Navigation timing: numeric details flattened into metrics.
//! - JS error / CSP: opaque strings, stamped with a server time and logged.
//!
//! Decoding is lenient like the browser beacons it serves: missing members
//! take their defaults and unknown members are ignored. Only malformed JSON
//! (or a wrong JSON type) fails.

pub mod csp;
pub mod js_error;
pub mod nav_timing;

use serde::de::DeserializeOwned;

use crate::error::{NavstatError, Result};

pub use csp::{CspDetails, CspReport};
pub use js_error::{JsError, JsErrorReport};
pub use nav_timing::{NavTimingDetails, NavTimingReport};

/// Decode a report body into its typed shape.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| NavstatError::BadRequest(format!("invalid report json: {e}")))
}
