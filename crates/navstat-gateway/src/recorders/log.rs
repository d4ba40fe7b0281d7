//! Recorder that writes each metric as a tracing event.
//!
//! Useful during development or as a second sink while migrating backends.

use navstat_core::error::Result;
use navstat_core::Recorder;

#[derive(Debug, Default)]
pub struct LogRecorder;

impl LogRecorder {
    pub fn new() -> Self {
        Self
    }
}

impl Recorder for LogRecorder {
    fn name(&self) -> &str {
        "log"
    }

    fn push(&self, metric: &str, value: i64) -> Result<()> {
        tracing::info!(target: "navstat::metrics", %metric, value, "timing");
        Ok(())
    }
}
