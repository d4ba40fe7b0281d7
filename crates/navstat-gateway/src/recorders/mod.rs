//! Concrete recorder adapters, selected from config at startup.

pub mod log;
pub mod statsd;

use std::sync::Arc;

use navstat_core::error::{NavstatError, Result};
use navstat_core::Recorder;

use crate::config::{RecorderConfig, RecorderKind};

pub use log::LogRecorder;
pub use statsd::StatsdRecorder;

/// Build every configured recorder, failing on the first that cannot start.
pub fn build_all(cfgs: &[RecorderConfig]) -> Result<Vec<Arc<dyn Recorder>>> {
    let mut out: Vec<Arc<dyn Recorder>> = Vec::with_capacity(cfgs.len());
    for cfg in cfgs {
        let recorder: Arc<dyn Recorder> = match cfg.kind {
            RecorderKind::Statsd => {
                let address = cfg
                    .address
                    .as_deref()
                    .ok_or_else(|| NavstatError::Config("statsd recorder requires an address".into()))?;
                Arc::new(StatsdRecorder::connect(address, &cfg.prefix)?)
            }
            RecorderKind::Log => Arc::new(LogRecorder::new()),
        };
        tracing::info!(recorder = recorder.name(), "recorder ready");
        out.push(recorder);
    }
    Ok(out)
}
