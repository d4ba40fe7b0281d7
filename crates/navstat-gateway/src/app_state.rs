//! Shared application state for the collector.
//!
//! Recorders are built once from config and injected here; handlers only ever
//! see them through `RecorderSet`.

use std::sync::Arc;

use axum::http::HeaderName;
use navstat_core::error::{NavstatError, Result};
use navstat_core::Recorder;

use crate::config::CollectorConfig;
use crate::dispatch::RecorderSet;
use crate::obs::metrics::GatewayMetrics;
use crate::recorders;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: CollectorConfig,
    client_ip_header: HeaderName,
    recorders: RecorderSet,
    metrics: GatewayMetrics,
}

impl AppState {
    /// Build state with the recorders named in `cfg`.
    pub fn new(cfg: CollectorConfig) -> Result<Self> {
        let built = recorders::build_all(&cfg.recorders)?;
        Self::with_recorders(cfg, built)
    }

    /// Build state around recorders constructed elsewhere.
    pub fn with_recorders(cfg: CollectorConfig, recorders: Vec<Arc<dyn Recorder>>) -> Result<Self> {
        let recorders = RecorderSet::new(recorders);
        if recorders.is_empty() {
            return Err(NavstatError::Config("at least one recorder is required".into()));
        }
        let client_ip_header = cfg.gateway.client_ip_header_name()?;
        tracing::info!(recorders = ?recorders.names(), "recorder set assembled");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                client_ip_header,
                recorders,
                metrics: GatewayMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &CollectorConfig {
        &self.inner.cfg
    }

    pub fn client_ip_header(&self) -> &HeaderName {
        &self.inner.client_ip_header
    }

    pub fn recorders(&self) -> &RecorderSet {
        &self.inner.recorders
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
