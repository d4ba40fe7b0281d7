use std::net::SocketAddr;

use axum::http::HeaderName;
use serde::Deserialize;
use navstat_core::error::{NavstatError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub recorders: Vec<RecorderConfig>,

    #[serde(default)]
    pub csp: CspSection,
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NavstatError::Config(format!("unsupported config version: {}", self.version)));
        }
        if self.recorders.is_empty() {
            return Err(NavstatError::Config("recorders must not be empty".into()));
        }

        self.gateway.validate()?;
        for (i, r) in self.recorders.iter().enumerate() {
            r.validate().map_err(|e| NavstatError::Config(format!("recorders[{i}]: {e}")))?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Trusted proxy header carrying the originating client address.
    #[serde(default = "default_client_ip_header")]
    pub client_ip_header: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            client_ip_header: default_client_ip_header(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        self.client_ip_header_name()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            NavstatError::Config(format!("gateway.listen must be a socket address ({}): {e}", self.listen))
        })
    }

    pub fn client_ip_header_name(&self) -> Result<HeaderName> {
        HeaderName::from_bytes(self.client_ip_header.as_bytes()).map_err(|e| {
            NavstatError::Config(format!(
                "gateway.client_ip_header is not a valid header name ({}): {e}",
                self.client_ip_header
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_client_ip_header() -> String {
    "x-real-ip".into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecorderKind {
    /// StatsD timings over UDP.
    Statsd,
    /// Metrics written as tracing events.
    Log,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecorderConfig {
    pub kind: RecorderKind,
    /// `host:port` of the StatsD server.
    #[serde(default)]
    pub address: Option<String>,
    /// Prefix prepended by the StatsD client to every metric.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl RecorderConfig {
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            RecorderKind::Statsd => match self.address.as_deref() {
                Some(a) if !a.trim().is_empty() => Ok(()),
                _ => Err(NavstatError::Config("statsd recorder requires an address".into())),
            },
            RecorderKind::Log => Ok(()),
        }
    }
}

fn default_prefix() -> String {
    "http-stats-collector".into()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CspSection {
    /// Apply field length/pattern rules to CSP reports (off by default).
    #[serde(default)]
    pub enforce_validation: bool,
}
