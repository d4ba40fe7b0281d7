//! StatsD backend.
//!
//! Every value is sent as a timing (`|ms`) at sample rate 1.0. StatsD
//! timings are unsigned, so negative values are reported as push failures.

use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::panic::RefUnwindSafe;

use cadence::{MetricSink, StatsdClient, Timed, UdpMetricSink};
use navstat_core::error::{NavstatError, Result};
use navstat_core::Recorder;

pub struct StatsdRecorder {
    client: StatsdClient,
}

impl StatsdRecorder {
    /// Resolve `address` and open a non-blocking UDP sink towards it.
    ///
    /// The local socket family follows the first resolved address.
    pub fn connect(address: &str, prefix: &str) -> Result<Self> {
        let target = resolve(address)?;
        let socket = UdpSocket::bind(local_bind_addr(&target))
            .map_err(|e| NavstatError::Config(format!("statsd socket bind failed: {e}")))?;
        socket
            .set_nonblocking(true)
            .map_err(|e| NavstatError::Config(format!("statsd socket setup failed: {e}")))?;

        let sink = UdpMetricSink::from(target, socket)
            .map_err(|e| NavstatError::Config(format!("statsd address {address}: {e}")))?;

        tracing::debug!(%address, %target, %prefix, "statsd sink opened");
        Ok(Self::from_sink(prefix, sink))
    }

    pub fn from_sink<T>(prefix: &str, sink: T) -> Self
    where
        T: MetricSink + Send + Sync + RefUnwindSafe + 'static,
    {
        Self { client: StatsdClient::from_sink(prefix, sink) }
    }

    fn failed(&self, reason: String) -> NavstatError {
        NavstatError::RecordFailed { recorder: self.name().to_owned(), reason }
    }
}

fn resolve(address: &str) -> Result<SocketAddr> {
    address
        .to_socket_addrs()
        .map_err(|e| NavstatError::Config(format!("statsd address {address}: {e}")))?
        .next()
        .ok_or_else(|| NavstatError::Config(format!("statsd address {address} resolved to nothing")))
}

fn local_bind_addr(target: &SocketAddr) -> &'static str {
    if target.is_ipv6() {
        "[::]:0"
    } else {
        "0.0.0.0:0"
    }
}

impl Recorder for StatsdRecorder {
    fn name(&self) -> &str {
        "statsd"
    }

    fn push(&self, metric: &str, value: i64) -> Result<()> {
        let ms = u64::try_from(value)
            .map_err(|_| self.failed(format!("negative timing {value} for {metric}")))?;
        self.client
            .time(metric, ms)
            .map(|_| ())
            .map_err(|e| self.failed(format!("sending {metric}: {e}")))
    }
}
