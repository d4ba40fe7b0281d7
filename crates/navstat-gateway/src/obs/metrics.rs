//! Labelled counters for the collector, backed by `DashMap`.
//!
//! Labels are flattened into sorted key vectors so the same label set always
//! lands on the same counter regardless of argument order.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let counter = self.map.entry(label_key(labels)).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format, rows sorted by labels.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let labels = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (labels, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (labels, val) in rows {
            let _ = writeln!(out, "{name}{{{labels}}} {val}");
        }
    }
}

#[derive(Default)]
pub struct GatewayMetrics {
    /// Reports handled, by `endpoint` and `outcome`.
    pub reports: CounterVec,
    /// Successful metric pushes, by `recorder`.
    pub pushes: CounterVec,
    /// Failed metric pushes, by `recorder`.
    pub push_failures: CounterVec,
}

impl GatewayMetrics {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.reports.render("navstat_reports_total", &mut out);
        self.pushes.render("navstat_metric_pushes_total", &mut out);
        self.push_failures.render("navstat_metric_push_failures_total", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_order_does_not_matter() {
        let m = CounterVec::default();
        m.inc(&[("endpoint", "nav-timing"), ("outcome", "ok")]);
        m.inc(&[("outcome", "ok"), ("endpoint", "nav-timing")]);
        assert_eq!(m.get(&[("endpoint", "nav-timing"), ("outcome", "ok")]), 2);
        assert_eq!(m.get(&[("endpoint", "csp-report"), ("outcome", "ok")]), 0);
    }

    #[test]
    fn renders_prometheus_text() {
        let m = GatewayMetrics::default();
        m.pushes.inc(&[("recorder", "statsd")]);
        let text = m.render();
        assert!(text.contains("# TYPE navstat_metric_pushes_total counter"));
        assert!(text.contains("navstat_metric_pushes_total{recorder=\"statsd\"} 1"));
    }
}
