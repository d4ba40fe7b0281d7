//! All-or-nothing metric fan-out across configured recorders.
//!
//! Rules:
//! - Every recorder validates the raw page identifier before any push.
//! - One rejection means zero pushes on every recorder.
//! - A failed push is logged and counted; the remaining pushes still run.

use std::sync::Arc;

use navstat_core::error::{NavstatError, Result};
use navstat_core::{flatten, Flatten, Recorder};

use crate::obs::metrics::GatewayMetrics;

pub struct RecorderSet {
    recorders: Vec<Arc<dyn Recorder>>,
}

impl RecorderSet {
    pub fn new(recorders: Vec<Arc<dyn Recorder>>) -> Self {
        Self { recorders }
    }

    pub fn is_empty(&self) -> bool {
        self.recorders.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.recorders.iter().map(|r| r.name()).collect()
    }

    /// Fails with `InvalidPageUri` naming the first recorder that refuses `uri`.
    pub fn validate_all(&self, uri: &str) -> Result<()> {
        match self.recorders.iter().find(|r| !r.validate(uri)) {
            Some(r) => Err(NavstatError::InvalidPageUri(format!("{uri} (rejected by {})", r.name()))),
            None => Ok(()),
        }
    }

    /// Validate `uri` on every recorder, then push each field of `detail` to
    /// each recorder as `normalize(uri) + field name`.
    ///
    /// Returns the number of successful pushes, or the first push failure
    /// once all pushes have been attempted.
    pub fn record<T: Flatten>(&self, uri: &str, detail: &T, metrics: &GatewayMetrics) -> Result<usize> {
        self.validate_all(uri)?;

        let prefixes: Vec<String> = self.recorders.iter().map(|r| r.normalize(uri)).collect();
        let mut pushed = 0;
        let mut first_err = None;

        for (field, value) in flatten(detail) {
            for (recorder, prefix) in self.recorders.iter().zip(&prefixes) {
                let metric = format!("{prefix}{field}");
                match recorder.push(&metric, value) {
                    Ok(()) => {
                        pushed += 1;
                        metrics.pushes.inc(&[("recorder", recorder.name())]);
                    }
                    Err(e) => {
                        tracing::error!(recorder = recorder.name(), %metric, value, error = %e, "metric push failed");
                        metrics.push_failures.inc(&[("recorder", recorder.name())]);
                        first_err.get_or_insert(e);
                    }
                }
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => Ok(pushed),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Mutex;

    use navstat_core::report::NavTimingDetails;

    use super::*;

    struct Spy {
        name: &'static str,
        accept: bool,
        fail_on: Option<&'static str>,
        pushed: Mutex<Vec<(String, i64)>>,
    }

    impl Spy {
        fn new(name: &'static str, accept: bool) -> Arc<Self> {
            Arc::new(Self { name, accept, fail_on: None, pushed: Mutex::new(Vec::new()) })
        }

        fn pushed(&self) -> Vec<(String, i64)> {
            self.pushed.lock().unwrap().clone()
        }
    }

    impl Recorder for Spy {
        fn name(&self) -> &str {
            self.name
        }
        fn push(&self, metric: &str, value: i64) -> Result<()> {
            if self.fail_on.is_some_and(|f| metric.ends_with(f)) {
                return Err(NavstatError::RecordFailed { recorder: self.name.into(), reason: "down".into() });
            }
            self.pushed.lock().unwrap().push((metric.to_owned(), value));
            Ok(())
        }
        fn validate(&self, uri: &str) -> bool {
            self.accept && navstat_core::stat::validate(uri)
        }
    }

    fn details() -> NavTimingDetails {
        NavTimingDetails { dns: 1, connect: 2, ttfb: 3, base_page: 4, front_end: 5 }
    }

    #[test]
    fn dual_write_reaches_both() {
        let a = Spy::new("a", true);
        let b = Spy::new("b", true);
        let set = RecorderSet::new(vec![a.clone() as Arc<dyn Recorder>, b.clone() as Arc<dyn Recorder>]);
        let metrics = GatewayMetrics::default();

        let n = set.record("/foo/bar", &details(), &metrics).unwrap();
        assert_eq!(n, 10);
        assert_eq!(a.pushed(), b.pushed());
        assert_eq!(a.pushed()[0], ("foo.bar.dns".to_owned(), 1));
        assert_eq!(metrics.pushes.get(&[("recorder", "b")]), 5);
    }

    #[test]
    fn one_rejection_means_no_pushes() {
        let a = Spy::new("a", true);
        let b = Spy::new("b", false);
        let set = RecorderSet::new(vec![a.clone() as Arc<dyn Recorder>, b.clone() as Arc<dyn Recorder>]);

        let err = set.record("/foo/bar", &details(), &GatewayMetrics::default()).unwrap_err();
        assert_eq!(err.client_code().as_str(), "INVALID_PAGE_URI");
        assert!(a.pushed().is_empty());
        assert!(b.pushed().is_empty());
    }

    #[test]
    fn push_failure_does_not_stop_remaining_pushes() {
        let flaky = Arc::new(Spy {
            name: "flaky",
            accept: true,
            fail_on: Some(".ttfb"),
            pushed: Mutex::new(Vec::new()),
        });
        let set = RecorderSet::new(vec![flaky.clone() as Arc<dyn Recorder>]);
        let metrics = GatewayMetrics::default();

        let err = set.record("/x", &details(), &metrics).unwrap_err();
        assert_eq!(err.client_code().as_str(), "RECORD_FAILED");
        assert_eq!(flaky.pushed().len(), 4);
        assert_eq!(metrics.push_failures.get(&[("recorder", "flaky")]), 1);
    }
}
