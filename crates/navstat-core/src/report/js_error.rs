use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client-side JavaScript error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsErrorReport {
    #[serde(rename = "page-uri", default)]
    pub page_uri: String,
    #[serde(rename = "query-string", default)]
    pub query_string: String,
    #[serde(rename = "js-error", default)]
    pub details: JsError,
    /// Set by the server when the report is received; never read from the body.
    #[serde(rename = "report-time", skip_deserializing)]
    pub report_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct JsError {
    #[serde(rename = "user-agent")]
    pub user_agent: String,
    #[serde(rename = "error-type")]
    pub error_type: String,
    pub description: String,
}

impl JsErrorReport {
    /// Stamp the capture time.
    pub fn received_at(mut self, at: DateTime<Utc>) -> Self {
        self.report_time = Some(at);
        self
    }
}
