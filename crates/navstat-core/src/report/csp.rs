//! Content-Security-Policy violation reports.
//!
//! Field rules are declared here but only applied when the gateway is
//! configured to enforce them (`csp.enforce_validation`).

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{NavstatError, Result};

const MAX_FIELD_LEN: usize = 200;
const DIRECTIVE_PATTERN: &str = r"^[a-z0-9 '/\*\.:;-]+$";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CspReport {
    #[serde(rename = "csp-report", default)]
    pub details: CspDetails,
    /// Set by the server when the report is received; never read from the body.
    #[serde(rename = "report-time", skip_deserializing)]
    pub report_time: Option<DateTime<Utc>>,
}

/// Violation details as sent by the browser. Other members
/// (`original-policy`, `status-code`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CspDetails {
    #[serde(rename = "document-uri")]
    pub document_uri: String,
    pub referrer: String,
    #[serde(rename = "blocked-uri")]
    pub blocked_uri: String,
    #[serde(rename = "violated-directive")]
    pub violated_directive: String,
}

impl CspReport {
    /// Stamp the capture time.
    pub fn received_at(mut self, at: DateTime<Utc>) -> Self {
        self.report_time = Some(at);
        self
    }
}

impl CspDetails {
    /// Check length and character rules.
    ///
    /// - `document-uri`: 1..=200 chars
    /// - `referrer`, `blocked-uri`: at most 200 chars
    /// - `violated-directive`: 1..=200 chars of `[a-z0-9 '/*.:;-]`
    pub fn validate(&self) -> Result<()> {
        check_len("document-uri", &self.document_uri, 1)?;
        check_len("referrer", &self.referrer, 0)?;
        check_len("blocked-uri", &self.blocked_uri, 0)?;
        check_len("violated-directive", &self.violated_directive, 1)?;

        if !directive_regex()?.is_match(&self.violated_directive) {
            return Err(NavstatError::ValidationFailed {
                field: "violated-directive",
                reason: "contains characters outside [a-z0-9 '/*.:;-]".into(),
            });
        }
        Ok(())
    }
}

fn check_len(field: &'static str, value: &str, min: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        return Err(NavstatError::ValidationFailed { field, reason: format!("shorter than {min}") });
    }
    if len > MAX_FIELD_LEN {
        return Err(NavstatError::ValidationFailed {
            field,
            reason: format!("longer than {MAX_FIELD_LEN}"),
        });
    }
    Ok(())
}

fn directive_regex() -> Result<&'static Regex> {
    static RE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DIRECTIVE_PATTERN))
        .as_ref()
        .map_err(|e| NavstatError::Internal(format!("directive pattern: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::report::decode;

    fn details(directive: &str) -> CspDetails {
        CspDetails {
            document_uri: "https://www.example.com/".into(),
            referrer: String::new(),
            blocked_uri: "https://evil.example.com/".into(),
            violated_directive: directive.into(),
        }
    }

    #[test]
    fn ignores_unknown_members() {
        let body = br#"{"csp-report": {
            "document-uri": "https://www.example.com/",
            "blocked-uri": "https://evil.example.com/",
            "violated-directive": "directive",
            "original-policy": "policy"
        }}"#;
        let r: CspReport = decode(body).unwrap();
        assert_eq!(r.details.violated_directive, "directive");
        assert_eq!(r.details.referrer, "");
        assert!(r.report_time.is_none());
    }

    #[test]
    fn accepts_typical_directive() {
        assert!(details("script-src 'self' https://cdn.example.com").validate().is_ok());
    }

    #[test]
    fn rejects_empty_and_uppercase_directive() {
        let err = details("").validate().unwrap_err();
        assert_eq!(err.client_code().as_str(), "VALIDATION_FAILED");
        assert!(details("Script-Src").validate().is_err());
    }

    #[test]
    fn rejects_overlong_fields() {
        let mut d = details("img-src");
        d.referrer = "r".repeat(MAX_FIELD_LEN + 1);
        assert!(d.validate().is_err());

        let mut d = details("img-src");
        d.document_uri.clear();
        assert!(d.validate().is_err());
    }
}
