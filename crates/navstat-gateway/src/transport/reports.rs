//! Report endpoints.
//!
//! Each request runs once through: method check -> body decode ->
//! report-specific step -> respond, stopping at the first failure.
//!
//! - `/nav-timing`: validate page-uri on every recorder, then emit metrics.
//! - `/js-error`, `/csp-report`: stamp a server time and log; no recorders.

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;

use navstat_core::report::{self, CspReport, JsErrorReport, NavTimingReport};

use crate::app_state::AppState;
use crate::transport::Rejection;

type Outcome = std::result::Result<StatusCode, Rejection>;

const NAV_TIMING: &str = "nav-timing";
const JS_ERROR: &str = "js-error";
const CSP_REPORT: &str = "csp-report";

fn require_post(method: &Method) -> std::result::Result<(), Rejection> {
    if *method == Method::POST {
        Ok(())
    } else {
        Err(Rejection::MethodNotAllowed)
    }
}

/// Forwarded client address; multiple header values are concatenated.
fn client_addr(headers: &HeaderMap, name: &header::HeaderName) -> String {
    headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect()
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> &'a str {
    headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or_default()
}

fn finish(state: &AppState, endpoint: &str, outcome: Outcome) -> Outcome {
    let label = match &outcome {
        Ok(_) => "ok",
        Err(r) => {
            tracing::debug!(endpoint, rejection = %r, status = r.status().as_u16(), "report rejected");
            r.outcome()
        }
    };
    state.metrics().reports.inc(&[("endpoint", endpoint), ("outcome", label)]);
    outcome
}

fn to_log_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string(report).unwrap_or_else(|e| format!("<unserializable report: {e}>"))
}

pub async fn nav_timing(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Outcome {
    let outcome = handle_nav_timing(&state, &method, &headers, &body);
    finish(&state, NAV_TIMING, outcome)
}

fn handle_nav_timing(state: &AppState, method: &Method, headers: &HeaderMap, body: &[u8]) -> Outcome {
    require_post(method)?;
    let timing: NavTimingReport = report::decode(body)?;

    tracing::debug!(
        page_uri = %timing.page,
        referer = header_str(headers, header::REFERER),
        user_agent = header_str(headers, header::USER_AGENT),
        "navigation timing received"
    );

    let pushed = state.recorders().record(&timing.page, &timing.details, state.metrics())?;
    tracing::debug!(page_uri = %timing.page, pushed, "navigation timing recorded");
    Ok(StatusCode::OK)
}

pub async fn js_error(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Outcome {
    let outcome = handle_js_error(&state, &method, &headers, &body);
    finish(&state, JS_ERROR, outcome)
}

fn handle_js_error(state: &AppState, method: &Method, headers: &HeaderMap, body: &[u8]) -> Outcome {
    require_post(method)?;
    let js_error: JsErrorReport = report::decode(body)?;
    let js_error = js_error.received_at(Utc::now());

    tracing::info!(
        client = %client_addr(headers, state.client_ip_header()),
        error_type = %js_error.details.error_type,
        description = %js_error.details.description,
        report = %to_log_json(&js_error),
        "encountered a javascript error"
    );
    Ok(StatusCode::OK)
}

pub async fn csp_report(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Outcome {
    let outcome = handle_csp_report(&state, &method, &headers, &body);
    finish(&state, CSP_REPORT, outcome)
}

fn handle_csp_report(state: &AppState, method: &Method, headers: &HeaderMap, body: &[u8]) -> Outcome {
    require_post(method)?;
    let csp: CspReport = report::decode(body)?;
    let csp = csp.received_at(Utc::now());

    if state.cfg().csp.enforce_validation {
        if let Err(e) = csp.details.validate() {
            tracing::warn!(error = %e, report = %to_log_json(&csp), "csp report failed validation");
            return Err(e.into());
        }
    }

    tracing::info!(
        client = %client_addr(headers, state.client_ip_header()),
        violated_directive = %csp.details.violated_directive,
        report = %to_log_json(&csp),
        "policy violation"
    );
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn client_addr_joins_repeated_header_values() {
        let mut headers = HeaderMap::new();
        headers.append("x-real-ip", HeaderValue::from_static("10.0.0.1"));
        headers.append("x-real-ip", HeaderValue::from_static("10.0.0.2"));

        let name = header::HeaderName::from_static("x-real-ip");
        assert_eq!(client_addr(&headers, &name), "10.0.0.110.0.0.2");
    }

    #[test]
    fn client_addr_reads_only_the_configured_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.1"));
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.9"));

        let name = header::HeaderName::from_static("x-forwarded-for");
        assert_eq!(client_addr(&headers, &name), "203.0.113.9");

        let missing = header::HeaderName::from_static("x-client-ip");
        assert_eq!(client_addr(&headers, &missing), "");
    }
}
