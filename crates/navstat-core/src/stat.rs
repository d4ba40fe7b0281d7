//! Metric-namespace derivation from raw page paths.
//!
//! Rules:
//! - `validate` runs on the raw path and must pass before `normalize` output
//!   is ever used as a metric name.
//! - `normalize` never cleans up what `validate` rejects; `//` still becomes
//!   `..` here.

/// Characters a metric namespace cannot carry.
const UNSAFE_CHARS: [char; 2] = ['&', '#'];

/// Returns `false` for paths that would yield unsafe or ambiguous metric names.
pub fn validate(path: &str) -> bool {
    !path.contains(UNSAFE_CHARS) && !path.contains("//")
}

/// Turn a request path into a lowercase, dot-delimited prefix.
///
/// A non-empty result always ends in `.`, so a field name can be appended
/// directly. A trailing `/` names an implicit `index` resource, and anything
/// from the first `.` on (file extensions) is dropped.
pub fn normalize(path: &str) -> String {
    let mut raw = path.to_owned();
    if raw.ends_with('/') {
        raw.push_str("index");
    }

    let stripped = raw.trim_start_matches('/');
    let stem = stripped.split('.').next().unwrap_or_default();

    let mut out = stem.replace('/', ".").to_lowercase();
    if !out.is_empty() {
        out.push('.');
    }
    out
}
