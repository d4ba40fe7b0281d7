#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use navstat_gateway::config::{self, RecorderKind};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
recorders:
  - kind: statsd
    adress: "127.0.0.1:8125" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
recorders:
  - kind: log
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.gateway.client_ip_header, "x-real-ip");
    assert_eq!(cfg.recorders[0].kind, RecorderKind::Log);
    assert!(!cfg.csp.enforce_validation);
}

#[test]
fn statsd_defaults_prefix() {
    let ok = r#"
version: 1
recorders:
  - kind: statsd
    address: "127.0.0.1:8125"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.recorders[0].prefix, "http-stats-collector");
    assert_eq!(cfg.recorders[0].address.as_deref(), Some("127.0.0.1:8125"));
}

#[test]
fn statsd_requires_address() {
    let bad = r#"
version: 1
recorders:
  - kind: statsd
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_empty_recorders_and_bad_version() {
    assert!(config::load_from_str("version: 1\n").is_err());
    assert!(config::load_from_str("version: 2\nrecorders:\n  - kind: log\n").is_err());
}

#[test]
fn rejects_bad_listen_address() {
    let bad = r#"
version: 1
gateway:
  listen: "localhost"
recorders:
  - kind: log
"#;
    assert!(config::load_from_str(bad).is_err());
}
