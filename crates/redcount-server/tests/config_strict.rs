#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use redcount_core::ErrorKind;
use redcount_server::config::{self, ServerConfig, StoreBackend};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
store:
  adress: "redis:6379" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("version 2"));
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.server.port, 10000);
    assert!(!cfg.server.track_last_visit);
    assert_eq!(cfg.store.backend, StoreBackend::Redis);
    assert_eq!(cfg.store.addr, "redis:6379");
    assert_eq!(cfg.store.password, "");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  port: 8081
  track_last_visit: true
store:
  backend: memory
  addr: "cache.internal:6380"
  password: "hunter2"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.port, 8081);
    assert!(cfg.server.track_last_visit);
    assert_eq!(cfg.store.backend, StoreBackend::Memory);
    assert_eq!(cfg.store.addr, "cache.internal:6380");
    assert_eq!(cfg.store.password, "hunter2");
}

#[test]
fn env_overrides_defaults() {
    let mut cfg = ServerConfig::default();
    config::apply_env(
        &mut cfg,
        env(&[
            ("REDIS_ADDR", "10.1.2.3:6379"),
            ("REDIS_PASSWORD", "s3cret"),
            ("API_PORT", "9000"),
            ("TRACK_LAST_VISIT", "true"),
            ("STORE_BACKEND", "memory"),
        ]),
    )
    .unwrap();

    assert_eq!(cfg.store.addr, "10.1.2.3:6379");
    assert_eq!(cfg.store.password, "s3cret");
    assert_eq!(cfg.server.port, 9000);
    assert!(cfg.server.track_last_visit);
    assert_eq!(cfg.store.backend, StoreBackend::Memory);
}

#[test]
fn empty_env_values_keep_defaults() {
    let mut cfg = ServerConfig::default();
    config::apply_env(&mut cfg, env(&[("REDIS_ADDR", ""), ("API_PORT", "")])).unwrap();
    assert_eq!(cfg.store.addr, "redis:6379");
    assert_eq!(cfg.server.port, 10000);
}

#[test]
fn unrecognized_flag_is_ignored() {
    let mut cfg = ServerConfig::default();
    config::apply_env(&mut cfg, env(&[("TRACK_LAST_VISIT", "maybe")])).unwrap();
    assert!(!cfg.server.track_last_visit);
}

#[test]
fn bad_port_and_backend_fail() {
    let mut cfg = ServerConfig::default();
    let err = config::apply_env(&mut cfg, env(&[("API_PORT", "http")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = config::apply_env(&mut cfg, env(&[("STORE_BACKEND", "etcd")])).unwrap_err();
    assert!(err.to_string().contains("etcd"));
}
