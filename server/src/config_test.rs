use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_to_memory_store_on_port_3000() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.store, StoreBackend::Memory);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn database_url_selects_postgres() {
    let cfg = config_from(&[("DATABASE_URL", "postgres://u:p@db/songs"), ("DB_MAX_CONNECTIONS", "12")]).unwrap();
    assert_eq!(
        cfg.store,
        StoreBackend::Postgres { url: "postgres://u:p@db/songs".to_owned(), max_connections: 12 }
    );
}

#[test]
fn blank_database_url_falls_back_to_memory() {
    let cfg = config_from(&[("DATABASE_URL", "  ")]).unwrap();
    assert_eq!(cfg.store, StoreBackend::Memory);
}

#[test]
fn unparsable_max_connections_uses_default() {
    let cfg = config_from(&[("DATABASE_URL", "postgres://db"), ("DB_MAX_CONNECTIONS", "lots")]).unwrap();
    assert_eq!(
        cfg.store,
        StoreBackend::Postgres { url: "postgres://db".to_owned(), max_connections: DEFAULT_DB_MAX_CONNECTIONS }
    );
}

#[test]
fn parses_port_and_bind_addr_overrides() {
    let cfg = config_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")]).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn invalid_port_errors() {
    let err = config_from(&[("PORT", "http")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn invalid_bind_addr_errors() {
    let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
    assert!(err.to_string().contains("BIND_ADDR"));
}
