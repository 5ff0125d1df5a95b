//! Server configuration from environment (`.env` honoured via dotenvy in the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://books.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Emit sqlx statement logs (target `sqlx::query`).
    pub echo_sql: bool,
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or(&lookup, "BIND_ADDR", || {
            SocketAddr::from_str(DEFAULT_BIND_ADDR).map_err(|_| ConfigError::InvalidEnv {
                key: "BIND_ADDR",
                value: DEFAULT_BIND_ADDR.into(),
            })
        })?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", || Ok(DEFAULT_MAX_CONNECTIONS))?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidEnv {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let echo_sql = match lookup("DB_ECHO") {
            None => false,
            Some(v) => parse_flag(&v).ok_or(ConfigError::InvalidEnv { key: "DB_ECHO", value: v })?,
        };
        let body_limit_bytes = parse_or(&lookup, "BODY_LIMIT_BYTES", || Ok(DEFAULT_BODY_LIMIT_BYTES))?;

        Ok(ServerConfig {
            database_url,
            bind_addr,
            max_connections,
            echo_sql,
            body_limit_bytes,
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    D: FnOnce() -> Result<T, ConfigError>,
{
    match lookup(key) {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnv { key, value: v }),
        None => default(),
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.max_connections, 5);
        assert!(!cfg.echo_sql);
        assert_eq!(cfg.body_limit_bytes, 65536);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_from(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_ECHO", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite://other.db");
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.max_connections, 2);
        assert!(cfg.echo_sql);
    }

    #[test]
    fn rejects_garbage() {
        let err = config_from(&[("DB_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "DB_MAX_CONNECTIONS", .. }));
        let err = config_from(&[("DB_ECHO", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "DB_ECHO", .. }));
        assert!(config_from(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
    }
}
