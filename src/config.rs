use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;

pub const ADDR_VAR: &str = "PORTFOLIO_SITE_ADDR";
pub const ROOT_VAR: &str = "PORTFOLIO_SITE_ROOT";

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ROOT: &str = "dist";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORTFOLIO_SITE_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Where the static server listens and which directory it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    pub root: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr_value = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;
        let root = get(ROOT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

        Ok(Self { addr, root })
    }

    pub fn index_file(&self) -> PathBuf {
        self.root.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.root, PathBuf::from("dist"));
        assert_eq!(config.index_file(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            (ADDR_VAR, "127.0.0.1:8080"),
            (ROOT_VAR, "/srv/site"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.root, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config =
            SiteConfig::from_lookup(lookup(&[(ADDR_VAR, "  "), (ROOT_VAR, "")])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.root, PathBuf::from("dist"));
    }

    #[test]
    fn test_invalid_addr() {
        let err = SiteConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        match &err {
            ConfigError::InvalidAddr { value, .. } => assert_eq!(value, "localhost"),
        }
        assert!(err.to_string().starts_with("invalid PORTFOLIO_SITE_ADDR 'localhost'"));
    }
}
