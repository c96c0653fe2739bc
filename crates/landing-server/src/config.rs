//! Server Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("Static directory not found: {0}")]
    MissingStaticDir(PathBuf),

    #[error("No index.html in {0} (build the frontend with `trunk build` first)")]
    MissingIndex(PathBuf),
}

/// Where to listen and what to serve
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read `BIND_ADDR` and `STATIC_DIR` from the process environment
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = addr
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { value: addr.clone(), source })?;

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.into())
            .into();

        Ok(Self { bind_addr, static_dir })
    }

    /// The static dir must exist and hold the page entry point
    pub fn validate(&self) -> Result<(), ServerError> {
        if !self.static_dir.is_dir() {
            return Err(ServerError::MissingStaticDir(self.static_dir.clone()));
        }
        if !self.index_file().is_file() {
            return Err(ServerError::MissingIndex(self.static_dir.clone()));
        }
        Ok(())
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a HashMap<&str, &str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults() {
        let vars = HashMap::new();
        let config = ServerConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_overrides() {
        let vars = HashMap::from([("BIND_ADDR", "127.0.0.1:8080"), ("STATIC_DIR", "/srv/site")]);
        let config = ServerConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.index_file(), PathBuf::from("/srv/site/index.html"));
    }

    #[test]
    fn test_bad_bind_addr() {
        let vars = HashMap::from([("BIND_ADDR", "localhost")]);
        let err = ServerConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            ServerError::InvalidBindAddr { ref value, .. } if value == "localhost"
        ));
    }

    #[test]
    fn test_validate_missing_dir() {
        let vars = HashMap::from([("STATIC_DIR", "/definitely/not/here")]);
        let config = ServerConfig::from_lookup(lookup(&vars)).unwrap();
        assert!(matches!(config.validate(), Err(ServerError::MissingStaticDir(_))));
    }
}
