//! Startup configuration.
//!
//! Everything the server needs to know about its surroundings lives in
//! [`Config`], which is built once in `main.rs` and handed to whatever needs
//! it. Values come from `TAMANKOTA_*` environment variables (a `.env` file in
//! the working directory is honoured) and fall back to defaults suited to a
//! local setup where the page shells are served from port 8081.

use actix_web::http::Uri;
use std::num::ParseIntError;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE: &str = "tamankota.sqlite";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://127.0.0.1:8081,http://localhost:8081";
pub const DEFAULT_JSON_LIMIT: usize = 1024 * 1024; // 1 MB

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a number: {source}")]
    InvalidNumber {
        var: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("TAMANKOTA_ALLOWED_ORIGINS entry {origin:?} is not a usable origin: {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite file, or `:memory:`.
    pub database: String,
    /// Origins allowed to call `/api/*` from a browser.
    pub allowed_origins: Vec<String>,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            allowed_origins: split_origins(DEFAULT_ALLOWED_ORIGINS),
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("TAMANKOTA_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    var: "TAMANKOTA_PORT",
                    source,
                })?,
            None => defaults.port,
        };
        let json_limit = match non_empty("TAMANKOTA_JSON_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    var: "TAMANKOTA_JSON_LIMIT",
                    source,
                })?,
            None => defaults.json_limit,
        };

        let allowed_origins = non_empty("TAMANKOTA_ALLOWED_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.allowed_origins);
        for origin in &allowed_origins {
            check_origin(origin)?;
        }

        Ok(Self {
            host: non_empty("TAMANKOTA_HOST").unwrap_or(defaults.host),
            port,
            database: non_empty("TAMANKOTA_DATABASE").unwrap_or(defaults.database),
            allowed_origins,
            json_limit,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

/// An allowed origin must be a concrete `scheme://host[:port]`, the form
/// `Cors::allowed_origin` accepts.
fn check_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidOrigin {
        origin: origin.to_string(),
        reason: reason.to_string(),
    };
    if origin.contains('*') {
        return Err(invalid("wildcards are not supported"));
    }
    let uri = origin
        .parse::<Uri>()
        .map_err(|e| invalid(&e.to_string()))?;
    if uri.scheme().is_none() || uri.host().is_none() {
        return Err(invalid("expected scheme://host[:port]"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.allowed_origins,
            vec!["http://127.0.0.1:8081", "http://localhost:8081"]
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("TAMANKOTA_HOST", "127.0.0.1"),
            ("TAMANKOTA_PORT", "8088"),
            ("TAMANKOTA_DATABASE", ":memory:"),
            (
                "TAMANKOTA_ALLOWED_ORIGINS",
                " https://parks.example.org/ , ,http://localhost:3000",
            ),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8088));
        assert_eq!(config.database, ":memory:");
        assert_eq!(
            config.allowed_origins,
            vec!["https://parks.example.org", "http://localhost:3000"]
        );
        assert_eq!(config.json_limit, DEFAULT_JSON_LIMIT);
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[("TAMANKOTA_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().starts_with("TAMANKOTA_PORT"), "{err}");
    }

    #[test]
    fn unusable_origins_are_refused_at_startup() {
        for bad in ["*", "http://*.example.org", "localhost:8081", "http://exa mple.org"] {
            let err = Config::from_lookup(lookup_from(&[("TAMANKOTA_ALLOWED_ORIGINS", bad)]))
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidOrigin { .. }),
                "{bad}: {err}"
            );
        }
        assert!(Config::from_lookup(lookup_from(&[(
            "TAMANKOTA_ALLOWED_ORIGINS",
            "https://parks.example.org:8443"
        )]))
        .is_ok());
    }
}
