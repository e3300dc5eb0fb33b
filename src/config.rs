use crate::i18n::Language;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    pub http_addr: SocketAddr,
    pub log_json: bool,
    pub default_language: Language,
    /// JSON fixture file; the built-in demo data is used when unset.
    pub fixtures: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    variable: &'static str,
    message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.variable, self.message)
    }
}

impl std::error::Error for ConfigError {}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl PortalConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("MOPP_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = raw_addr.trim().parse().map_err(|err| ConfigError {
            variable: "MOPP_HTTP_ADDR",
            message: format!("invalid socket address '{raw_addr}': {err}"),
        })?;

        let log_json = match lookup("MOPP_LOG_JSON") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError {
                variable: "MOPP_LOG_JSON",
                message: format!("expected a boolean, got '{raw}'"),
            })?,
            None => false,
        };

        let default_language = match lookup("MOPP_DEFAULT_LANGUAGE") {
            Some(raw) => raw.parse().map_err(|err| ConfigError {
                variable: "MOPP_DEFAULT_LANGUAGE",
                message: format!("{err}"),
            })?,
            None => Language::default(),
        };

        let fixtures = lookup("MOPP_FIXTURES")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            http_addr,
            log_json,
            default_language,
            fixtures,
        })
    }
}
