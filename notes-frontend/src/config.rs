use std::env;
use std::time::Duration;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Base endpoint of the notes API, e.g. "http://127.0.0.1:5000/api/notes"
    pub const API_BASE: &str = "NOTES_API_BASE";
    /// Per-request timeout in seconds. Unset or 0 disables the timeout.
    pub const REQUEST_TIMEOUT_SECS: &str = "NOTES_REQUEST_TIMEOUT_SECS";
    pub const USER_AGENT: &str = "NOTES_USER_AGENT";
}

/// Default values
pub mod defaults {
    pub const API_BASE: &str = "http://127.0.0.1:5000/api/notes";
    pub const REQUEST_TIMEOUT_SECS: u64 = 0;
    pub const USER_AGENT: &str = concat!("notes-frontend/", env!("CARGO_PKG_VERSION"));
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} must be an http(s) URL, got scheme '{scheme}'")]
    UnsupportedScheme { var: &'static str, scheme: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base endpoint without a trailing slash
    pub api_base: String,
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: defaults::API_BASE.to_string(),
            request_timeout: None,
            user_agent: defaults::USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source (the process
    /// environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup(env_vars::API_BASE)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| defaults::API_BASE.to_string());
        let api_base = validate_api_base(&api_base)?;

        let timeout_secs = match lookup(env_vars::REQUEST_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                log::warn!(
                    "Ignoring invalid {}={:?}, using default of {}",
                    env_vars::REQUEST_TIMEOUT_SECS,
                    raw,
                    defaults::REQUEST_TIMEOUT_SECS
                );
                defaults::REQUEST_TIMEOUT_SECS
            }),
            None => defaults::REQUEST_TIMEOUT_SECS,
        };

        let user_agent = lookup(env_vars::USER_AGENT)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| defaults::USER_AGENT.to_string());

        Ok(Self {
            api_base,
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            user_agent,
        })
    }
}

fn validate_api_base(raw: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        var: env_vars::API_BASE,
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(ConfigError::UnsupportedScheme {
            var: env_vars::API_BASE,
            scheme: other.to_string(),
        }),
    }
}
