use thiserror::Error;

pub const CORS_ALLOWED_ORIGIN_KEY: &str = "CORS_ALLOWED_ORIGIN";
pub const CORS_MAX_AGE_KEY: &str = "CORS_MAX_AGE_SECS";
const DEFAULT_MAX_AGE_SECS: u64 = 86400;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be \"*\" or an http(s) origin prefix, got {value:?}")]
    InvalidOrigin { key: &'static str, value: String },
    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidMaxAge { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    Prefix(String),
}

impl AllowedOrigins {
    /// Value for `Access-Control-Allow-Origin`, or `None` when the request
    /// origin is not allowed.
    pub fn header_value(&self, origin: Option<&str>) -> Option<String> {
        match self {
            AllowedOrigins::Any => Some("*".into()),
            AllowedOrigins::Prefix(prefix) => origin
                .filter(|o| origin_matches(prefix, o))
                .map(str::to_string),
        }
    }

    /// Whether the allow-origin value depends on the request's `Origin`.
    pub fn varies_by_origin(&self) -> bool {
        matches!(self, AllowedOrigins::Prefix(_))
    }
}

// The configured origin matches itself or itself with an explicit port, never
// a longer host name.
fn origin_matches(prefix: &str, origin: &str) -> bool {
    match origin.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.strip_prefix(':').is_some_and(|port| {
            !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
        }),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allowed_origins: AllowedOrigins,
    pub max_age_secs: u64,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub cors: CorsPolicy,
}

impl AppConfig {
    /// Reads settings through `lookup` (the deployment's secret store in
    /// production). Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = match lookup(CORS_ALLOWED_ORIGIN_KEY) {
            None => AllowedOrigins::Any,
            Some(value) => parse_origin(value.trim())?,
        };

        let max_age_secs = match lookup(CORS_MAX_AGE_KEY) {
            None => DEFAULT_MAX_AGE_SECS,
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidMaxAge {
                key: CORS_MAX_AGE_KEY,
                value,
            })?,
        };

        Ok(Self {
            cors: CorsPolicy { allowed_origins, max_age_secs },
        })
    }
}

fn parse_origin(value: &str) -> Result<AllowedOrigins, ConfigError> {
    if value == "*" {
        return Ok(AllowedOrigins::Any);
    }
    let has_host = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());

    if has_host {
        Ok(AllowedOrigins::Prefix(value.trim_end_matches('/').to_string()))
    } else {
        Err(ConfigError::InvalidOrigin {
            key: CORS_ALLOWED_ORIGIN_KEY,
            value: value.to_string(),
        })
    }
}
