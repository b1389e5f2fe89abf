//! Client configuration baked in at build time.
//!
//! The dashboard ships as a static WASM bundle, so there is no process
//! environment at runtime. Values are captured with `option_env!` when the
//! crate is compiled and parsed through the same pure helpers the tests use.

use chrono::TimeDelta;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_TOKEN_TTL_HOURS: u32 = 5;
pub const DEFAULT_TOKEN_COOKIE: &str = "authToken";
/// Longest accepted token lifetime (one year).
pub const MAX_TOKEN_TTL_HOURS: u32 = 24 * 365;

/// Errors raised while parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The token lifetime was not a whole number of hours in range.
    #[error("invalid token ttl '{0}': expected 1 to 8760 hours")]
    InvalidTtl(String),

    /// The cookie name contained characters a cookie name may not hold.
    #[error("invalid cookie name '{0}'")]
    InvalidCookieName(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL prepended to every REST path, without a trailing slash.
    pub api_base_url: String,
    /// Fixed lifetime of a stored credential.
    pub token_ttl: TimeDelta,
    /// Name of the cookie holding the bearer token.
    pub token_cookie: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_ttl: hours(DEFAULT_TOKEN_TTL_HOURS),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_owned(),
        }
    }
}

impl AppConfig {
    /// Build typed config from variables captured at compile time.
    ///
    /// Optional:
    /// - `BLOG_ADMIN_API_BASE_URL`: default `/api`
    /// - `BLOG_ADMIN_TOKEN_TTL_HOURS`: default 5
    /// - `BLOG_ADMIN_TOKEN_COOKIE`: default `authToken`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("BLOG_ADMIN_API_BASE_URL"),
            option_env!("BLOG_ADMIN_TOKEN_TTL_HOURS"),
            option_env!("BLOG_ADMIN_TOKEN_COOKIE"),
        )
    }

    /// Build typed config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but malformed.
    pub fn from_values(
        base_url: Option<&str>,
        ttl_hours: Option<&str>,
        cookie: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = normalize_base_url(base_url.unwrap_or(DEFAULT_API_BASE_URL));
        let token_ttl = parse_ttl_hours(ttl_hours)?;
        let token_cookie = parse_cookie_name(cookie)?;
        Ok(Self { api_base_url, token_ttl, token_cookie })
    }
}

fn hours(value: u32) -> TimeDelta {
    TimeDelta::try_hours(i64::from(value)).unwrap_or(TimeDelta::MAX)
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() }
}

fn parse_ttl_hours(raw: Option<&str>) -> Result<TimeDelta, ConfigError> {
    let Some(raw) = raw else {
        return Ok(hours(DEFAULT_TOKEN_TTL_HOURS));
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if (1..=MAX_TOKEN_TTL_HOURS).contains(&value) => Ok(hours(value)),
        _ => Err(ConfigError::InvalidTtl(raw.to_owned())),
    }
}

fn parse_cookie_name(raw: Option<&str>) -> Result<String, ConfigError> {
    let name = raw.map_or(DEFAULT_TOKEN_COOKIE, str::trim);
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid { Ok(name.to_owned()) } else { Err(ConfigError::InvalidCookieName(name.to_owned())) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
