//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is served next to a backend whose mount points may differ per
//! deployment. Base paths and the article page size are read from build
//! environment variables so the same source can target any of them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_AUTH_BASE: &str = "/auth";
pub const DEFAULT_ARTICLES_PER_PAGE: usize = 4;

/// Errors raised while parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidPageSize { var: &'static str, value: String },
}

/// Paths and widget sizes shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for versioned resources (`/api/v1/greetings`).
    pub api_base: String,
    /// Prefix for session and user endpoints (`/auth`, `/auth/users`).
    pub auth_base: String,
    /// Items per page in the latest-articles list.
    pub articles_per_page: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            auth_base: DEFAULT_AUTH_BASE.to_owned(),
            articles_per_page: DEFAULT_ARTICLES_PER_PAGE,
        }
    }
}

impl ClientConfig {
    /// Build typed config from build environment variables.
    ///
    /// Optional:
    /// - `GREETINGS_API_BASE`: default `/api`
    /// - `GREETINGS_AUTH_BASE`: default `/auth`
    /// - `GREETINGS_ARTICLES_PER_PAGE`: default 4
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] when the page size is zero or
    /// not a number.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("GREETINGS_API_BASE"),
            option_env!("GREETINGS_AUTH_BASE"),
            option_env!("GREETINGS_ARTICLES_PER_PAGE"),
        )
    }

    /// Parse raw (possibly absent) values, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] when the page size is zero or
    /// not a number.
    pub fn from_values(
        api_base: Option<&str>,
        auth_base: Option<&str>,
        articles_per_page: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: normalize_base(api_base, DEFAULT_API_BASE),
            auth_base: normalize_base(auth_base, DEFAULT_AUTH_BASE),
            articles_per_page: parse_page_size(articles_per_page)?,
        })
    }

    /// Resolve the build config, logging and falling back to defaults when it
    /// does not parse.
    pub fn resolve() -> Self {
        match Self::from_build_env() {
            Ok(config) => config,
            Err(error) => {
                #[cfg(feature = "hydrate")]
                log::warn!("invalid client config, using defaults: {error}");
                #[cfg(not(feature = "hydrate"))]
                let _ = error;
                Self::default()
            }
        }
    }
}

fn normalize_base(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}

fn parse_page_size(raw: Option<&str>) -> Result<usize, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(DEFAULT_ARTICLES_PER_PAGE);
    };
    match raw.parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPageSize { var: "GREETINGS_ARTICLES_PER_PAGE", value: raw.to_owned() }),
    }
}
