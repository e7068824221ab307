//! Configuration management for the dashboard
//!
//! Values come from `data-*` attributes on the page's `<body>` so the same
//! wasm bundle can be pointed at different bot backends without a rebuild.

use crate::console::{Level, console_warn};
use crate::error::{DashboardError, Result};

/// Default user/leaderboard refresh period
pub const USER_REFRESH_MS: u32 = 30_000;

/// Default system/bot stats refresh period
pub const STATS_REFRESH_MS: u32 = 5_000;

const FALLBACK_API_BASE: &str = "http://localhost";

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin the JSON endpoints live under (no trailing slash)
    pub api_base: String,

    /// User stats + leaderboard poll interval
    pub user_refresh_ms: u32,

    /// System/bot stats poll interval
    pub stats_refresh_ms: u32,

    /// Console verbosity
    pub log_level: String,
}

fn parse_ms<F>(lookup: &F, key: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            console_warn!("Ignoring invalid {key}={raw:?}, using {default}");
            default
        }),
        None => default,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            user_refresh_ms: USER_REFRESH_MS,
            stats_refresh_ms: STATS_REFRESH_MS,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration through a key lookup
    ///
    /// Unparseable numbers fall back to their defaults, like missing keys do.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            api_base: lookup("api-base")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),

            user_refresh_ms: parse_ms(&lookup, "user-refresh-ms", USER_REFRESH_MS),

            stats_refresh_ms: parse_ms(&lookup, "stats-refresh-ms", STATS_REFRESH_MS),

            log_level: lookup("log-level").unwrap_or(defaults.log_level),
        }
    }

    /// Load configuration from the current page
    ///
    /// `data-api-base` wins over the page origin when both are present.
    #[cfg(target_arch = "wasm32")]
    pub fn from_document() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| DashboardError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| DashboardError::Dom("no document".into()))?;
        let body = document.body();
        let origin = window.location().origin().ok();

        Ok(Self::from_lookup(|key| {
            let attr = body
                .as_ref()
                .and_then(|b| b.get_attribute(&format!("data-{key}")));
            match key {
                "api-base" => attr.or_else(|| origin.clone()),
                _ => attr,
            }
        }))
    }

    /// Parsed log level
    pub fn level(&self) -> Result<Level> {
        self.log_level.parse()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(DashboardError::Config("api_base must not be empty".into()));
        }
        if self.user_refresh_ms == 0 {
            return Err(DashboardError::Config("user_refresh_ms must be positive".into()));
        }
        if self.stats_refresh_ms == 0 {
            return Err(DashboardError::Config("stats_refresh_ms must be positive".into()));
        }
        self.level()?;
        Ok(())
    }
}
