//! Error types for the dashboard
//!
//! Uses thiserror for ergonomic error definitions.
//! Nothing here is fatal: every error ends up in the console and the
//! next poll tick tries again.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network errors (request never produced a body)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with an `error` field
    #[error("API error: {0}")]
    Api(String),

    /// Host bridge missing or rejected a message
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// Element lookup or mutation failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// Exception thrown from the JS side
    #[error("JS error: {0}")]
    Js(String),

    /// Writing page files failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Executor refused a poll cycle
    #[error("Spawn error: {0}")]
    Spawn(String),
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}

impl From<futures::task::SpawnError> for DashboardError {
    fn from(err: futures::task::SpawnError) -> Self {
        DashboardError::Spawn(err.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for DashboardError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DashboardError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<DashboardError> for wasm_bindgen::JsValue {
    fn from(err: DashboardError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
