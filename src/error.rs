//! Error types for the dashboard
//!
//! Uses thiserror for ergonomic error definitions.
//! Every failure in a refresh or submission is a value, never a panic.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failures (connection refused, CORS, aborted fetch)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-2xx response from the BizHealth API
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Browser DOM errors (missing element, failed cast)
    #[error("DOM error: {0}")]
    Dom(String),

    /// Another request sequence is still outstanding
    #[error("A dashboard request is already in flight")]
    Busy,
}

impl DashboardError {
    /// Message shown to the user in the blocking dialog.
    ///
    /// API errors carry the server's own wording; everything else
    /// falls back to the full error text.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DashboardError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        DashboardError::Dom(format!("{err:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::Api { status: 400, message: "Invalid date".into() };
        assert!(err.to_string().contains("HTTP 400"));
        assert_eq!(err.user_message(), "Invalid date");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Json(_)));
        assert!(err.user_message().starts_with("JSON error"));
    }
}
