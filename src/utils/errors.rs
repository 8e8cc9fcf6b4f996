use std::error::Error as StdError;
use thiserror::Error;

use crate::constants::MISSING_TEXT_MESSAGE;

/// Failure raised inside a single probe call, before it is folded into a `ProbeResult`
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Request could not be built or sent; rendered with its causes
    #[error("{}", source_chain(.0))]
    Transport(#[from] reqwest::Error),

    /// Structured `error` object returned by the API
    #[error("{code} - {message}")]
    Api { code: String, message: String },

    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("HTTP {0} Error en generación")]
    GenerationStatus(u16),

    #[error("{}", MISSING_TEXT_MESSAGE)]
    MissingText,

    #[error("Invalid JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ProbeError {
    /// True when the request never produced an HTTP response
    pub fn is_network(&self) -> bool {
        match self {
            ProbeError::Transport(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}

/// Join an error and its sources with ": "
fn source_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let api = ProbeError::Api {
            code: "403".to_string(),
            message: "Permission denied".to_string(),
        };
        assert_eq!(api.to_string(), "403 - Permission denied");

        let status = ProbeError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(status.to_string(), "HTTP 404: Not Found");

        assert_eq!(
            ProbeError::GenerationStatus(500).to_string(),
            "HTTP 500 Error en generación"
        );
        assert_eq!(ProbeError::MissingText.to_string(), MISSING_TEXT_MESSAGE);
    }

    #[test]
    fn test_transport_message_includes_cause() {
        let err = reqwest::Client::new()
            .get("https://bad host-aiplatform.googleapis.com/v1")
            .build()
            .unwrap_err();

        let cause = err.source().unwrap().to_string();
        let message = ProbeError::from(err).to_string();
        assert_eq!(message, format!("builder error: {}", cause));
    }

    #[test]
    fn test_only_transport_errors_are_network() {
        assert!(!ProbeError::MissingText.is_network());
        assert!(!ProbeError::GenerationStatus(503).is_network());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!ProbeError::from(json_err).is_network());
    }
}
