//! Unified error type and the provider's in-band error envelope.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::error_id::ErrorId;

/// The provider's in-band failure payload.
///
/// Wire shape: `{"error": {"id": string, "message"?: string, "detail"?: string}}`.
/// The envelope is speculatively decoded from every response body, because the
/// provider sometimes signals failure inside an HTTP 200 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Provider error identifier (e.g. `image_missing`). May be a value
    /// outside the known [`ErrorId`] set for new provider errors.
    #[serde(default)]
    pub id: String,
    /// Human-readable message, when the provider supplies one.
    #[serde(default)]
    pub message: Option<String>,
    /// Additional detail, when the provider supplies it.
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiError {
    /// The identifier parsed against the known set, if recognized.
    pub fn error_id(&self) -> Option<ErrorId> {
        ErrorId::from_wire(&self.id)
    }

    /// HTTP-equivalent status for the identifier. Informational only; it never
    /// participates in classification. Unrecognized identifiers map to 200.
    pub fn http_status(&self) -> u16 {
        self.error_id().map(|id| id.http_status()).unwrap_or(200)
    }

    /// Generic error for a non-2xx response whose body carried no decodable
    /// envelope. Known transport-level identifiers are recovered from the
    /// status code where possible.
    pub(crate) fn from_status(status: u16) -> Self {
        let id = match status {
            401 => ErrorId::HttpUnauthorized.as_str().to_string(),
            429 => ErrorId::HttpMaxRequests.as_str().to_string(),
            _ => "http_error".to_string(),
        };
        Self {
            id,
            message: Some(format!("HTTP {status}")),
            detail: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.id, message),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Top-level wrapper the provider uses on the wire.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: ApiError,
}

/// Unified error type for the library.
///
/// Exactly one of typed response or `Error` is surfaced per call. HTTP-level
/// failures and in-band failures both surface as [`Error::Api`], so callers
/// need a single error-handling path regardless of which channel signaled
/// the failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be built from the caller's input (missing
    /// required field, malformed path segment, unencodable body).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Client construction or base-URL configuration failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection, TLS, timeout, or cancellation failure. The call never
    /// produced a classifiable response; retry policy is the caller's.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider rejected the call, either via HTTP status or via a
    /// recognized in-band identifier under a 2xx status.
    #[error("{0}")]
    Api(ApiError),

    /// A response classified as success did not match the expected response
    /// shape. Indicates client/provider contract drift; not retryable.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// The recognized provider identifier, when this is an API error.
    pub fn error_id(&self) -> Option<ErrorId> {
        match self {
            Error::Api(api) => api.error_id(),
            _ => None,
        }
    }

    /// The in-band error payload, when this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message_when_present() {
        let err = ApiError {
            id: "image_missing".into(),
            message: Some("Missing URL in request body".into()),
            detail: None,
        };
        assert_eq!(err.to_string(), "image_missing: Missing URL in request body");
    }

    #[test]
    fn display_is_bare_id_without_message() {
        let err = ApiError {
            id: "sys_exception".into(),
            message: None,
            detail: None,
        };
        assert_eq!(err.to_string(), "sys_exception");
    }

    #[test]
    fn envelope_decodes_partial_payloads() {
        let env: ErrorEnvelope =
            serde_json::from_str(r#"{"error":{"id":"pdf_encrypted"}}"#).unwrap();
        assert_eq!(env.error.id, "pdf_encrypted");
        assert_eq!(env.error.error_id(), Some(ErrorId::PdfEncrypted));
        assert!(env.error.message.is_none());
    }

    #[test]
    fn status_fallback_recovers_known_transport_ids() {
        assert_eq!(ApiError::from_status(401).id, "http_unauthorized");
        assert_eq!(ApiError::from_status(429).id, "http_max_requests");
        assert_eq!(ApiError::from_status(500).id, "http_error");
    }
}
