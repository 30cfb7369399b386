//! Temporary app-token shapes (`POST v3/app-tokens`).
//!
//! Tokens let client-side code call the recognition endpoints without
//! embedding the account credentials.

use serde::{Deserialize, Serialize};

use crate::encode::{Encode, WirePayload};
use crate::Result;

/// Minimum accepted token lifetime, in seconds.
pub const MIN_TOKEN_EXPIRES_SECS: i64 = 30;
/// Maximum lifetime for a standalone token (12 hours).
pub const MAX_TOKEN_EXPIRES_SECS: i64 = 43_200;
/// Maximum lifetime when a strokes session is requested (5 minutes).
pub const MAX_STROKES_SESSION_EXPIRES_SECS: i64 = 300;
/// Default lifetime (5 minutes).
pub const DEFAULT_TOKEN_EXPIRES_SECS: i64 = 300;

/// Request parameters for minting a temporary app token.
///
/// The expiry is clamped to the provider's accepted range before the request
/// is encoded: 30..=43200 seconds for a standalone token, 30..=300 seconds
/// when `include_strokes_session_id` is set.
#[derive(Debug, Clone, Serialize)]
pub struct AppTokenRequest {
    /// Ask for a `strokes_session_id` for live-update drawing.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_strokes_session_id: bool,
    /// Requested token lifetime in seconds.
    pub expires: i64,
}

impl Default for AppTokenRequest {
    fn default() -> Self {
        Self {
            include_strokes_session_id: false,
            expires: DEFAULT_TOKEN_EXPIRES_SECS,
        }
    }
}

impl AppTokenRequest {
    /// The request with its expiry clamped to the provider's accepted range.
    pub fn normalized(&self) -> Self {
        let max = if self.include_strokes_session_id {
            MAX_STROKES_SESSION_EXPIRES_SECS
        } else {
            MAX_TOKEN_EXPIRES_SECS
        };
        Self {
            include_strokes_session_id: self.include_strokes_session_id,
            expires: self.expires.clamp(MIN_TOKEN_EXPIRES_SECS, max),
        }
    }
}

// Clamping happens at the encoding boundary, so the value on the wire is
// always in range no matter what the caller constructed.
impl Encode for AppTokenRequest {
    fn encode(&self) -> Result<WirePayload> {
        let body = serde_json::to_value(self.normalized())
            .map_err(|e| crate::Error::InvalidRequest(format!("unencodable request body: {e}")))?;
        Ok(WirePayload {
            query: Vec::new(),
            body: Some(body),
        })
    }
}

/// Response from minting a temporary app token.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppTokenResponse {
    /// Token to use in place of credentials on recognition requests.
    #[serde(default)]
    pub app_token: String,
    /// Present only when a strokes session was requested.
    #[serde(default)]
    pub strokes_session_id: Option<String>,
    /// Expiry in Unix time (seconds).
    #[serde(default)]
    pub app_token_expires_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_expiry_is_five_minutes() {
        assert_eq!(AppTokenRequest::default().expires, 300);
    }

    #[test]
    fn standalone_token_clamps_to_twelve_hours() {
        let request = AppTokenRequest {
            include_strokes_session_id: false,
            expires: 100_000,
        };
        assert_eq!(request.normalized().expires, 43_200);

        let request = AppTokenRequest {
            include_strokes_session_id: false,
            expires: 5,
        };
        assert_eq!(request.normalized().expires, 30);
    }

    #[test]
    fn strokes_session_clamps_to_five_minutes() {
        let request = AppTokenRequest {
            include_strokes_session_id: true,
            expires: 500,
        };
        assert_eq!(request.normalized().expires, 300);
    }

    #[test]
    fn encoded_body_carries_the_clamped_value() {
        let request = AppTokenRequest {
            include_strokes_session_id: true,
            expires: 500,
        };
        let payload = request.encode().unwrap();
        assert_eq!(
            payload.body.unwrap(),
            serde_json::json!({"include_strokes_session_id": true, "expires": 300})
        );
    }

    #[test]
    fn in_range_expiry_is_untouched() {
        let request = AppTokenRequest {
            include_strokes_session_id: false,
            expires: 600,
        };
        assert_eq!(request.normalized().expires, 600);
    }
}
