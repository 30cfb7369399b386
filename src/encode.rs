//! Wire-encoding contract for request values.
//!
//! Each request type declares how its fields reach the wire: as the entire
//! serialized JSON body, or as individual query parameters (optionally
//! required). The dispatcher is generic over this contract, so no endpoint
//! needs bespoke request-building code. Encoding performs no I/O; a caller
//! error here fails the call before any network traffic.

use serde::Serialize;

use crate::{Error, Result};

/// Wire-level fragments produced from one request value.
///
/// Built once per call, consumed by the dispatcher, never retained.
#[derive(Debug, Default)]
pub struct WirePayload {
    /// Query parameters appended to the endpoint URL.
    pub query: Vec<(&'static str, String)>,
    /// JSON request body, when the request serializes as a body.
    pub body: Option<serde_json::Value>,
}

impl WirePayload {
    /// Payload with no query parameters and no body (parameterless GETs).
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Declares how a request value is placed on the wire.
pub trait Encode {
    fn encode(&self) -> Result<WirePayload>;
}

/// Marker for request types whose entire value serializes as the JSON body.
///
/// The blanket [`Encode`] impl below covers every such type; query-parameter
/// requests implement [`Encode`] directly instead.
pub trait JsonBody: Serialize {}

impl<T: JsonBody> Encode for T {
    fn encode(&self) -> Result<WirePayload> {
        let body = serde_json::to_value(self)
            .map_err(|e| Error::InvalidRequest(format!("unencodable request body: {e}")))?;
        Ok(WirePayload {
            query: Vec::new(),
            body: Some(body),
        })
    }
}

/// Empty request for endpoints that take only a path parameter.
impl Encode for () {
    fn encode(&self) -> Result<WirePayload> {
        Ok(WirePayload::empty())
    }
}

/// Builds a mandatory query parameter.
///
/// An empty value is a caller error surfaced before any network call.
pub(crate) fn require(name: &'static str, value: &str) -> Result<(&'static str, String)> {
    if value.is_empty() {
        return Err(Error::InvalidRequest(format!(
            "missing required query parameter `{name}`"
        )));
    }
    Ok((name, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Probe {
        src: &'static str,
    }
    impl JsonBody for Probe {}

    #[test]
    fn json_body_types_serialize_whole() {
        let payload = Probe { src: "https://example.com/x.png" }.encode().unwrap();
        assert!(payload.query.is_empty());
        assert_eq!(
            payload.body.unwrap(),
            serde_json::json!({"src": "https://example.com/x.png"})
        );
    }

    #[test]
    fn unit_request_encodes_empty() {
        let payload = ().encode().unwrap();
        assert!(payload.query.is_empty());
        assert!(payload.body.is_none());
    }

    #[test]
    fn required_param_rejects_empty_value() {
        let err = require("group_by", "").unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert!(err.to_string().contains("group_by"));

        let (name, value) = require("group_by", "usage_type").unwrap();
        assert_eq!((name, value.as_str()), ("group_by", "usage_type"));
    }
}
