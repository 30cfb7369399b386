//! Response classification.
//!
//! The provider conflates two failure channels: the HTTP status line and an
//! in-band `error.id` that can arrive inside a 200 response. The body is
//! therefore peeked before the status is trusted — a 200 status is not
//! sufficient evidence of success.

use reqwest::StatusCode;

use crate::error::{ApiError, ErrorEnvelope};

/// Result of classifying one response.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// The buffered body may be decoded as the endpoint's response type.
    Success,
    /// Non-2xx status; the envelope was decoded when present.
    Http(ApiError),
    /// 2xx status but a recognized identifier in the body.
    Api(ApiError),
}

/// Classifies a response from its status code and buffered body.
///
/// Decision table, evaluated in order:
/// 1. status outside [200, 399] → [`Outcome::Http`], carrying the decoded
///    envelope or a generic status-derived error when none decodes;
/// 2. recognized `error.id` in the body → [`Outcome::Api`], regardless of the
///    2xx status;
/// 3. otherwise → [`Outcome::Success`]. Empty or unrecognized identifiers are
///    not failures.
pub(crate) fn classify(status: StatusCode, body: &[u8]) -> Outcome {
    // Speculative decode, independent of the status line. Bodies that are not
    // an error envelope (or not JSON at all) yield the empty envelope.
    let envelope: ErrorEnvelope = serde_json::from_slice(body).unwrap_or_default();
    let api = envelope.error;

    let code = status.as_u16();
    if !(200..400).contains(&code) {
        if api.id.is_empty() {
            return Outcome::Http(ApiError::from_status(code));
        }
        return Outcome::Http(api);
    }

    if api.error_id().is_some() {
        return Outcome::Api(api);
    }

    Outcome::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_id::ErrorId;

    fn body_with_id(id: &str) -> Vec<u8> {
        format!(r#"{{"error":{{"id":"{id}","message":"boom"}}}}"#).into_bytes()
    }

    #[test]
    fn every_known_id_under_200_is_an_api_error() {
        for id in ErrorId::ALL {
            let outcome = classify(StatusCode::OK, &body_with_id(id.as_str()));
            match outcome {
                Outcome::Api(api) => assert_eq!(api.error_id(), Some(id)),
                other => panic!("{id} under 200 classified as {other:?}"),
            }
        }
    }

    #[test]
    fn non_success_statuses_are_http_errors_regardless_of_body() {
        for code in [100u16, 400, 401, 403, 404, 429, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(
                matches!(classify(status, b"{}"), Outcome::Http(_)),
                "status {code} with empty body"
            );
            assert!(
                matches!(classify(status, b"not json"), Outcome::Http(_)),
                "status {code} with undecodable body"
            );
            assert!(
                matches!(
                    classify(status, &body_with_id("image_missing")),
                    Outcome::Http(_)
                ),
                "status {code} with envelope body"
            );
        }
    }

    #[test]
    fn http_error_keeps_the_decoded_envelope() {
        let outcome = classify(StatusCode::UNAUTHORIZED, &body_with_id("http_unauthorized"));
        match outcome {
            Outcome::Http(api) => {
                assert_eq!(api.error_id(), Some(ErrorId::HttpUnauthorized));
                assert_eq!(api.message.as_deref(), Some("boom"));
            }
            other => panic!("classified as {other:?}"),
        }
    }

    #[test]
    fn undecodable_envelope_falls_back_to_status_error() {
        match classify(StatusCode::TOO_MANY_REQUESTS, b"<html>slow down</html>") {
            Outcome::Http(api) => assert_eq!(api.id, "http_max_requests"),
            other => panic!("classified as {other:?}"),
        }
    }

    #[test]
    fn empty_or_unrecognized_ids_under_2xx_are_success() {
        assert!(matches!(classify(StatusCode::OK, b"{}"), Outcome::Success));
        assert!(matches!(
            classify(StatusCode::OK, br#"{"error":{"id":""}}"#),
            Outcome::Success
        ));
        assert!(matches!(
            classify(StatusCode::OK, &body_with_id("new_unknown_error")),
            Outcome::Success
        ));
        // Legitimate payloads that happen to contain an "error" string field
        // must not be false positives either.
        assert!(matches!(
            classify(StatusCode::OK, br#"{"text":"x","error":""}"#),
            Outcome::Success
        ));
    }

    #[test]
    fn redirect_range_counts_as_success_status() {
        assert!(matches!(
            classify(StatusCode::NOT_MODIFIED, b"{}"),
            Outcome::Success
        ));
    }
}
