//! The dispatcher: one generic code path from request value to typed response.
//!
//! Exactly one network round trip per call, no internal retries. The response
//! body is buffered once so the same bytes can be inspected twice: first by
//! the classifier, then — only on success — by the response decoder.

use std::time::Instant;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use super::classify::{classify, Outcome};
use super::core::Client;
use crate::encode::Encode;
use crate::endpoint::Endpoint;
use crate::{Error, Result};

const APP_KEY_HEADER: &str = "app_key";
const APP_ID_HEADER: &str = "app_id";

impl Client {
    /// Executes one call against `endpoint`.
    ///
    /// `path_param` is appended as an extra path segment (tracking and batch
    /// IDs); it is path-joined, never string-concatenated.
    pub(crate) async fn execute<Req, Resp>(
        &self,
        endpoint: Endpoint<Req, Resp>,
        request: &Req,
        path_param: Option<&str>,
    ) -> Result<Resp>
    where
        Req: Encode,
        Resp: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint.path, path_param)?;
        let payload = request.encode()?;

        let mut builder = self.http.request(endpoint.method.clone(), url.clone());
        if !payload.query.is_empty() {
            builder = builder.query(&payload.query);
        }
        if let Some(body) = &payload.body {
            builder = builder.json(body);
        }

        let mut wire = builder.build().map_err(Error::Transport)?;
        {
            let headers = wire.headers_mut();
            // Content type defaults to JSON; encoders that set their own
            // (e.g. multipart) are respected.
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            // Authentication is owned here, unconditionally: whatever an
            // encoder may have set for these names is overwritten.
            headers.insert(APP_KEY_HEADER, header_value(APP_KEY_HEADER, &self.app_key)?);
            headers.insert(APP_ID_HEADER, header_value(APP_ID_HEADER, &self.app_id)?);
        }

        debug!(
            method = %endpoint.method,
            url = %url,
            "dispatching mathpix request"
        );

        let start = Instant::now();
        let response = self.http.execute(wire).await?;
        let status = response.status();
        // Single read into a replayable buffer; classifier and decoder both
        // inspect these bytes.
        let body: bytes::Bytes = response.bytes().await?;

        match classify(status, &body) {
            Outcome::Success => {
                debug!(
                    http_status = status.as_u16(),
                    endpoint = endpoint.path,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "mathpix request succeeded"
                );
                Ok(serde_json::from_slice(&body)?)
            }
            Outcome::Http(api) | Outcome::Api(api) => {
                info!(
                    http_status = status.as_u16(),
                    error_id = api.id.as_str(),
                    endpoint = endpoint.path,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "mathpix request failed"
                );
                Err(Error::Api(api))
            }
        }
    }

    /// Joins the base URL, endpoint path, and optional path parameter.
    pub(crate) fn endpoint_url(&self, path: &str, param: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::Config("base URL cannot carry a path".into()))?;
            segments.pop_if_empty();
            segments.extend(path.split('/'));
            if let Some(param) = param {
                if param.is_empty() {
                    return Err(Error::InvalidRequest("empty path parameter".into()));
                }
                segments.push(param);
            }
        }
        Ok(url)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Config(format!("{name} contains non-header characters")))
}

#[cfg(test)]
mod tests {
    use crate::Client;

    fn client() -> Client {
        Client::builder("key", "app").build().unwrap()
    }

    #[test]
    fn joins_path_segments_without_doubling_separators() {
        let url = client().endpoint_url("v3/image", None).unwrap();
        assert_eq!(url.as_str(), "https://api.mathpix.com/v3/image");
    }

    #[test]
    fn appends_path_parameter_as_own_segment() {
        let url = client().endpoint_url("v3/batch", Some("abc123")).unwrap();
        assert_eq!(url.as_str(), "https://api.mathpix.com/v3/batch/abc123");
    }

    #[test]
    fn path_parameter_is_percent_encoded_not_spliced() {
        let url = client().endpoint_url("v3/status", Some("a/b c")).unwrap();
        assert_eq!(url.as_str(), "https://api.mathpix.com/v3/status/a%2Fb%20c");
    }

    #[test]
    fn base_url_with_trailing_slash_joins_cleanly() {
        let client = Client::builder("key", "app")
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        let url = client.endpoint_url("v3/pdf", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v3/pdf");
    }

    #[test]
    fn empty_path_parameter_is_a_caller_error() {
        assert!(client().endpoint_url("v3/status", Some("")).is_err());
    }
}
