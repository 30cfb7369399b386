//! Builder for creating clients with custom configuration.
//!
//! Keep this surface area small and predictable: credentials, base URL,
//! timeout, or a caller-supplied `reqwest::Client`.

use std::time::Duration;

use url::Url;

use super::core::Client;
use crate::{transport, Error, Result, DEFAULT_BASE_URL};

pub struct ClientBuilder {
    app_key: String,
    app_id: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new(app_key: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_id: app_id.into(),
            base_url: None,
            timeout: None,
            http: None,
        }
    }

    /// Override the base URL (primarily for testing with mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whole-request timeout for the shared transport.
    ///
    /// Ignored when a custom [`reqwest::Client`] is supplied; configure the
    /// timeout on that client instead.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supply a pre-configured transport (proxies, TLS settings, pools).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        if self.app_key.is_empty() {
            return Err(Error::Config("app_key must not be empty".into()));
        }
        if self.app_id.is_empty() {
            return Err(Error::Config("app_id must not be empty".into()));
        }

        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw).map_err(|e| Error::Config(format!("invalid base URL `{raw}`: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("base URL `{raw}` cannot carry a path")));
        }

        let http = match self.http {
            Some(http) => http,
            None => transport::build_http_client(self.timeout)?,
        };

        Ok(Client::from_parts(http, base_url, self.app_key, self.app_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_credentials() {
        assert!(matches!(
            ClientBuilder::new("", "app").build(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ClientBuilder::new("key", "").build(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = ClientBuilder::new("key", "app")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn default_base_url_is_the_hosted_api() {
        let client = ClientBuilder::new("key", "app").build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.mathpix.com/");
    }
}
