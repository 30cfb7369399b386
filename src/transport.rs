//! Shared HTTP transport construction.
//!
//! The `reqwest::Client` built here is the only shared resource between
//! concurrent calls: it is configured once at client construction and is safe
//! for concurrent reuse. Per-call state (wire request, response buffer) is
//! never shared.

use std::env;
use std::time::Duration;

use reqwest::Proxy;

use crate::{Error, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const POOL_MAX_IDLE_PER_HOST: usize = 16;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Builds the shared HTTP client with production-friendly defaults.
///
/// Env overrides:
/// - `MATHPIX_HTTP_TIMEOUT_SECS` — whole-request timeout (default 30)
/// - `MATHPIX_PROXY_URL` — proxy for all requests
pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let timeout = timeout.unwrap_or_else(|| {
        let secs = env::var("MATHPIX_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    });

    let mut builder = reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)));

    if let Ok(proxy_url) = env::var("MATHPIX_PROXY_URL") {
        let proxy = Proxy::all(&proxy_url)
            .map_err(|e| Error::Config(format!("invalid MATHPIX_PROXY_URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(Error::Transport)
}
