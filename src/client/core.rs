//! The client facade: one method per logical operation.
//!
//! No business logic lives here. Each method resolves its endpoint descriptor
//! and hands off to the generic dispatcher, optionally supplying a path
//! parameter (batch and conversion tracking IDs).

use std::env;

use url::Url;

use super::builder::ClientBuilder;
use crate::types::{
    AppTokenRequest, AppTokenResponse, BatchRequest, BatchResponse, ConversionResult,
    DocumentRequest, DocumentResponse, GetBatchResponse, ImageRequest, ImageResponse,
    SearchRequest, SearchResponse, StrokesRequest, StrokesResponse, UsageRequest, UsageResponse,
};
use crate::{endpoint, Error, Result};

/// Mathpix API client.
///
/// Cheap to clone is not a goal; share one instance instead. The underlying
/// transport is a connection pool safe for concurrent use, and each call
/// allocates its own request and response buffer, so concurrent calls are
/// independent.
#[derive(Debug)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) app_key: String,
    pub(crate) app_id: String,
}

impl Client {
    /// Client with default transport and the hosted API base URL.
    pub fn new(app_key: impl Into<String>, app_id: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(app_key, app_id).build()
    }

    /// Builder for custom configuration.
    pub fn builder(app_key: impl Into<String>, app_id: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(app_key, app_id)
    }

    /// Client with credentials from `MATHPIX_APP_KEY` and `MATHPIX_APP_ID`.
    pub fn from_env() -> Result<Self> {
        let app_key = env::var("MATHPIX_APP_KEY")
            .map_err(|_| Error::Config("MATHPIX_APP_KEY is not set".into()))?;
        let app_id = env::var("MATHPIX_APP_ID")
            .map_err(|_| Error::Config("MATHPIX_APP_ID is not set".into()))?;
        ClientBuilder::new(app_key, app_id).build()
    }

    pub(crate) fn from_parts(
        http: reqwest::Client,
        base_url: Url,
        app_key: String,
        app_id: String,
    ) -> Self {
        Self {
            http,
            base_url,
            app_key,
            app_id,
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submit an image for recognition (`POST v3/image`).
    pub async fn image(&self, request: &ImageRequest) -> Result<ImageResponse> {
        self.execute(endpoint::IMAGE, request, None).await
    }

    /// Submit a PDF or other document for conversion (`POST v3/pdf`).
    ///
    /// Conversion is asynchronous: the response carries a tracking ID to poll
    /// via [`Client::conversion_status`].
    pub async fn pdf(&self, request: &DocumentRequest) -> Result<DocumentResponse> {
        self.execute(endpoint::PDF, request, None).await
    }

    /// Poll the status of an asynchronous conversion (`GET v3/status/:id`).
    pub async fn conversion_status(&self, pdf_id: &str) -> Result<ConversionResult> {
        self.execute(endpoint::CONVERSION_STATUS, &(), Some(pdf_id))
            .await
    }

    /// Submit a batch of images (`POST v3/batch`).
    ///
    /// The response carries only a batch ID. There is no completion callback
    /// guarantee; poll [`Client::get_batch`] after an appropriate delay
    /// (roughly one second per five images).
    pub async fn batch(&self, request: &BatchRequest) -> Result<BatchResponse> {
        self.execute(endpoint::BATCH, request, None).await
    }

    /// Fetch the results of a submitted batch (`GET v3/batch/:id`).
    pub async fn get_batch(&self, batch_id: &str) -> Result<GetBatchResponse> {
        self.execute(endpoint::GET_BATCH, &(), Some(batch_id)).await
    }

    /// Submit handwriting stroke data for recognition (`POST v3/strokes`).
    pub async fn strokes(&self, request: &StrokesRequest) -> Result<StrokesResponse> {
        self.execute(endpoint::STROKES, request, None).await
    }

    /// Search past OCR results (`GET v3/ocr-results`).
    pub async fn search_results(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.execute(endpoint::OCR_RESULTS, request, None).await
    }

    /// Mint a temporary app token (`POST v3/app-tokens`).
    ///
    /// The request's expiry is clamped to the provider's accepted range
    /// before it is sent; see [`AppTokenRequest`].
    pub async fn app_token(&self, request: &AppTokenRequest) -> Result<AppTokenResponse> {
        self.execute(endpoint::APP_TOKENS, request, None).await
    }

    /// Query OCR usage (`POST v3/usage`).
    ///
    /// `group_by` and `timespan` are required; leaving either empty fails
    /// before any network call.
    pub async fn usage(&self, request: &UsageRequest) -> Result<UsageResponse> {
        self.execute(endpoint::USAGE, request, None).await
    }
}
