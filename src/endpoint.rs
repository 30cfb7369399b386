//! Static endpoint descriptor registry.
//!
//! One descriptor per logical operation, binding an HTTP verb and path
//! template to its request/response type pair. Constructed once, never
//! mutated, consumed only by the client facade.

use reqwest::Method;
use std::marker::PhantomData;

use crate::types::{
    AppTokenRequest, AppTokenResponse, BatchRequest, BatchResponse, ConversionResult,
    DocumentRequest, DocumentResponse, GetBatchResponse, ImageRequest, ImageResponse,
    SearchRequest, SearchResponse, StrokesRequest, StrokesResponse, UsageRequest, UsageResponse,
};

/// Binding of one logical operation to verb, path, and its type pair.
///
/// The type parameters never hold data; they pin the request and response
/// types the dispatcher encodes and decodes for this operation.
pub struct Endpoint<Req, Resp> {
    pub(crate) method: Method,
    pub(crate) path: &'static str,
    marker: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> Endpoint<Req, Resp> {
    const fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            marker: PhantomData,
        }
    }
}

/// POST v3/image — submit an image for recognition.
pub(crate) const IMAGE: Endpoint<ImageRequest, ImageResponse> =
    Endpoint::new(Method::POST, "v3/image");

/// POST v3/pdf — submit a PDF (or other document) for conversion.
pub(crate) const PDF: Endpoint<DocumentRequest, DocumentResponse> =
    Endpoint::new(Method::POST, "v3/pdf");

/// GET v3/status/:pdf_id — poll an asynchronous conversion.
pub(crate) const CONVERSION_STATUS: Endpoint<(), ConversionResult> =
    Endpoint::new(Method::GET, "v3/status");

/// POST v3/batch — submit a batch of images.
pub(crate) const BATCH: Endpoint<BatchRequest, BatchResponse> =
    Endpoint::new(Method::POST, "v3/batch");

/// GET v3/batch/:batch_id — fetch batch results.
pub(crate) const GET_BATCH: Endpoint<(), GetBatchResponse> =
    Endpoint::new(Method::GET, "v3/batch");

/// POST v3/strokes — submit handwriting stroke data.
pub(crate) const STROKES: Endpoint<StrokesRequest, StrokesResponse> =
    Endpoint::new(Method::POST, "v3/strokes");

/// GET v3/ocr-results — search past OCR results.
pub(crate) const OCR_RESULTS: Endpoint<SearchRequest, SearchResponse> =
    Endpoint::new(Method::GET, "v3/ocr-results");

/// POST v3/app-tokens — mint a temporary client token.
pub(crate) const APP_TOKENS: Endpoint<AppTokenRequest, AppTokenResponse> =
    Endpoint::new(Method::POST, "v3/app-tokens");

/// POST v3/usage — query OCR usage.
pub(crate) const USAGE: Endpoint<UsageRequest, UsageResponse> =
    Endpoint::new(Method::POST, "v3/usage");
