//! OCR result search shapes (`GET v3/ocr-results`).
//!
//! The search filter rides as query parameters; every field is optional and
//! only set fields reach the wire.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::encode::{Encode, WirePayload};
use crate::Result;

/// Search filter for past OCR results.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Page number for pagination (starts from 1).
    pub page: Option<u32>,
    /// Number of results per page.
    pub per_page: Option<u32>,
    /// Starting datetime (inclusive).
    pub from_date: Option<DateTime<Utc>>,
    /// Ending datetime (exclusive).
    pub to_date: Option<DateTime<Utc>>,
    /// Filter by app ID.
    pub app_id: Option<String>,
    /// Filter results containing this text in `result.text`.
    pub text: Option<String>,
    /// Filter results containing this text in `result.text_display`.
    pub text_display: Option<String>,
    /// Filter results containing this text in `result.latex_styled`.
    pub latex_styled: Option<String>,
    /// Filter by tags.
    pub tags: Vec<String>,
    pub is_printed: Option<bool>,
    pub is_handwritten: Option<bool>,
    pub contains_table: Option<bool>,
    pub contains_chemistry: Option<bool>,
    pub contains_diagram: Option<bool>,
    pub contains_triangle: Option<bool>,
}

impl Encode for SearchRequest {
    fn encode(&self) -> Result<WirePayload> {
        let mut query: Vec<(&'static str, String)> = Vec::new();

        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if let Some(from_date) = self.from_date {
            query.push(("from_date", rfc3339(from_date)));
        }
        if let Some(to_date) = self.to_date {
            query.push(("to_date", rfc3339(to_date)));
        }
        if let Some(app_id) = &self.app_id {
            query.push(("app_id", app_id.clone()));
        }
        if let Some(text) = &self.text {
            query.push(("text", text.clone()));
        }
        if let Some(text_display) = &self.text_display {
            query.push(("text_display", text_display.clone()));
        }
        if let Some(latex_styled) = &self.latex_styled {
            query.push(("latex_styled", latex_styled.clone()));
        }
        for tag in &self.tags {
            query.push(("tags", tag.clone()));
        }
        push_flag(&mut query, "is_printed", self.is_printed);
        push_flag(&mut query, "is_handwritten", self.is_handwritten);
        push_flag(&mut query, "contains_table", self.contains_table);
        push_flag(&mut query, "contains_chemistry", self.contains_chemistry);
        push_flag(&mut query, "contains_diagram", self.contains_diagram);
        push_flag(&mut query, "contains_triangle", self.contains_triangle);

        Ok(WirePayload { query, body: None })
    }
}

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn push_flag(query: &mut Vec<(&'static str, String)>, name: &'static str, flag: Option<bool>) {
    if let Some(flag) = flag {
        query.push((name, flag.to_string()));
    }
}

/// Top-level response from the OCR results endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub ocr_results: Vec<OcrResult>,
}

/// A single recorded OCR result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OcrResult {
    /// ISO timestamp of the recorded result.
    #[serde(default)]
    pub timestamp: String,
    /// Endpoint used for the upload (e.g. `/v3/text`, `/v3/strokes`).
    #[serde(default)]
    pub endpoint: String,
    /// Seconds between receipt and the recorded timestamp.
    #[serde(default)]
    pub duration: f64,
    /// The original request arguments.
    #[serde(default)]
    pub request_args: Option<RequestArgs>,
    /// The recorded result body.
    #[serde(default)]
    pub result: Option<ResultBody>,
    /// Content detections for the request.
    #[serde(default)]
    pub detections: Option<Detections>,
}

/// Original request arguments recorded with a result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestArgs {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub formats: Vec<String>,
}

/// Recorded recognition outcome.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultBody {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub is_printed: bool,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub is_handwritten: bool,
    #[serde(default)]
    pub confidence_rate: f64,
    #[serde(default)]
    pub auto_rotate_degrees: i32,
    #[serde(default)]
    pub auto_rotate_confidence: f64,
    #[serde(default)]
    pub version: String,
}

/// Content-type detection flags recorded with a result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Detections {
    #[serde(default)]
    pub contains_chemistry: bool,
    #[serde(default)]
    pub contains_diagram: bool,
    #[serde(default)]
    pub is_handwritten: bool,
    #[serde(default)]
    pub is_printed: bool,
    #[serde(default)]
    pub contains_table: bool,
    #[serde(default)]
    pub contains_triangle: bool,
}
