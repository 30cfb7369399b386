//! Batch submission and retrieval shapes
//! (`POST v3/batch`, `GET v3/batch/:batch_id`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::encode::JsonBody;

/// Request body for batch submission.
///
/// The body may contain any single-image parameters except `src`, and must
/// map result keys to image URLs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchRequest {
    /// Result key to image URL.
    pub urls: HashMap<String, String>,
    /// OCR behavior override, e.g. `"text"` for full text OCR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_behavior: Option<String>,
}

impl JsonBody for BatchRequest {}

/// Response from batch submission.
///
/// Only a batch ID is returned. Callbacks are not guaranteed to run; poll
/// `GET v3/batch/:id` with the same credentials after an appropriate delay
/// (roughly one second per five images).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchResponse {
    pub batch_id: String,
}

/// Response from batch retrieval.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetBatchResponse {
    /// Result keys from the original submission that have completed so far.
    #[serde(default)]
    pub keys: Vec<String>,
    /// Per-key recognition results; shapes match the image response.
    #[serde(default)]
    pub results: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_urls_map() {
        let mut urls = HashMap::new();
        urls.insert("eq1".to_string(), "https://example.com/1.png".to_string());
        let body = serde_json::to_value(BatchRequest {
            urls,
            ocr_behavior: None,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"urls": {"eq1": "https://example.com/1.png"}})
        );
    }

    #[test]
    fn get_batch_response_decodes_keys_and_results() {
        let raw = serde_json::json!({"keys": ["k1"], "results": {"k1": {}}});
        let resp: GetBatchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.keys, ["k1"]);
        assert!(resp.results.contains_key("k1"));
    }
}
