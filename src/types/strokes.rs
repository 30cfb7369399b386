//! Handwriting stroke recognition shapes (`POST v3/strokes`).

use serde::{Deserialize, Serialize};

use crate::encode::JsonBody;

/// Request body for the strokes endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StrokesRequest {
    pub strokes: StrokesData,
}

impl StrokesRequest {
    /// Request from per-stroke coordinate arrays; `x[i]` and `y[i]` describe
    /// stroke `i`.
    pub fn from_coordinates(x: Vec<Vec<i64>>, y: Vec<Vec<i64>>) -> Self {
        Self {
            strokes: StrokesData {
                strokes: StrokeCoordinates { x, y },
            },
        }
    }
}

impl JsonBody for StrokesRequest {}

/// Container for the stroke coordinates (the provider nests this twice).
#[derive(Debug, Clone, Default, Serialize)]
pub struct StrokesData {
    pub strokes: StrokeCoordinates,
}

/// Per-stroke coordinate arrays; each inner array is one stroke.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StrokeCoordinates {
    pub x: Vec<Vec<i64>>,
    pub y: Vec<Vec<i64>>,
}

/// Response from the strokes endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrokesResponse {
    /// Unique identifier for the API request.
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub is_printed: bool,
    #[serde(default)]
    pub is_handwritten: bool,
    /// Confidence of the rotation detection.
    #[serde(default)]
    pub auto_rotate_confidence: Option<f64>,
    /// Detected rotation angle.
    #[serde(default)]
    pub auto_rotate_degrees: i32,
    /// Estimated probability of fully correct recognition.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Estimated confidence of output quality.
    #[serde(default)]
    pub confidence_rate: Option<f64>,
    /// Recognized LaTeX with styling.
    #[serde(default)]
    pub latex_styled: Option<String>,
    /// Recognized text with LaTeX delimiters.
    #[serde(default)]
    pub text: Option<String>,
    /// Recognition model version.
    #[serde(default)]
    pub version: String,
    /// Annotated HTML output, when requested.
    #[serde(default)]
    pub html: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_nests_coordinates_the_way_the_wire_expects() {
        let request = StrokesRequest::from_coordinates(
            vec![vec![10, 12, 14]],
            vec![vec![20, 22, 24]],
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "strokes": {"strokes": {"x": [[10, 12, 14]], "y": [[20, 22, 24]]}}
            })
        );
    }
}
