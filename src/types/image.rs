//! Image recognition request and response shapes (`POST v3/image`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::encode::JsonBody;

/// Request body for the image endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageRequest {
    /// URL of the image to be processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Key/value pairs added to the image metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    /// Tags added to the image metadata.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

impl JsonBody for ImageRequest {}

/// Main response structure from the math recognition API.
///
/// Which sections are populated depends on the request parameters: basic text
/// and math recognition is always present, line data, word data, geometry
/// data, and alphabet detection arrive only when requested.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageResponse {
    /// Unique identifier for debugging purposes.
    #[serde(default)]
    pub request_id: Option<String>,
    /// Recognized text content in plain text format.
    #[serde(default)]
    pub text: Option<String>,
    /// Mathematical expression in LaTeX, when the image reduces to a single
    /// equation.
    #[serde(default)]
    pub latex_styled: Option<String>,
    /// Estimated probability (0-1) that the entire recognition is correct.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Estimated confidence (0-1) of output quality.
    #[serde(default)]
    pub confidence_rate: Option<f64>,
    /// Per-line analysis; present when `include_line_data` was requested.
    #[serde(default)]
    pub line_data: Vec<LineData>,
    /// Per-word analysis; present when `include_word_data` was requested.
    #[serde(default)]
    pub word_data: Vec<WordData>,
    /// The expressions in the requested alternate formats.
    #[serde(default)]
    pub data: Vec<Data>,
    /// Annotated HTML output of the recognized content.
    #[serde(default)]
    pub html: Option<String>,
    /// Writing systems found in the image.
    #[serde(default)]
    pub detected_alphabets: Option<DetectedAlphabet>,
    /// Whether printed text was detected.
    #[serde(default)]
    pub is_printed: bool,
    /// Whether handwritten content was detected.
    #[serde(default)]
    pub is_handwritten: bool,
    /// Estimated probability (0-1) that the image needs rotation.
    #[serde(default)]
    pub auto_rotate_confidence: Option<f64>,
    /// Geometric information about detected elements.
    #[serde(default)]
    pub geometry_data: Vec<GeometryData>,
    /// Suggested correction angle: 0, 90, -90, or 180.
    #[serde(default)]
    pub auto_rotate_degrees: i32,
    /// US-locale error message, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// Detailed information about any processing error.
    #[serde(default)]
    pub error_info: Option<ErrorInfo>,
    /// Opaque string tracking the recognition model; changes when training
    /// data or processing methods are updated.
    #[serde(default)]
    pub version: String,
}

/// A mathematical expression in one notation format.
#[derive(Debug, Clone, Deserialize)]
pub struct Data {
    /// Format of the expression, e.g. `"asciimath"` or `"latex"`.
    pub r#type: String,
    /// The expression in that format.
    pub value: String,
}

/// A detected line in the image.
///
/// Lines that cannot be processed have `included == false` and may carry an
/// `error_id` (`image_not_supported`, `image_max_size`, `math_confidence`,
/// `image_no_content`). The top-level text, html, and data fields can be
/// recreated by concatenating the included lines.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineData {
    /// Content type: `"text"`, `"math"`, `"table"`, `"diagram"`, `"chart"`,
    /// `"form_field"`, `"code"`, and others.
    #[serde(default)]
    pub r#type: String,
    /// Additional type information (e.g. `"chemistry"` for diagrams,
    /// `"column"` for charts, `"checkbox"` for form fields).
    #[serde(default)]
    pub subtype: Option<String>,
    /// Contour of the line as `[x, y]` pixel coordinates.
    #[serde(default)]
    pub cnt: Vec<[i32; 2]>,
    /// Whether this line is included in the top-level result.
    #[serde(default)]
    pub included: bool,
    #[serde(default)]
    pub is_printed: bool,
    #[serde(default)]
    pub is_handwritten: bool,
    /// Why the line was excluded from the final result, if it was.
    #[serde(default)]
    pub error_id: Option<String>,
    /// Recognized content in Mathpix Markdown.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub confidence_rate: Option<f64>,
    /// Whether this line follows a line ending with a hyphen.
    #[serde(default)]
    pub after_hyphen: bool,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub data: Vec<Data>,
}

/// An individual detected word; present only when `include_word_data` was
/// requested.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordData {
    /// Content type: `"text"`, `"math"`, `"table"`, `"diagram"`,
    /// `"equation_number"`.
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub subtype: Option<String>,
    /// Contour of the word as `[x, y]` pixel coordinates.
    #[serde(default)]
    pub cnt: Vec<[i32; 2]>,
    /// Recognized content in Mathpix Markdown.
    #[serde(default)]
    pub text: Option<String>,
    /// Math-mode LaTeX representation; mathematical content only.
    #[serde(default)]
    pub latex: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub confidence_rate: Option<f64>,
}

/// Writing systems found in the processed image, regardless of whether they
/// appear in the final result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectedAlphabet {
    #[serde(default)]
    pub en: bool,
    #[serde(default)]
    pub hi: bool,
    #[serde(default)]
    pub zh: bool,
    #[serde(default)]
    pub ja: bool,
    #[serde(default)]
    pub ko: bool,
    #[serde(default)]
    pub ru: bool,
    #[serde(default)]
    pub th: bool,
    #[serde(default)]
    pub ta: bool,
    #[serde(default)]
    pub te: bool,
    #[serde(default)]
    pub gu: bool,
    #[serde(default)]
    pub bn: bool,
    #[serde(default)]
    pub vi: bool,
}

/// Geometric information about elements detected in the image. Currently only
/// triangles are fully supported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeometryData {
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub shape_list: Vec<ShapeData>,
    #[serde(default)]
    pub label_list: Vec<LabelData>,
}

/// Pixel coordinates, counted from the top-left corner.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A detected geometric shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShapeData {
    /// Currently only `"triangle"`.
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub vertex_list: Vec<VertexData>,
}

/// A vertex in a geometric shape, with its connections to other vertices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VertexData {
    pub x: i32,
    pub y: i32,
    /// 0-based indices into the shape's vertex list.
    #[serde(default)]
    pub edge_list: Vec<usize>,
}

/// A text label associated with a geometric element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelData {
    #[serde(default)]
    pub position: Position,
    /// OCR-detected text content of the label.
    #[serde(default)]
    pub text: String,
    /// LaTeX representation of the label content.
    #[serde(default)]
    pub latex: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub confidence_rate: Option<f64>,
}

/// Detailed information about a processing error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorInfo {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub message: String,
    /// Any additional error-specific information.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Output-format options for image data. All options default to off.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DataOptions {
    /// Include math SVG in HTML and data formats.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_svg: bool,
    /// Include HTML for tables in HTML and data outputs.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_table_html: bool,
    /// Include math-mode LaTeX in data and HTML outputs.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_latex: bool,
    /// Include tab-separated values in data and HTML outputs (tables only).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_tsv: bool,
    /// Include asciimath in data and HTML outputs.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_asciimath: bool,
    /// Include MathML in data and HTML outputs.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_mathml: bool,
}
