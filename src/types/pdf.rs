//! PDF conversion request, response, and polling shapes
//! (`POST v3/pdf`, `GET v3/status/:pdf_id`).
//!
//! Conversion is a two-call protocol: submit the document, then poll the
//! tracking ID until the per-format status reaches `completed` or `error`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::encode::JsonBody;

/// Request parameters for processing a PDF (or other document) by URL.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentRequest {
    /// HTTP URL where the file can be downloaded from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Enable streaming of PDF pages.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub streaming: bool,
    /// Key/value object for additional information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    /// Which alphabets are allowed in the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabets_allowed: Option<AlphabetsAllowed>,
    /// Remove extra white space from equations.
    #[serde(rename = "rm_spaces", skip_serializing_if = "Option::is_none")]
    pub remove_spaces: Option<bool>,
    /// Remove font commands from equations.
    #[serde(rename = "rm_fonts", skip_serializing_if = "Option::is_none")]
    pub remove_fonts: Option<bool>,
    /// Use aligned, gathered, or cases instead of the array environment.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub idiomatic_eqn_arrays: bool,
    /// Include equation number tags.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_equation_tags: bool,
    /// Experimental chemistry diagram OCR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_smiles: Option<bool>,
    /// Return image crops for chemical diagrams.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_chemistry_as_image: bool,
    /// Treat numbers as math always.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub numbers_default_to_math: bool,
    /// Begin/end inline math delimiters.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub math_inline_delimiters: Vec<String>,
    /// Begin/end display math delimiters.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub math_display_delimiters: Vec<String>,
    /// Page ranges as a comma-separated string.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub page_ranges: String,
    /// Predictive mode for English handwriting.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub enable_spell_check: bool,
    /// Automatic section numbering.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub auto_number_sections: bool,
    /// Remove existing section numbering.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub remove_section_numbering: bool,
    /// Keep existing section numbering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_section_numbering: Option<bool>,
    /// Advanced table processing.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub enable_tables_fallback: bool,
    /// Unicode punctuation width control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullwidth_punctuation: Option<bool>,
    /// Output formats generated from the Mathpix Markdown.
    pub conversion_formats: ConversionFormats,
}

impl JsonBody for DocumentRequest {}

/// Response from the PDF submission endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentResponse {
    /// Tracking ID to get status and result.
    #[serde(default)]
    pub pdf_id: String,
    /// US-locale error message, if present.
    #[serde(default)]
    pub error: Option<String>,
    /// Detailed error information.
    #[serde(default)]
    pub error_info: Option<HashMap<String, serde_json::Value>>,
}

/// Which alphabets are allowed in the output.
///
/// By default all alphabets are allowed; disabling one means mapping its code
/// (e.g. `"hi"`, `"ru"`) to `false`. Mapping a code to `true` is the same as
/// omitting it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlphabetsAllowed {
    /// Allowed format types.
    pub formats: Vec<String>,
    /// Per-alphabet enablement map.
    pub alphabets_allowed: HashMap<String, bool>,
}

/// Output formats requested from the conversion pipeline.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ConversionFormats {
    /// Mathpix Markdown.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mmd: bool,
    /// Standard Markdown.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub md: bool,
    /// Microsoft Word.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub docx: bool,
    /// LaTeX with images, zipped.
    #[serde(rename = "tex.zip", skip_serializing_if = "std::ops::Not::not")]
    pub tex_zip: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub html: bool,
    /// PDF rendered from HTML.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub pdf_html: bool,
    /// PDF with selectable LaTeX equations.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub pdf_latex: bool,
}

/// Lifecycle of one requested conversion format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStatusKind {
    Processing,
    Completed,
    Error,
}

/// Status of a single conversion format.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionStatus {
    pub status: ConversionStatusKind,
}

/// Response from the conversion status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionResult {
    /// Overall document status.
    pub status: ConversionStatusKind,
    /// Per-format status, keyed by format name (`"mmd"`, `"docx"`, …).
    #[serde(default)]
    pub conversion_status: HashMap<String, ConversionStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_serializes_minimal_body() {
        let body = serde_json::to_value(DocumentRequest::default()).unwrap();
        assert_eq!(body, serde_json::json!({"conversion_formats": {}}));
    }

    #[test]
    fn conversion_formats_use_wire_names() {
        let request = DocumentRequest {
            url: Some("https://example.com/paper.pdf".into()),
            conversion_formats: ConversionFormats {
                docx: true,
                tex_zip: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body["conversion_formats"],
            serde_json::json!({"docx": true, "tex.zip": true})
        );
    }

    #[test]
    fn status_response_decodes_per_format_map() {
        let raw = serde_json::json!({
            "status": "completed",
            "conversion_status": {
                "docx": {"status": "completed"},
                "pdf_latex": {"status": "processing"}
            }
        });
        let result: ConversionResult = serde_json::from_value(raw).unwrap();
        assert_eq!(result.status, ConversionStatusKind::Completed);
        assert_eq!(
            result.conversion_status["pdf_latex"].status,
            ConversionStatusKind::Processing
        );
    }
}
