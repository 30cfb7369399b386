//! The provider's known in-band error identifiers.
//!
//! Mathpix signals domain-level failures through an `error.id` field in the
//! response body rather than through the HTTP status line. This module defines
//! the fixed identifier set the classifier recognizes.
//!
//! ## Identifier Categories
//!
//! | Prefix    | Description                                  |
//! |-----------|----------------------------------------------|
//! | `http_`   | Transport-level auth and rate-limit failures |
//! | `json_`   | Malformed request JSON                       |
//! | `image_`  | Image content and decoding failures          |
//! | `strokes_`| Handwriting stroke data failures             |
//! | `opts_`   | Request option validation failures           |
//! | `pdf_`    | PDF content and tracking-ID failures         |
//! | `math_`   | Recognition confidence failures              |
//! | `batch_` / `sys_` | Batch lookup and server-side failures |
//!
//! ## Example
//!
//! ```rust
//! use mathpix_rs::ErrorId;
//!
//! let id = ErrorId::from_wire("http_max_requests").unwrap();
//! assert_eq!(id.http_status(), 429);
//! assert!(id.retryable());
//! ```

use std::fmt;

/// A recognized provider error identifier.
///
/// An identifier appearing in a response body always overrides an
/// apparently-successful HTTP status; an empty or unrecognized identifier is
/// never treated as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorId {
    /// Invalid credentials (HTTP 401)
    HttpUnauthorized,
    /// Too many requests (HTTP 429)
    HttpMaxRequests,
    /// JSON syntax error in the request body
    JsonSyntax,
    /// Missing URL in request body
    ImageMissing,
    /// Error downloading the image
    ImageDownloadError,
    /// Cannot decode the image data
    ImageDecodeError,
    /// No content found in the image
    ImageNoContent,
    /// Image is neither math nor text
    ImageNotSupported,
    /// Image too large to process
    ImageMaxSize,
    /// Missing strokes in request body
    StrokesMissing,
    /// Incorrect JSON or strokes format
    StrokesSyntaxError,
    /// No content found in the strokes
    StrokesNoContent,
    /// Bad callback field(s)
    OptsBadCallback,
    /// Unknown ocr option(s)
    OptsUnknownOcr,
    /// Unknown format option(s)
    OptsUnknownFormat,
    /// Option must be a number
    OptsNumberRequired,
    /// Option value not in the accepted range
    OptsValueOutOfRange,
    /// PDF is encrypted and not readable
    PdfEncrypted,
    /// PDF tracking ID expired or invalid
    PdfUnknownId,
    /// Request sent without a url field
    PdfMissing,
    /// PDF exceeds the maximum page limit
    PdfPageLimitExceeded,
    /// Recognition confidence too low
    MathConfidence,
    /// Unrecognized math
    MathSyntax,
    /// Unknown batch id
    BatchUnknownId,
    /// Server error
    SysException,
    /// Max request size exceeded (5mb for images, 512kb for strokes)
    SysRequestTooLarge,
}

impl ErrorId {
    /// Returns the wire representation (e.g. `"image_missing"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HttpUnauthorized => "http_unauthorized",
            Self::HttpMaxRequests => "http_max_requests",
            Self::JsonSyntax => "json_syntax",
            Self::ImageMissing => "image_missing",
            Self::ImageDownloadError => "image_download_error",
            Self::ImageDecodeError => "image_decode_error",
            Self::ImageNoContent => "image_no_content",
            Self::ImageNotSupported => "image_not_supported",
            Self::ImageMaxSize => "image_max_size",
            Self::StrokesMissing => "strokes_missing",
            Self::StrokesSyntaxError => "strokes_syntax_error",
            Self::StrokesNoContent => "strokes_no_content",
            Self::OptsBadCallback => "opts_bad_callback",
            Self::OptsUnknownOcr => "opts_unknown_ocr",
            Self::OptsUnknownFormat => "opts_unknown_format",
            Self::OptsNumberRequired => "opts_number_required",
            Self::OptsValueOutOfRange => "opts_value_out_of_range",
            Self::PdfEncrypted => "pdf_encrypted",
            Self::PdfUnknownId => "pdf_unknown_id",
            Self::PdfMissing => "pdf_missing",
            Self::PdfPageLimitExceeded => "pdf_page_limit_exceeded",
            Self::MathConfidence => "math_confidence",
            Self::MathSyntax => "math_syntax",
            Self::BatchUnknownId => "batch_unknown_id",
            Self::SysException => "sys_exception",
            Self::SysRequestTooLarge => "sys_request_too_large",
        }
    }

    /// Parses a wire identifier against the known set.
    ///
    /// Returns `None` for empty or unrecognized identifiers, which must not be
    /// treated as failures (legitimate payloads can contain an empty error
    /// object).
    pub fn from_wire(id: &str) -> Option<Self> {
        let id = match id {
            "http_unauthorized" => Self::HttpUnauthorized,
            "http_max_requests" => Self::HttpMaxRequests,
            "json_syntax" => Self::JsonSyntax,
            "image_missing" => Self::ImageMissing,
            "image_download_error" => Self::ImageDownloadError,
            "image_decode_error" => Self::ImageDecodeError,
            "image_no_content" => Self::ImageNoContent,
            "image_not_supported" => Self::ImageNotSupported,
            "image_max_size" => Self::ImageMaxSize,
            "strokes_missing" => Self::StrokesMissing,
            "strokes_syntax_error" => Self::StrokesSyntaxError,
            "strokes_no_content" => Self::StrokesNoContent,
            "opts_bad_callback" => Self::OptsBadCallback,
            "opts_unknown_ocr" => Self::OptsUnknownOcr,
            "opts_unknown_format" => Self::OptsUnknownFormat,
            "opts_number_required" => Self::OptsNumberRequired,
            "opts_value_out_of_range" => Self::OptsValueOutOfRange,
            "pdf_encrypted" => Self::PdfEncrypted,
            "pdf_unknown_id" => Self::PdfUnknownId,
            "pdf_missing" => Self::PdfMissing,
            "pdf_page_limit_exceeded" => Self::PdfPageLimitExceeded,
            "math_confidence" => Self::MathConfidence,
            "math_syntax" => Self::MathSyntax,
            "batch_unknown_id" => Self::BatchUnknownId,
            "sys_exception" => Self::SysException,
            "sys_request_too_large" => Self::SysRequestTooLarge,
            _ => return None,
        };
        Some(id)
    }

    /// HTTP-equivalent status for this identifier.
    ///
    /// The provider only uses the HTTP layer for auth and rate limiting; every
    /// other identifier arrives under a 200 status. Informational only.
    #[inline]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::HttpUnauthorized => 401,
            Self::HttpMaxRequests => 429,
            _ => 200,
        }
    }

    /// Whether retrying the same call can plausibly succeed.
    ///
    /// Guidance only; the client never retries internally.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::HttpMaxRequests | Self::SysException)
    }

    /// All known identifiers, in wire order.
    pub const ALL: [ErrorId; 26] = [
        Self::HttpUnauthorized,
        Self::HttpMaxRequests,
        Self::JsonSyntax,
        Self::ImageMissing,
        Self::ImageDownloadError,
        Self::ImageDecodeError,
        Self::ImageNoContent,
        Self::ImageNotSupported,
        Self::ImageMaxSize,
        Self::StrokesMissing,
        Self::StrokesSyntaxError,
        Self::StrokesNoContent,
        Self::OptsBadCallback,
        Self::OptsUnknownOcr,
        Self::OptsUnknownFormat,
        Self::OptsNumberRequired,
        Self::OptsValueOutOfRange,
        Self::PdfEncrypted,
        Self::PdfUnknownId,
        Self::PdfMissing,
        Self::PdfPageLimitExceeded,
        Self::MathConfidence,
        Self::MathSyntax,
        Self::BatchUnknownId,
        Self::SysException,
        Self::SysRequestTooLarge,
    ];
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip_for_all_ids() {
        for id in ErrorId::ALL {
            assert_eq!(ErrorId::from_wire(id.as_str()), Some(id));
        }
    }

    #[test]
    fn unknown_and_empty_ids_do_not_parse() {
        assert_eq!(ErrorId::from_wire(""), None);
        assert_eq!(ErrorId::from_wire("totally_new_error"), None);
        assert_eq!(ErrorId::from_wire("IMAGE_MISSING"), None);
    }

    #[test]
    fn http_status_mapping() {
        assert_eq!(ErrorId::HttpUnauthorized.http_status(), 401);
        assert_eq!(ErrorId::HttpMaxRequests.http_status(), 429);
        for id in ErrorId::ALL {
            if !matches!(id, ErrorId::HttpUnauthorized | ErrorId::HttpMaxRequests) {
                assert_eq!(id.http_status(), 200, "{id} should map to 200");
            }
        }
    }
}
