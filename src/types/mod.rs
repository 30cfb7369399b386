//! Request and response schema for every logical operation.
//!
//! These modules are declarative: they mirror the provider's JSON contract
//! field for field. How a request reaches the wire is declared through the
//! [`crate::encode`] contract — body-serialized types implement the
//! [`crate::encode::JsonBody`] marker, query-encoded types implement
//! [`crate::encode::Encode`] directly.

mod batch;
mod format;
mod image;
mod pdf;
mod results;
mod strokes;
mod tokens;
mod usage;

pub use batch::{BatchRequest, BatchResponse, GetBatchResponse};
pub use format::{DocumentOutputFormat, ImageFormat, InputFormat, ResponseFormat};
pub use image::{
    Data, DataOptions, DetectedAlphabet, ErrorInfo, GeometryData, ImageRequest, ImageResponse,
    LabelData, LineData, Position, ShapeData, VertexData, WordData,
};
pub use pdf::{
    AlphabetsAllowed, ConversionFormats, ConversionResult, ConversionStatus, ConversionStatusKind,
    DocumentRequest, DocumentResponse,
};
pub use results::{
    Detections, OcrResult, RequestArgs, ResultBody, SearchRequest, SearchResponse,
};
pub use strokes::{StrokeCoordinates, StrokesData, StrokesRequest, StrokesResponse};
pub use tokens::{AppTokenRequest, AppTokenResponse};
pub use usage::{UsageEntry, UsageRequest, UsageResponse};
