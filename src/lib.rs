//! # mathpix-rs
//!
//! Typed async client for the [Mathpix](https://mathpix.com) OCR API: submit
//! images, PDFs, and handwriting stroke data and receive structured
//! recognition results (text, LaTeX, HTML, geometric and table data).
//!
//! ## Overview
//!
//! Every logical operation is a static [`endpoint::Endpoint`] descriptor
//! binding an HTTP verb and path to a request/response type pair. The
//! [`Client`] dispatches through one generic code path: the request value
//! describes its own wire encoding via [`encode::Encode`], authentication
//! headers are injected unconditionally, and the response body is classified
//! before it is trusted.
//!
//! The provider signals failure on two independent channels: the HTTP status
//! line, and an in-band `{"error": {"id": ...}}` envelope that can arrive
//! inside an otherwise-successful 200 response. The classifier in this crate
//! speculatively decodes the envelope from every response and treats a
//! recognized [`ErrorId`] as authoritative over the transport status, so
//! callers get a single error-handling path regardless of which channel
//! signaled the failure.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mathpix_rs::{Client, types::ImageRequest};
//!
//! #[tokio::main]
//! async fn main() -> mathpix_rs::Result<()> {
//!     let client = Client::new("app-key", "app-id")?;
//!
//!     let request = ImageRequest {
//!         src: Some("https://example.com/equation.png".into()),
//!         ..Default::default()
//!     };
//!     let response = client.image(&request).await?;
//!     println!("{}", response.text.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, dispatch, and response classification |
//! | [`endpoint`] | Static endpoint descriptor registry |
//! | [`encode`] | Wire-encoding contract for request values |
//! | [`error`] | Unified error type and the provider's error envelope |
//! | [`error_id`] | The provider's known in-band error identifiers |
//! | [`types`] | Request/response schema for every operation |
//!
//! No retries are performed internally: the API is paid and side-effecting,
//! so retry policy belongs to the caller.

pub mod client;
pub mod encode;
pub mod endpoint;
pub mod error;
pub mod error_id;
pub mod types;

mod transport;

pub use client::{Client, ClientBuilder};
pub use error::{ApiError, Error};
pub use error_id::ErrorId;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Default base URL of the hosted Mathpix API.
pub const DEFAULT_BASE_URL: &str = "https://api.mathpix.com";
