//! Client construction, request dispatch, and response classification.

mod builder;
mod classify;
mod core;
mod dispatch;

pub use builder::ClientBuilder;
pub use core::Client;
