//! # Scribe Shared
//!
//! Wire types shared by the API server and its clients: request payloads,
//! query parameters and the `{status, msg, data, error}` response envelope.

pub mod dto;
pub mod response;

pub use dto::OneOrMany;
pub use response::{ApiResponse, ErrorResponse};
