//! Stored document shapes for MongoDB.
//!
//! Ids are stored as UUID strings under `_id`; timestamps as BSON dates.

pub mod author;
pub mod blog;

pub use author::AuthorDocument;
pub use blog::BlogDocument;

/// Collection holding authors.
pub const AUTHORS: &str = "authors";
/// Collection holding blogs.
pub const BLOGS: &str = "blogs";

use scribe_core::error::RepoError;
use uuid::Uuid;

pub(crate) fn parse_id(raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|e| RepoError::Query(format!("stored id {raw} is corrupt: {e}")))
}
