//! Data Transfer Objects - request types for the API.
//!
//! Every field is optional at this layer so that handlers can report which
//! required field is missing instead of a generic decode error.

use serde::{Deserialize, Serialize};

/// A list field that clients may send either as one string or as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Normalise to a sequence of trimmed, non-blank entries.
    pub fn into_vec(self) -> Vec<String> {
        let items = match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        };
        items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

/// Normalise an optional list field, absent meaning empty.
pub fn list_field(field: Option<OneOrMany>) -> Vec<String> {
    field.map(OneOrMany::into_vec).unwrap_or_default()
}

/// Request to register an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterAuthorRequest {
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request to create a blog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author_id: Option<String>,
    pub category: Option<String>,
    pub tags: Option<OneOrMany>,
    pub subcategory: Option<OneOrMany>,
    pub is_published: Option<bool>,
}

/// Partial update of a blog. The author cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub tags: Option<OneOrMany>,
    pub subcategory: Option<OneOrMany>,
    pub is_published: Option<bool>,
}

/// Query string accepted by the list and bulk-delete endpoints.
///
/// `subcategory` and `tags` are comma-separated lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogQuery {
    pub author_id: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub tags: Option<String>,
    pub is_published: Option<String>,
}
