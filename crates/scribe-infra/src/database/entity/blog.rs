//! Blog document.

use bson::DateTime;
use serde::{Deserialize, Serialize};

use scribe_core::domain::Blog;
use scribe_core::error::RepoError;

use super::parse_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub author_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub subcategory: Vec<String>,
    pub published_at: Option<DateTime>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Conversion from Domain Blog to the stored document.
impl From<Blog> for BlogDocument {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            title: blog.title,
            body: blog.body,
            author_id: blog.author_id.to_string(),
            tags: blog.tags,
            category: blog.category,
            subcategory: blog.subcategory,
            published_at: blog.published_at.map(DateTime::from_chrono),
            is_published: blog.is_published,
            is_deleted: blog.is_deleted,
            deleted_at: blog.deleted_at.map(DateTime::from_chrono),
            created_at: DateTime::from_chrono(blog.created_at),
            updated_at: DateTime::from_chrono(blog.updated_at),
        }
    }
}

/// Conversion from the stored document back to Domain Blog.
impl TryFrom<BlogDocument> for Blog {
    type Error = RepoError;

    fn try_from(doc: BlogDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&doc.id)?,
            title: doc.title,
            body: doc.body,
            author_id: parse_id(&doc.author_id)?,
            tags: doc.tags,
            category: doc.category,
            subcategory: doc.subcategory,
            published_at: doc.published_at.map(DateTime::to_chrono),
            is_published: doc.is_published,
            is_deleted: doc.is_deleted,
            deleted_at: doc.deleted_at.map(DateTime::to_chrono),
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        })
    }
}
