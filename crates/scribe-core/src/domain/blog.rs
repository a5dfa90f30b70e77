use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog entity - a post written by an [`Author`](super::Author).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author_id: Uuid,
    pub tags: Vec<String>,
    pub category: String,
    pub subcategory: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_published: bool,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a client supplies when creating a blog, already trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub body: String,
    pub author_id: Uuid,
    pub category: String,
    pub tags: Vec<String>,
    pub subcategory: Vec<String>,
    pub is_published: bool,
}

impl Blog {
    /// Create a new blog, stamping it with the current time.
    pub fn new(draft: BlogDraft) -> Self {
        Self::new_at(draft, Utc::now())
    }

    /// Create a new blog as of `now`. `publishedAt` is only set for published drafts.
    pub fn new_at(draft: BlogDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            body: draft.body,
            author_id: draft.author_id,
            tags: draft.tags,
            category: draft.category,
            subcategory: draft.subcategory,
            published_at: draft.is_published.then_some(now),
            is_published: draft.is_published,
            is_deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn ensure_owned_by(&self, author_id: Uuid) -> Result<(), DomainError> {
        if self.author_id == author_id {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }

    /// Flag the blog as deleted. The document itself is kept.
    pub fn soft_delete_at(&mut self, at: DateTime<Utc>) {
        self.is_deleted = true;
        self.deleted_at = Some(at);
        self.updated_at = at;
    }
}

/// Outcome of a bulk soft delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
}
