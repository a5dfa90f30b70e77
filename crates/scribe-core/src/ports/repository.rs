use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Author, Blog, BlogFilter, BlogUpdate, BulkUpdateSummary};
use crate::error::RepoError;

/// Operations every document collection supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find a document by its unique ID, whatever its state.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new document.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// Author store.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {
    /// Find an author by their (already lowercased) email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Author>, RepoError>;
}

/// Blog store. Blogs are never physically removed; deletion flips `isDeleted`.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// Find a blog that has not been soft-deleted.
    async fn find_live(&self, id: Uuid) -> Result<Option<Blog>, RepoError>;

    /// All live, published blogs matching the filter, oldest first.
    async fn find_matching(&self, filter: &BlogFilter) -> Result<Vec<Blog>, RepoError>;

    /// Apply an update to a live blog in one step and return the result.
    async fn update_live(
        &self,
        id: Uuid,
        update: &BlogUpdate,
        at: DateTime<Utc>,
    ) -> Result<Option<Blog>, RepoError>;

    /// Soft-delete a live blog. `None` when it is missing or already deleted.
    async fn soft_delete(&self, id: Uuid, at: DateTime<Utc>) -> Result<Option<Blog>, RepoError>;

    /// Soft-delete every blog matching the filter in a single conditional update.
    async fn soft_delete_matching(
        &self,
        filter: &BlogFilter,
        at: DateTime<Utc>,
    ) -> Result<BulkUpdateSummary, RepoError>;
}
