//! In-memory stores - used when no document database is configured, and in tests.
//!
//! Every operation takes a single lock, so each one (bulk soft delete
//! included) is atomic with respect to this store.
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::{Author, Blog, BlogFilter, BlogUpdate, BulkUpdateSummary};
use scribe_core::error::RepoError;
use scribe_core::ports::{AuthorRepository, BaseRepository, BlogRepository};

use super::mask_email;

/// Author store keyed by id, with email uniqueness enforced on insert.
#[derive(Default)]
pub struct InMemoryAuthorRepository {
    authors: RwLock<HashMap<Uuid, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        Ok(self.authors.read().await.get(&id).cloned())
    }

    async fn insert(&self, author: Author) -> Result<Author, RepoError> {
        let mut authors = self.authors.write().await;
        if authors.values().any(|a| a.email == author.email) {
            return Err(RepoError::Constraint("Email already registered".to_string()));
        }
        authors.insert(author.id, author.clone());
        Ok(author)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(author_email = %mask_email(email), "Finding author by email");

        let authors = self.authors.read().await;
        Ok(authors.values().find(|a| a.email == email).cloned())
    }
}

/// Blog store kept in insertion order.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    blogs: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut blogs = self.blogs.write().await;
        if blogs.iter().any(|b| b.id == blog.id) {
            return Err(RepoError::Constraint(format!("Blog {} already exists", blog.id)));
        }
        blogs.push(blog.clone());
        Ok(blog)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_live(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|b| b.id == id && !b.is_deleted).cloned())
    }

    async fn find_matching(&self, filter: &BlogFilter) -> Result<Vec<Blog>, RepoError> {
        let blogs = self.blogs.read().await;
        let found: Vec<Blog> = blogs.iter().filter(|b| filter.matches(b)).cloned().collect();
        tracing::debug!(?filter, count = found.len(), "Listed blogs");
        Ok(found)
    }

    async fn update_live(
        &self,
        id: Uuid,
        update: &BlogUpdate,
        at: DateTime<Utc>,
    ) -> Result<Option<Blog>, RepoError> {
        let mut blogs = self.blogs.write().await;
        let Some(blog) = blogs.iter_mut().find(|b| b.id == id && !b.is_deleted) else {
            return Ok(None);
        };
        update.apply_at(blog, at);
        Ok(Some(blog.clone()))
    }

    async fn soft_delete(&self, id: Uuid, at: DateTime<Utc>) -> Result<Option<Blog>, RepoError> {
        let mut blogs = self.blogs.write().await;
        let Some(blog) = blogs.iter_mut().find(|b| b.id == id && !b.is_deleted) else {
            return Ok(None);
        };
        blog.soft_delete_at(at);
        Ok(Some(blog.clone()))
    }

    async fn soft_delete_matching(
        &self,
        filter: &BlogFilter,
        at: DateTime<Utc>,
    ) -> Result<BulkUpdateSummary, RepoError> {
        let mut blogs = self.blogs.write().await;
        let mut summary = BulkUpdateSummary::default();
        for blog in blogs.iter_mut().filter(|b| filter.matches(b)) {
            blog.soft_delete_at(at);
            summary.matched_count += 1;
            summary.modified_count += 1;
        }
        Ok(summary)
    }
}
