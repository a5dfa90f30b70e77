//! MongoDB repository implementations.
//!
//! Every mutation is a single server-side operation: updates use one
//! `findOneAndUpdate` with `$set`/`$addToSet`, bulk deletes one `updateMany`.

use async_trait::async_trait;
use bson::{Bson, DateTime, Document, doc};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{Collection, Database};
use uuid::Uuid;

use scribe_core::domain::{Author, Blog, BlogFilter, BlogUpdate, BulkUpdateSummary};
use scribe_core::error::RepoError;
use scribe_core::ports::{AuthorRepository, BaseRepository, BlogRepository};

use super::entity::{AUTHORS, AuthorDocument, BLOGS, BlogDocument};
use super::mask_email;

const DUPLICATE_KEY: i32 = 11000;

fn query_error(err: mongodb::error::Error) -> RepoError {
    RepoError::Query(err.to_string())
}

fn write_error(err: mongodb::error::Error) -> RepoError {
    if let ErrorKind::Write(WriteFailure::WriteError(write)) = err.kind.as_ref() {
        if write.code == DUPLICATE_KEY {
            return RepoError::Constraint(write.message.clone());
        }
    }
    RepoError::Query(err.to_string())
}

/// Selector for live, published blogs narrowed by the filter's criteria.
pub(crate) fn filter_document(filter: &BlogFilter) -> Document {
    let mut selector = doc! { "isDeleted": false, "isPublished": true };
    if let Some(author_id) = filter.author_id {
        selector.insert("authorId", author_id.to_string());
    }
    if let Some(category) = &filter.category {
        selector.insert("category", category.as_str());
    }
    if !filter.subcategory.is_empty() {
        selector.insert("subcategory", doc! { "$all": filter.subcategory.clone() });
    }
    if !filter.tags.is_empty() {
        selector.insert("tags", doc! { "$all": filter.tags.clone() });
    }
    selector
}

/// Update modifications for a blog update applied at `at`.
pub(crate) fn update_document(update: &BlogUpdate, at: chrono::DateTime<Utc>) -> Document {
    let stamp = DateTime::from_chrono(at);

    let mut set = doc! { "updatedAt": stamp };
    if let Some(title) = &update.title {
        set.insert("title", title.as_str());
    }
    if let Some(body) = &update.body {
        set.insert("body", body.as_str());
    }
    if let Some(category) = &update.category {
        set.insert("category", category.as_str());
    }
    if let Some(is_published) = update.is_published {
        set.insert("isPublished", is_published);
        let published_at = if is_published { Bson::DateTime(stamp) } else { Bson::Null };
        set.insert("publishedAt", published_at);
    }

    let mut add_to_set = Document::new();
    if !update.add_tags.is_empty() {
        add_to_set.insert("tags", doc! { "$each": update.add_tags.clone() });
    }
    if !update.add_subcategory.is_empty() {
        add_to_set.insert("subcategory", doc! { "$each": update.add_subcategory.clone() });
    }

    let mut modifications = doc! { "$set": set };
    if !add_to_set.is_empty() {
        modifications.insert("$addToSet", add_to_set);
    }
    modifications
}

/// Modifications that soft-delete a blog at `at`.
pub(crate) fn soft_delete_document(at: chrono::DateTime<Utc>) -> Document {
    let stamp = DateTime::from_chrono(at);
    doc! { "$set": { "isDeleted": true, "deletedAt": stamp, "updatedAt": stamp } }
}

fn live_selector(id: Uuid) -> Document {
    doc! { "_id": id.to_string(), "isDeleted": false }
}

fn return_updated() -> FindOneAndUpdateOptions {
    FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build()
}

/// MongoDB author repository.
pub struct MongoAuthorRepository {
    collection: Collection<AuthorDocument>,
}

impl MongoAuthorRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(AUTHORS),
        }
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for MongoAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(query_error)?;

        found.map(Author::try_from).transpose()
    }

    async fn insert(&self, author: Author) -> Result<Author, RepoError> {
        let document = AuthorDocument::from(author.clone());
        self.collection
            .insert_one(&document, None)
            .await
            .map_err(write_error)?;

        Ok(author)
    }
}

#[async_trait]
impl AuthorRepository for MongoAuthorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(author_email = %mask_email(email), "Finding author by email");

        let found = self
            .collection
            .find_one(doc! { "email": email }, None)
            .await
            .map_err(query_error)?;

        found.map(Author::try_from).transpose()
    }
}

/// MongoDB blog repository.
pub struct MongoBlogRepository {
    collection: Collection<BlogDocument>,
}

impl MongoBlogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(BLOGS),
        }
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for MongoBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(query_error)?;

        found.map(Blog::try_from).transpose()
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let document = BlogDocument::from(blog.clone());
        self.collection
            .insert_one(&document, None)
            .await
            .map_err(write_error)?;

        Ok(blog)
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn find_live(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let found = self
            .collection
            .find_one(live_selector(id), None)
            .await
            .map_err(query_error)?;

        found.map(Blog::try_from).transpose()
    }

    async fn find_matching(&self, filter: &BlogFilter) -> Result<Vec<Blog>, RepoError> {
        let selector = filter_document(filter);
        tracing::debug!(%selector, "Listing blogs");

        let options = FindOptions::builder().sort(doc! { "createdAt": 1 }).build();
        let documents: Vec<BlogDocument> = self
            .collection
            .find(selector, options)
            .await
            .map_err(query_error)?
            .try_collect()
            .await
            .map_err(query_error)?;

        documents.into_iter().map(Blog::try_from).collect()
    }

    async fn update_live(
        &self,
        id: Uuid,
        update: &BlogUpdate,
        at: chrono::DateTime<Utc>,
    ) -> Result<Option<Blog>, RepoError> {
        let updated = self
            .collection
            .find_one_and_update(live_selector(id), update_document(update, at), return_updated())
            .await
            .map_err(write_error)?;

        updated.map(Blog::try_from).transpose()
    }

    async fn soft_delete(
        &self,
        id: Uuid,
        at: chrono::DateTime<Utc>,
    ) -> Result<Option<Blog>, RepoError> {
        let deleted = self
            .collection
            .find_one_and_update(live_selector(id), soft_delete_document(at), return_updated())
            .await
            .map_err(write_error)?;

        deleted.map(Blog::try_from).transpose()
    }

    async fn soft_delete_matching(
        &self,
        filter: &BlogFilter,
        at: chrono::DateTime<Utc>,
    ) -> Result<BulkUpdateSummary, RepoError> {
        let selector = filter_document(filter);
        tracing::debug!(%selector, "Soft-deleting matching blogs");

        let result = self
            .collection
            .update_many(selector, soft_delete_document(at), None)
            .await
            .map_err(write_error)?;

        Ok(BulkUpdateSummary {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }
}
