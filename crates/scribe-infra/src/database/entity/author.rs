//! Author document.

use bson::DateTime;
use serde::{Deserialize, Serialize};

use scribe_core::domain::{Author, Title};
use scribe_core::error::RepoError;

use super::parse_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub fname: String,
    pub lname: String,
    pub title: Title,
    pub email: String,
    pub password: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Conversion from Domain Author to the stored document.
impl From<Author> for AuthorDocument {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.to_string(),
            fname: author.fname,
            lname: author.lname,
            title: author.title,
            email: author.email,
            password: author.password_hash,
            created_at: DateTime::from_chrono(author.created_at),
            updated_at: DateTime::from_chrono(author.updated_at),
        }
    }
}

/// Conversion from the stored document back to Domain Author.
impl TryFrom<AuthorDocument> for Author {
    type Error = RepoError;

    fn try_from(doc: AuthorDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&doc.id)?,
            fname: doc.fname,
            lname: doc.lname,
            title: doc.title,
            email: doc.email,
            password_hash: doc.password,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        })
    }
}
