//! Document store adapters.
//!
//! The in-memory store is always available; MongoDB is behind the `mongo`
//! feature.

mod connections;
mod memory;

#[cfg(feature = "mongo")]
pub mod entity;
#[cfg(feature = "mongo")]
pub mod mongo_repo;

pub use connections::DatabaseConfig;
pub use memory::{InMemoryAuthorRepository, InMemoryBlogRepository};

#[cfg(feature = "mongo")]
pub use connections::DatabaseConnections;
#[cfg(feature = "mongo")]
pub use mongo_repo::{MongoAuthorRepository, MongoBlogRepository};

#[cfg(feature = "mongo")]
#[cfg(test)]
mod tests;

/// Mask an email for logging to avoid PII in logs.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}
