//! # Scribe Core
//!
//! The domain layer of the Scribe blog backend.
//! Entities, query/update values and the ports that infrastructure implements.
//! Nothing in here knows about HTTP or a concrete store.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
