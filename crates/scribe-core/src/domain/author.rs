use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$")
        .expect("email pattern compiles")
});

/// Honorific an author registers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Title {
    Mr,
    Mrs,
    Miss,
}

impl Title {
    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Mr => "Mr",
            Title::Mrs => "Mrs",
            Title::Miss => "Miss",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Title {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Mr" => Ok(Title::Mr),
            "Mrs" => Ok(Title::Mrs),
            "Miss" => Ok(Title::Miss),
            _ => Err(DomainError::Validation(
                "Title must be one of Mr, Mrs, Miss".to_string(),
            )),
        }
    }
}

/// Validated author fields, ready to be turned into an [`Author`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDraft {
    pub fname: String,
    pub lname: String,
    pub title: Title,
    pub email: String,
}

impl AuthorDraft {
    /// Trim every field, lowercase the email and check title and email format.
    pub fn parse(fname: &str, lname: &str, title: &str, email: &str) -> Result<Self, DomainError> {
        let title = title.parse()?;
        let email = email.trim().to_lowercase();
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(DomainError::Validation(
                "Please fill Valid e-mail address".to_string(),
            ));
        }

        Ok(Self {
            fname: fname.trim().to_string(),
            lname: lname.trim().to_string(),
            title,
            email,
        })
    }
}

/// Author entity - the owner that blogs reference.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub fname: String,
    pub lname: String,
    pub title: Title,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with generated ID and timestamps.
    pub fn new(draft: AuthorDraft, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            fname: draft.fname,
            lname: draft.lname,
            title: draft.title,
            email: draft.email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
