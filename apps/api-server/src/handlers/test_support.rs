//! Shared helpers for handler tests.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::Value;
use uuid::Uuid;

use scribe_core::domain::{Author, AuthorDraft, Blog, BlogDraft};
use scribe_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

use super::configure_routes;
use crate::state::AppState;

/// Fresh in-memory state with cheap hashing.
pub fn test_state() -> AppState {
    let passwords = Argon2PasswordService::with_params(8, 1, 1).unwrap();
    let tokens = JwtTokenService::new(JwtConfig {
        secret: "test-secret".to_string(),
        expiration_hours: 1,
        issuer: "test".to_string(),
    });
    AppState::in_memory(Arc::new(passwords), Arc::new(tokens))
}

/// Run one request through the full route table and decode the JSON reply.
pub async fn send(state: &AppState, request: TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

/// `Authorization` header value for a token with the given subject.
pub fn bearer(state: &AppState, subject: &str) -> (&'static str, String) {
    let token = state
        .tokens
        .generate_token(subject, "caller@example.com")
        .unwrap();
    ("Authorization", format!("Bearer {token}"))
}

pub async fn seed_author(state: &AppState, email: &str) -> Author {
    let draft = AuthorDraft::parse("Jane", "Austen", "Miss", email).unwrap();
    state
        .authors
        .insert(Author::new(draft, "not-a-real-hash".to_string()))
        .await
        .unwrap()
}

pub async fn seed_blog(state: &AppState, author_id: Uuid, tags: &[&str], is_published: bool) -> Blog {
    let blog = Blog::new(BlogDraft {
        title: "Seeded".to_string(),
        body: "Seeded body".to_string(),
        author_id,
        category: "fiction".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        subcategory: vec![],
        is_published,
    });
    state.blogs.insert(blog).await.unwrap()
}
