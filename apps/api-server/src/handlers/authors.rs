//! Author handlers.

use actix_web::{HttpResponse, web};
use serde_json::{Map, Value};
use uuid::Uuid;

use scribe_core::DomainError;
use scribe_core::domain::{Author, AuthorDraft, required};
use scribe_shared::ApiResponse;
use scribe_shared::dto::RegisterAuthorRequest;

use super::parse_payload;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /authors
pub async fn register_author(
    state: web::Data<AppState>,
    body: web::Json<Map<String, Value>>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    if payload.is_empty() {
        return Err(AppError::BadRequest(
            "Invalid request parameters. Please provide author details".to_string(),
        ));
    }
    let req: RegisterAuthorRequest = parse_payload(payload)?;

    let fname = required(req.fname.as_deref(), "First name")?;
    let lname = required(req.lname.as_deref(), "Last name")?;
    let title = required(req.title.as_deref(), "Title")?;
    let email = required(req.email.as_deref(), "Email")?;
    let password = required(req.password.as_deref(), "Password")?;

    let draft = AuthorDraft::parse(fname, lname, title, email)?;
    if state.authors.find_by_email(&draft.email).await?.is_some() {
        return Err(DomainError::Duplicate(format!("{} is already registered", draft.email)).into());
    }

    let password_hash = state.passwords.hash(password)?;
    let author = state.authors.insert(Author::new(draft, password_hash)).await?;
    tracing::info!(author_id = %author.id, "Author registered");

    Ok(HttpResponse::Created().json(ApiResponse::ok("Author created successfully", author)))
}

/// GET /authors/{authorId}
pub async fn get_author(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let not_found = || AppError::NotFound("No such author exists".to_string());

    let author_id = Uuid::parse_str(&path.into_inner()).map_err(|_| not_found())?;
    let author = state.authors.find_by_id(author_id).await?.ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Author details accessed successfully", author)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use serde_json::json;

    use super::super::test_support::{seed_author, send, test_state};

    fn valid_author() -> serde_json::Value {
        json!({
            "fname": " Jane ",
            "lname": "Austen",
            "title": "Miss",
            "email": "Jane.Austen@Example.com",
            "password": "pride&prejudice"
        })
    }

    #[actix_web::test]
    async fn test_register_author() {
        let state = test_state();

        let (status, json) = send(
            &state,
            TestRequest::post().uri("/authors").set_json(valid_author()),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["status"], true);
        assert_eq!(json["data"]["fname"], "Jane");
        assert_eq!(json["data"]["email"], "jane.austen@example.com");
        assert!(json["data"].get("password").is_none());
        assert!(json["data"].get("passwordHash").is_none());

        let stored = state
            .authors
            .find_by_email("jane.austen@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(stored.password_hash.starts_with("$argon2id$"));
    }

    #[actix_web::test]
    async fn test_register_rejects_missing_and_invalid_fields() {
        let state = test_state();

        let (status, json) = send(&state, TestRequest::post().uri("/authors").set_json(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], false);

        let mut missing = valid_author();
        missing["lname"] = json!("  ");
        let (status, json) = send(&state, TestRequest::post().uri("/authors").set_json(missing)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["msg"], "Last name is required");

        let mut bad_title = valid_author();
        bad_title["title"] = json!("Dr");
        let (status, _) = send(&state, TestRequest::post().uri("/authors").set_json(bad_title)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut bad_email = valid_author();
        bad_email["email"] = json!("jane@austen");
        let (status, json) = send(&state, TestRequest::post().uri("/authors").set_json(bad_email)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["msg"], "Please fill Valid e-mail address");
    }

    #[actix_web::test]
    async fn test_duplicate_email_in_any_case_is_rejected() {
        let state = test_state();
        seed_author(&state, "jane.austen@example.com").await;

        let (status, json) = send(
            &state,
            TestRequest::post().uri("/authors").set_json(valid_author()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["msg"], "jane.austen@example.com is already registered");
    }

    #[actix_web::test]
    async fn test_get_author() {
        let state = test_state();
        let author = seed_author(&state, "emma@example.com").await;

        let (status, json) = send(
            &state,
            TestRequest::get().uri(&format!("/authors/{}", author.id)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["_id"], author.id.to_string());

        let (status, _) = send(&state, TestRequest::get().uri("/authors/not-an-id")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
