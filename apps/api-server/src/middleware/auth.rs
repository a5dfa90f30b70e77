//! Caller identity extractor.

use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, http::header, web};
use std::future::{Ready, ready};
use uuid::Uuid;

use scribe_core::ports::{AuthError, TokenClaims};
use scribe_shared::ErrorResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// The authenticated caller, taken from a Bearer token.
///
/// Use this in handlers that act on behalf of an author:
/// ```ignore
/// async fn protected_route(identity: Identity) -> AppResult<HttpResponse> {
///     let author_id = identity.author_id()?;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    /// Token subject as issued; not guaranteed to be a valid id.
    pub subject: String,
    pub email: String,
}

impl Identity {
    /// The caller's author id. A subject that is not an id is a bad request.
    pub fn author_id(&self) -> AppResult<Uuid> {
        Uuid::parse_str(&self.subject)
            .map_err(|_| AppError::BadRequest(format!("{} is not a valid author Id", self.subject)))
    }
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            subject: claims.subject,
            email: claims.email,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::HashingError(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.0 {
            AuthError::TokenExpired => {
                ErrorResponse::rejected("Your authentication token has expired. Please login again.")
            }
            AuthError::InvalidToken(msg) => ErrorResponse::rejected(format!("Invalid token: {msg}")),
            AuthError::MissingAuth => ErrorResponse::rejected(
                "Please provide a valid Bearer token in the Authorization header.",
            ),
            AuthError::HashingError(msg) => ErrorResponse::fault(msg.clone()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Identity, AuthenticationError> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AuthenticationError(AuthError::InvalidToken("Server configuration error".to_string()))
    })?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthenticationError(AuthError::MissingAuth))?;

    let auth_str = auth_header.to_str().map_err(|_| {
        AuthenticationError(AuthError::InvalidToken(
            "Invalid authorization header".to_string(),
        ))
    })?;

    let token = auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        AuthenticationError(AuthError::InvalidToken("Expected Bearer token".to_string()))
    })?;

    let claims = state.tokens.validate_token(token).map_err(AuthenticationError)?;
    Ok(Identity::from(claims))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(subject: &str) -> Identity {
        Identity {
            subject: subject.to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_author_id_parses_subject() {
        let id = Uuid::new_v4();
        assert_eq!(identity(&id.to_string()).author_id().unwrap(), id);
    }

    #[test]
    fn test_malformed_subject_is_bad_request() {
        let err = identity("42").author_id().unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "42 is not a valid author Id"));
    }

    #[test]
    fn test_missing_token_is_unauthorized() {
        let err = AuthenticationError(AuthError::MissingAuth);
        assert_eq!(err.status_code(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
