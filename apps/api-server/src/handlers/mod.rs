//! HTTP handlers and route configuration.

mod authors;
mod blogs;
mod health;

#[cfg(test)]
mod test_support;

use actix_web::web;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::middleware::error::{AppError, AppResult, json_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(web::resource("/authors").route(web::post().to(authors::register_author)))
        .service(web::resource("/authors/{authorId}").route(web::get().to(authors::get_author)))
        .service(
            web::resource("/blogs")
                .route(web::post().to(blogs::create_blog))
                .route(web::get().to(blogs::list_blogs))
                .route(web::delete().to(blogs::delete_blogs_by_query)),
        )
        .service(
            web::resource("/blogs/{blogId}")
                .route(web::put().to(blogs::update_blog))
                .route(web::delete().to(blogs::delete_blog)),
        );
}

/// Decode a JSON object that has already been checked for emptiness.
pub(crate) fn parse_payload<T: DeserializeOwned>(payload: Map<String, Value>) -> AppResult<T> {
    serde_json::from_value(Value::Object(payload))
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}
