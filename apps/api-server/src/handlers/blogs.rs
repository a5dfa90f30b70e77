//! Blog handlers.
//!
//! Reads only ever surface live, published blogs. Deletion is always a soft
//! delete, and only the owning author may update a blog.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

use scribe_core::domain::{
    Blog, BlogDraft, BlogFilter, BlogUpdate, BulkUpdateSummary, non_blank, required, split_list,
};
use scribe_infra::database::mask_email;
use scribe_shared::ApiResponse;
use scribe_shared::dto::{BlogQuery, CreateBlogRequest, UpdateBlogRequest, list_field};

use super::parse_payload;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Translate query parameters into a filter.
///
/// `None` means the criteria can never match, e.g. an author id that is not
/// a valid id.
fn blog_filter(query: &BlogQuery) -> Option<BlogFilter> {
    let author_id = match non_blank(query.author_id.as_deref()) {
        Some(raw) => Some(Uuid::parse_str(raw).ok()?),
        None => None,
    };

    Some(BlogFilter {
        author_id,
        category: non_blank(query.category.as_deref()).map(str::to_string),
        subcategory: query.subcategory.as_deref().map(split_list).unwrap_or_default(),
        tags: query.tags.as_deref().map(split_list).unwrap_or_default(),
    })
}

/// POST /blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<Map<String, Value>>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    if payload.is_empty() {
        return Err(AppError::BadRequest(
            "Invalid request parameters. Please provide blog details".to_string(),
        ));
    }
    let req: CreateBlogRequest = parse_payload(payload)?;

    let title = required(req.title.as_deref(), "Title")?;
    let body = required(req.body.as_deref(), "Body")?;
    let raw_author_id = required(req.author_id.as_deref(), "Author Id")?;
    let category = required(req.category.as_deref(), "Category")?;

    let author_id = Uuid::parse_str(raw_author_id)
        .map_err(|_| AppError::BadRequest(format!("{raw_author_id} is not a valid author Id")))?;
    if state.authors.find_by_id(author_id).await?.is_none() {
        return Err(AppError::BadRequest("Author does not exist".to_string()));
    }

    let blog = Blog::new(BlogDraft {
        title: title.to_string(),
        body: body.to_string(),
        author_id,
        category: category.to_string(),
        tags: list_field(req.tags),
        subcategory: list_field(req.subcategory),
        is_published: req.is_published.unwrap_or(false),
    });
    let blog = state.blogs.insert(blog).await?;
    tracing::info!(blog_id = %blog.id, %author_id, "Blog created");

    Ok(HttpResponse::Created().json(ApiResponse::ok("New blog created successfully", blog)))
}

/// GET /blogs
pub async fn list_blogs(
    state: web::Data<AppState>,
    query: web::Query<BlogQuery>,
) -> AppResult<HttpResponse> {
    let blogs = match blog_filter(&query) {
        Some(filter) => state.blogs.find_matching(&filter).await?,
        None => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Blog details accessed successfully", blogs)))
}

/// PUT /blogs/{blogId}
pub async fn update_blog(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<Map<String, Value>>,
) -> AppResult<HttpResponse> {
    let raw_blog_id = path.into_inner();
    let blog_id = Uuid::parse_str(&raw_blog_id)
        .map_err(|_| AppError::BadRequest(format!("{raw_blog_id} is not valid blog Id")))?;
    let caller = identity.author_id()?;

    let not_found = || AppError::NotFound("No such blog exists".to_string());
    let blog = state.blogs.find_live(blog_id).await?.ok_or_else(not_found)?;
    blog.ensure_owned_by(caller)?;

    let payload = body.into_inner();
    if payload.is_empty() {
        return Err(AppError::BadRequest(
            "No parameters passed. Please provide blog details for modification".to_string(),
        ));
    }
    let req: UpdateBlogRequest = parse_payload(payload)?;

    let update = BlogUpdate::new(
        non_blank(req.title.as_deref()).map(str::to_string),
        non_blank(req.body.as_deref()).map(str::to_string),
        non_blank(req.category.as_deref()).map(str::to_string),
        req.is_published,
        list_field(req.tags),
        list_field(req.subcategory),
    );
    if update.is_empty() {
        tracing::debug!(%blog_id, "Update carries no applicable fields");
    }

    let updated = state
        .blogs
        .update_live(blog_id, &update, Utc::now())
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(%blog_id, "Blog updated");

    Ok(HttpResponse::Created().json(ApiResponse::ok("Blog successfully updated", updated)))
}

/// DELETE /blogs/{blogId}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let not_found = || AppError::NotFound("No such blog exist or the blog is deleted".to_string());

    let blog_id = Uuid::parse_str(&path.into_inner()).map_err(|_| not_found())?;
    let deleted = state
        .blogs
        .soft_delete(blog_id, Utc::now())
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(%blog_id, "Blog deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Blog deleted successfully", deleted)))
}

/// DELETE /blogs
pub async fn delete_blogs_by_query(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<BlogQuery>,
) -> AppResult<HttpResponse> {
    let caller = identity.author_id()?;

    // An explicit isPublished counts as a criterion even though every bulk
    // delete is already limited to published blogs.
    let filter = blog_filter(&query);
    let has_publish_flag = non_blank(query.is_published.as_deref()).is_some();
    if !has_publish_flag && filter.as_ref().is_some_and(BlogFilter::is_unrestricted) {
        return Err(AppError::BadRequest(
            "No query param received. Please query details".to_string(),
        ));
    }

    let summary = match filter {
        Some(filter) => state.blogs.soft_delete_matching(&filter, Utc::now()).await?,
        None => BulkUpdateSummary::default(),
    };
    if summary.matched_count == 0 {
        return Err(AppError::NotFound(
            "No such document exist or it may be deleted".to_string(),
        ));
    }
    tracing::info!(
        %caller,
        caller_email = %mask_email(&identity.email),
        deleted = summary.modified_count,
        "Blogs deleted by query"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Blog deleted successfully", summary)))
}
