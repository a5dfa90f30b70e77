use bson::{Bson, doc};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use scribe_core::domain::{Blog, BlogDraft, BlogFilter, BlogUpdate};

use super::entity::BlogDocument;
use super::mongo_repo::{filter_document, soft_delete_document, update_document};

fn fixed_instant() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

#[test]
fn test_empty_filter_only_selects_live_published() {
    let selector = filter_document(&BlogFilter::default());

    assert_eq!(selector, doc! { "isDeleted": false, "isPublished": true });
}

#[test]
fn test_filter_uses_match_all_for_lists() {
    let author_id = Uuid::new_v4();
    let filter = BlogFilter {
        author_id: Some(author_id),
        category: Some("tech".to_string()),
        subcategory: vec!["web".to_string()],
        tags: vec!["a".to_string(), "b".to_string()],
    };

    let selector = filter_document(&filter);

    assert_eq!(selector.get_str("authorId").unwrap(), author_id.to_string());
    assert_eq!(selector.get_str("category").unwrap(), "tech");
    assert_eq!(
        selector.get_document("subcategory").unwrap(),
        &doc! { "$all": ["web"] }
    );
    assert_eq!(selector.get_document("tags").unwrap(), &doc! { "$all": ["a", "b"] });
}

#[test]
fn test_update_adds_to_sets_and_stamps_publication() {
    let at = fixed_instant();
    let update = BlogUpdate::new(
        Some("New title".to_string()),
        None,
        None,
        Some(true),
        vec!["x".to_string(), "y".to_string()],
        vec![],
    );

    let modifications = update_document(&update, at);
    let set = modifications.get_document("$set").unwrap();

    assert_eq!(set.get_str("title").unwrap(), "New title");
    assert!(set.get_bool("isPublished").unwrap());
    assert_eq!(
        set.get("publishedAt"),
        Some(&Bson::DateTime(bson::DateTime::from_chrono(at)))
    );
    assert!(set.get("body").is_none());
    assert_eq!(
        modifications.get_document("$addToSet").unwrap(),
        &doc! { "tags": { "$each": ["x", "y"] } }
    );
}

#[test]
fn test_unpublish_nulls_published_at_without_add_to_set() {
    let update = BlogUpdate {
        is_published: Some(false),
        ..Default::default()
    };

    let modifications = update_document(&update, fixed_instant());
    let set = modifications.get_document("$set").unwrap();

    assert_eq!(set.get("publishedAt"), Some(&Bson::Null));
    assert!(modifications.get("$addToSet").is_none());
}

#[test]
fn test_soft_delete_sets_flag_and_timestamp() {
    let modifications = soft_delete_document(fixed_instant());
    let set = modifications.get_document("$set").unwrap();

    assert!(set.get_bool("isDeleted").unwrap());
    assert!(set.get_datetime("deletedAt").is_ok());
}

#[test]
fn test_blog_document_round_trips_through_bson() {
    let blog = Blog::new_at(
        BlogDraft {
            title: "Stored".to_string(),
            body: "Body".to_string(),
            author_id: Uuid::new_v4(),
            category: "tech".to_string(),
            tags: vec!["rust".to_string()],
            subcategory: vec![],
            is_published: true,
        },
        fixed_instant(),
    );

    let stored = bson::to_document(&BlogDocument::from(blog.clone())).unwrap();
    assert_eq!(stored.get_str("_id").unwrap(), blog.id.to_string());
    assert!(stored.get_datetime("publishedAt").is_ok());

    let restored: BlogDocument = bson::from_document(stored).unwrap();
    assert_eq!(Blog::try_from(restored).unwrap(), blog);
}
