use chrono::{DateTime, Utc};

use super::{Blog, union_into};

/// Partial modification of a blog.
///
/// Scalar fields overwrite when present. `add_tags` and `add_subcategory`
/// are merged into the existing lists as a set union.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub add_tags: Vec<String>,
    pub add_subcategory: Vec<String>,
}

impl BlogUpdate {
    /// Build an update, collapsing duplicates within the list additions.
    pub fn new(
        title: Option<String>,
        body: Option<String>,
        category: Option<String>,
        is_published: Option<bool>,
        tags: Vec<String>,
        subcategory: Vec<String>,
    ) -> Self {
        let mut add_tags = Vec::with_capacity(tags.len());
        union_into(&mut add_tags, &tags);
        let mut add_subcategory = Vec::with_capacity(subcategory.len());
        union_into(&mut add_subcategory, &subcategory);

        Self {
            title,
            body,
            category,
            is_published,
            add_tags,
            add_subcategory,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.category.is_none()
            && self.is_published.is_none()
            && self.add_tags.is_empty()
            && self.add_subcategory.is_empty()
    }

    /// Apply the update in place as of `at`.
    pub fn apply_at(&self, blog: &mut Blog, at: DateTime<Utc>) {
        if let Some(title) = &self.title {
            blog.title = title.clone();
        }
        if let Some(body) = &self.body {
            blog.body = body.clone();
        }
        if let Some(category) = &self.category {
            blog.category = category.clone();
        }
        if let Some(is_published) = self.is_published {
            blog.is_published = is_published;
            blog.published_at = is_published.then_some(at);
        }
        union_into(&mut blog.tags, &self.add_tags);
        union_into(&mut blog.subcategory, &self.add_subcategory);
        blog.updated_at = at;
    }
}
