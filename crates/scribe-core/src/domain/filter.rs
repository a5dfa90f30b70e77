use uuid::Uuid;

use super::Blog;

/// Criteria for listing or bulk-deleting blogs.
///
/// A filter only ever selects live, published blogs; the optional criteria
/// narrow that set further. List criteria are match-all: every token has to
/// be present on the blog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    pub author_id: Option<Uuid>,
    pub category: Option<String>,
    pub subcategory: Vec<String>,
    pub tags: Vec<String>,
}

impl BlogFilter {
    /// True when no criterion narrows the selection beyond live and published.
    pub fn is_unrestricted(&self) -> bool {
        self.author_id.is_none()
            && self.category.is_none()
            && self.subcategory.is_empty()
            && self.tags.is_empty()
    }

    pub fn matches(&self, blog: &Blog) -> bool {
        if blog.is_deleted || !blog.is_published {
            return false;
        }
        if self.author_id.is_some_and(|id| id != blog.author_id) {
            return false;
        }
        if self.category.as_ref().is_some_and(|c| *c != blog.category) {
            return false;
        }

        contains_all(&blog.subcategory, &self.subcategory) && contains_all(&blog.tags, &self.tags)
    }
}

fn contains_all(haystack: &[String], needles: &[String]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}
