//! Domain entities and the values used to query and mutate them.

mod author;
mod blog;
mod fields;
mod filter;
mod update;

pub use author::{Author, AuthorDraft, Title};
pub use blog::{Blog, BlogDraft, BulkUpdateSummary};
pub use fields::{non_blank, required, split_list, union_into};
pub use filter::BlogFilter;
pub use update::BlogUpdate;
