//! Read-side seam over the Post Store.
//!
//! The store is static and immutable, so the trait is synchronous and
//! infallible: filtering and lookup over a compiled-in array cannot fail.

use crate::domain::posts::{Post, PostId};

pub trait PostsRepo: Send + Sync {
    /// Every post, in store order.
    fn all(&self) -> &'static [Post];

    /// Exact-match lookup by identifier.
    fn find_by_id(&self, id: PostId) -> Option<&'static Post>;

    /// Distinct category labels in first-appearance order.
    fn categories(&self) -> &'static [&'static str];

    /// Full store sorted by publication date, newest first.
    fn recent(&self) -> Vec<&'static Post>;

    /// Posts flagged as featured, in store order.
    fn featured(&self) -> Vec<&'static Post>;

    fn distinct_author_count(&self) -> usize;
}
