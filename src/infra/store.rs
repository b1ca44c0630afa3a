//! The compiled-in Post Store exposed through the repository seam.

use crate::application::repos::PostsRepo;
use crate::domain::posts::{self, Post, PostId};

/// Repository over the static [`posts::POSTS`] array. Stateless; every
/// instance reads the same compiled-in records.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPostStore;

impl PostsRepo for StaticPostStore {
    fn all(&self) -> &'static [Post] {
        posts::all()
    }

    fn find_by_id(&self, id: PostId) -> Option<&'static Post> {
        posts::find_by_id(id)
    }

    fn categories(&self) -> &'static [&'static str] {
        posts::categories()
    }

    fn recent(&self) -> Vec<&'static Post> {
        posts::recent()
    }

    fn featured(&self) -> Vec<&'static Post> {
        posts::featured()
    }

    fn distinct_author_count(&self) -> usize {
        posts::distinct_author_count()
    }
}
