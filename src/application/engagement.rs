//! Session-local like and bookmark state. Nothing here outlives the
//! process; counters are reseeded from the store whenever a detail page
//! is rendered.

use std::sync::Arc;

use dashmap::DashMap;

use crate::application::repos::PostsRepo;
use crate::domain::engagement::Engagement;
use crate::domain::posts::PostId;

#[derive(Clone)]
pub struct EngagementService {
    posts: Arc<dyn PostsRepo>,
    entries: Arc<DashMap<(String, PostId), Engagement>>,
}

impl EngagementService {
    pub fn new(posts: Arc<dyn PostsRepo>) -> Self {
        Self {
            posts,
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Discard any prior toggles for this session and reseed from the
    /// store. Called on every detail render, so revisiting a post always
    /// starts from the published counter.
    pub fn reset(&self, session: &str, id: PostId) -> Option<Engagement> {
        let post = self.posts.find_by_id(id)?;
        let fresh = Engagement::seeded(post.likes);
        self.entries.insert((session.to_string(), id), fresh);
        Some(fresh)
    }

    pub fn toggle_like(&self, session: &str, id: PostId) -> Option<Engagement> {
        let post = self.posts.find_by_id(id)?;
        let mut entry = self
            .entries
            .entry((session.to_string(), id))
            .or_insert_with(|| Engagement::seeded(post.likes));
        entry.toggle_like();
        Some(*entry)
    }

    pub fn toggle_bookmark(&self, session: &str, id: PostId) -> Option<Engagement> {
        let post = self.posts.find_by_id(id)?;
        let mut entry = self
            .entries
            .entry((session.to_string(), id))
            .or_insert_with(|| Engagement::seeded(post.likes));
        entry.toggle_bookmark();
        Some(*entry)
    }
}
