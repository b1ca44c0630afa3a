//! The Detail Resolver: turns a post id into the full detail view model,
//! or nothing when the id is unknown so the caller can redirect.

use std::sync::Arc;

use crate::application::engagement::EngagementService;
use crate::application::feed::FeedService;
use crate::application::repos::PostsRepo;
use crate::domain::posts::{self, Post, PostId};
use crate::presentation::views::PostDetailContext;

#[derive(Clone)]
pub struct DetailService {
    posts: Arc<dyn PostsRepo>,
    feed: FeedService,
    engagement: EngagementService,
}

impl DetailService {
    pub fn new(posts: Arc<dyn PostsRepo>, feed: FeedService, engagement: EngagementService) -> Self {
        Self {
            posts,
            feed,
            engagement,
        }
    }

    /// Resolve a detail page. Rendering a detail page is what starts a
    /// fresh engagement round: any earlier toggles for this post are
    /// discarded and the counter is reseeded from the store.
    pub fn post_detail(&self, session: &str, id: PostId) -> Option<PostDetailContext> {
        let post = self.posts.find_by_id(id)?;
        let engagement = self.engagement.reset(session, id)?;

        Some(PostDetailContext {
            id: post.id.get(),
            title: post.title,
            excerpt: post.excerpt,
            category: post.category,
            author_name: post.author.name,
            author_avatar_url: post.author.avatar_url,
            author_role: post.author.role,
            published: posts::format_human_date(post.published_on),
            read_time: post.read_time,
            image_url: post.image_url,
            tags: post.tags,
            views: post.views,
            paragraphs: paragraphs(post),
            liked: engagement.liked(),
            bookmarked: engagement.bookmarked(),
            like_count: engagement.likes(),
            like_action: format!("/blogs/{}/like", post.id),
            bookmark_action: format!("/blogs/{}/bookmark", post.id),
            sidebar: self.feed.sidebar(),
        })
    }
}

fn paragraphs(post: &Post) -> Vec<&'static str> {
    post.body
        .split("\n\n")
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedSettings;
    use crate::infra::store::StaticPostStore;

    fn service() -> DetailService {
        let posts: Arc<dyn PostsRepo> = Arc::new(StaticPostStore);
        let feed = FeedService::new(posts.clone(), FeedSettings::defaults());
        let engagement = EngagementService::new(posts.clone());
        DetailService::new(posts, feed, engagement)
    }

    #[test]
    fn known_id_resolves_with_seeded_engagement() {
        let detail = service();
        let context = detail
            .post_detail("s1", PostId::new(1))
            .expect("post 1 exists");
        assert_eq!(context.title, "Building Scalable Web Applications with Next.js and TypeScript");
        assert!(!context.liked);
        assert!(!context.bookmarked);
        assert_eq!(context.like_count, 89);
        assert_eq!(context.paragraphs.len(), 2);
        assert_eq!(context.sidebar.recent.len(), 5);
    }

    #[test]
    fn unknown_id_resolves_to_nothing() {
        let detail = service();
        assert!(detail.post_detail("s1", PostId::new(404)).is_none());
    }

    #[test]
    fn revisiting_a_post_discards_earlier_toggles() {
        let posts: Arc<dyn PostsRepo> = Arc::new(StaticPostStore);
        let feed = FeedService::new(posts.clone(), FeedSettings::defaults());
        let engagement = EngagementService::new(posts.clone());
        let detail = DetailService::new(posts, feed, engagement.clone());

        detail
            .post_detail("s1", PostId::new(1))
            .expect("post 1 exists");
        engagement.toggle_like("s1", PostId::new(1)).expect("known post");

        let revisit = detail
            .post_detail("s1", PostId::new(1))
            .expect("post 1 exists");
        assert!(!revisit.liked);
        assert_eq!(revisit.like_count, 89);
    }
}
