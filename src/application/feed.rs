//! The Listing Controller: derives the filtered, paginated feed shown on
//! `/blogs` and the append windows served to the infinite-scroll sentinel.

use std::sync::Arc;

use askama::Template;
use axum::response::Response;
use datastar::prelude::ElementPatchMode;
use url::form_urlencoded;

use crate::application::error::HttpError;
use crate::application::pagination::PageRequest;
use crate::application::repos::PostsRepo;
use crate::application::stream::StreamBuilder;
use crate::config::FeedSettings;
use crate::domain::posts::{self, Post};
use crate::presentation::views::{
    CategoryChip, FeedLoaderContext, FeedLoaderTemplate, ListingContext, PostCardView,
    PostCardsAppendTemplate, SidebarItemView, SidebarView, StatView, TemplateRenderError,
};

/// Category predicate selected by the chip row. `All` disables the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("All") => Self::All,
            Some(name) => Self::Named(name.to_string()),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Named(name) => name,
        }
    }

    fn as_param(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }
}

/// The two reader-driven predicates of the listing view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub category: CategoryFilter,
    pub search: String,
}

impl ListingQuery {
    pub fn new(category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            category: CategoryFilter::from_param(category),
            search: search.unwrap_or_default().trim().to_string(),
        }
    }

    /// A post is included when the category matches and the title contains
    /// the search text case-insensitively.
    pub fn matches(&self, post: &Post) -> bool {
        self.category.matches(post.category)
            && post
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    /// Query-string suffix appended to `/ui/posts?page=N` by the sentinel.
    pub fn load_more_query(&self) -> String {
        let encoded = self.encode_pairs();
        if encoded.is_empty() {
            String::new()
        } else {
            format!("&{encoded}")
        }
    }

    /// Listing href carrying this query, used by category chips.
    pub fn listing_href(&self) -> String {
        let encoded = self.encode_pairs();
        if encoded.is_empty() {
            "/blogs".to_string()
        } else {
            format!("/blogs?{encoded}")
        }
    }

    fn encode_pairs(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = self.category.as_param() {
            serializer.append_pair("category", category);
        }
        if !self.search.is_empty() {
            serializer.append_pair("q", &self.search);
        }
        serializer.finish()
    }
}

/// One append window plus the refreshed sentinel state.
pub struct AppendPayload {
    pub cards: Vec<PostCardView>,
    pub total_visible: usize,
    pub loader: FeedLoaderContext,
}

#[derive(Clone)]
pub struct FeedService {
    posts: Arc<dyn PostsRepo>,
    settings: FeedSettings,
}

impl FeedService {
    pub fn new(posts: Arc<dyn PostsRepo>, settings: FeedSettings) -> Self {
        Self { posts, settings }
    }

    pub fn page_size(&self) -> std::num::NonZeroUsize {
        self.settings.page_size
    }

    /// The subset of the Post Store satisfying both predicates, in store
    /// order.
    pub fn filtered(&self, query: &ListingQuery) -> Vec<&'static Post> {
        self.posts
            .all()
            .iter()
            .filter(|post| query.matches(post))
            .collect()
    }

    pub fn page_context(&self, query: &ListingQuery, request: PageRequest) -> ListingContext {
        let filtered = self.filtered(query);
        let total = filtered.len();
        let visible = request.visible_count(total);

        let cards: Vec<PostCardView> = filtered[..visible].iter().map(|post| card(post)).collect();

        ListingContext {
            stats: self.stats(),
            search: query.search.clone(),
            categories: self.category_chips(query),
            has_results: total > 0,
            post_count: visible,
            total_count: total,
            posts: cards,
            loader: self.loader(query, request, total, visible),
        }
    }

    pub fn append_payload(&self, query: &ListingQuery, request: PageRequest) -> AppendPayload {
        let filtered = self.filtered(query);
        let total = filtered.len();
        let window = request.window(total);
        let visible = window.end;

        let cards: Vec<PostCardView> = filtered[window].iter().map(|post| card(post)).collect();

        AppendPayload {
            cards,
            total_visible: visible,
            loader: self.loader(query, request, total, visible),
        }
    }

    pub fn sidebar(&self) -> SidebarView {
        SidebarView {
            recent: self
                .posts
                .recent()
                .into_iter()
                .take(self.settings.recent_limit)
                .map(sidebar_item)
                .collect(),
            featured: self
                .posts
                .featured()
                .into_iter()
                .take(self.settings.featured_limit)
                .map(sidebar_item)
                .collect(),
        }
    }

    fn loader(
        &self,
        query: &ListingQuery,
        request: PageRequest,
        total: usize,
        visible: usize,
    ) -> FeedLoaderContext {
        FeedLoaderContext {
            has_results: visible > 0,
            has_more: request.has_more(total),
            next_page: request.next().page(),
            load_more_query: query.load_more_query(),
        }
    }

    fn stats(&self) -> Vec<StatView> {
        vec![
            StatView {
                label: "Articles".to_string(),
                value: self.posts.all().len(),
            },
            StatView {
                label: "Authors".to_string(),
                value: self.posts.distinct_author_count(),
            },
            StatView {
                label: "Categories".to_string(),
                value: self.posts.categories().len(),
            },
        ]
    }

    fn category_chips(&self, query: &ListingQuery) -> Vec<CategoryChip> {
        let mut chips = Vec::with_capacity(self.posts.categories().len() + 1);
        chips.push(chip(CategoryFilter::All, query));
        for label in self.posts.categories() {
            chips.push(chip(CategoryFilter::Named((*label).to_string()), query));
        }
        chips
    }
}

fn chip(category: CategoryFilter, query: &ListingQuery) -> CategoryChip {
    let is_active = category == query.category;
    let href = ListingQuery {
        category: category.clone(),
        search: query.search.clone(),
    }
    .listing_href();
    CategoryChip {
        label: category.label().to_string(),
        href,
        is_active,
    }
}

fn card(post: &'static Post) -> PostCardView {
    PostCardView {
        href: format!("/blogs/{}", post.id),
        title: post.title,
        excerpt: post.excerpt,
        category: post.category,
        author_name: post.author.name,
        author_avatar_url: post.author.avatar_url,
        published: posts::format_human_date(post.published_on),
        read_time: post.read_time,
        image_url: post.image_url,
        views: post.views,
        likes: post.likes,
        featured: post.featured,
    }
}

fn sidebar_item(post: &'static Post) -> SidebarItemView {
    SidebarItemView {
        href: format!("/blogs/{}", post.id),
        title: post.title,
        category: post.category,
        published: posts::format_human_date(post.published_on),
    }
}

/// Render the window as a datastar patch stream: append the cards, refresh
/// the sentinel, and clear the `feedLoading` signal.
pub fn build_datastar_append_response(payload: AppendPayload) -> Result<Response, HttpError> {
    const SOURCE: &str = "application::feed::build_datastar_append_response";

    let AppendPayload {
        cards,
        total_visible,
        loader,
    } = payload;

    let cards_html = if cards.is_empty() {
        None
    } else {
        let template = PostCardsAppendTemplate { posts: cards };
        Some(template.render().map_err(|err| {
            HttpError::from(TemplateRenderError::new(
                SOURCE,
                "Template rendering failed",
                err,
            ))
        })?)
    };

    let loader_html = FeedLoaderTemplate { loader }.render().map_err(|err| {
        HttpError::from(TemplateRenderError::new(
            SOURCE,
            "Template rendering failed",
            err,
        ))
    })?;

    let mut stream = StreamBuilder::new();
    if let Some(html) = cards_html {
        stream.push_patch(html, "#post-grid", ElementPatchMode::Append);
    }
    stream.push_patch(
        loader_html,
        "#feed-sentinel-container",
        ElementPatchMode::Inner,
    );
    stream.push_signals(&format!(
        r#"{{"feedLoading": false, "feedCount": {total_visible}}}"#
    ));

    Ok(stream.into_response())
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::infra::store::StaticPostStore;

    fn service() -> FeedService {
        FeedService::new(Arc::new(StaticPostStore), FeedSettings::defaults())
    }

    fn page(n: usize) -> PageRequest {
        PageRequest::from_raw(n, NonZeroUsize::new(6).expect("non-zero"))
    }

    #[test]
    fn all_and_empty_search_show_the_whole_store_on_page_one() {
        let feed = service();
        let context = feed.page_context(&ListingQuery::default(), page(1));
        assert_eq!(context.post_count, 6);
        assert_eq!(context.total_count, 6);
        assert!(context.has_results);
        assert!(!context.loader.has_more);
    }

    #[test]
    fn design_category_yields_exactly_the_two_design_posts() {
        let feed = service();
        let query = ListingQuery::new(Some("Design"), None);
        let filtered = feed.filtered(&query);
        let titles: Vec<&str> = filtered.iter().map(|post| post.title).collect();
        assert_eq!(
            titles,
            vec![
                "Mastering Modern CSS: A Deep Dive into New Features",
                "Creating Responsive and Accessible Web Designs",
            ]
        );
    }

    #[test]
    fn search_is_case_insensitive_and_matches_titles_only() {
        let feed = service();
        let query = ListingQuery::new(None, Some("modern css"));
        let filtered = feed.filtered(&query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.get(), 2);

        // Tag text alone never matches.
        let query = ListingQuery::new(None, Some("Web Vitals"));
        assert!(feed.filtered(&query).is_empty());
    }

    #[test]
    fn both_predicates_apply_and_order_follows_the_store() {
        let feed = service();
        let query = ListingQuery::new(Some("Development"), Some("applications"));
        let filtered = feed.filtered(&query);
        let ids: Vec<u32> = filtered.iter().map(|post| post.id.get()).collect();
        assert_eq!(ids, vec![1]);

        let everything = feed.filtered(&ListingQuery::default());
        let ids: Vec<u32> = everything.iter().map(|post| post.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_result_renders_the_no_results_state() {
        let feed = service();
        let query = ListingQuery::new(None, Some("no such title"));
        let context = feed.page_context(&query, page(1));
        assert!(!context.has_results);
        assert_eq!(context.post_count, 0);
        assert!(!context.loader.has_more);
        assert!(!context.loader.has_results);
    }

    #[test]
    fn append_window_covers_exactly_one_page() {
        let feed = FeedService::new(
            Arc::new(StaticPostStore),
            FeedSettings {
                page_size: NonZeroUsize::new(2).expect("non-zero"),
                ..FeedSettings::defaults()
            },
        );
        let request = PageRequest::from_raw(2, NonZeroUsize::new(2).expect("non-zero"));
        let payload = feed.append_payload(&ListingQuery::default(), request);
        assert_eq!(payload.cards.len(), 2);
        assert_eq!(payload.total_visible, 4);
        assert!(payload.loader.has_more);
        assert_eq!(payload.loader.next_page, 3);
    }

    #[test]
    fn sidebar_truncates_recent_to_five_and_featured_to_three() {
        let feed = service();
        let sidebar = feed.sidebar();
        assert_eq!(sidebar.recent.len(), 5);
        assert_eq!(sidebar.featured.len(), 3);
        assert_eq!(
            sidebar.recent[0].title,
            "Building Scalable Web Applications with Next.js and TypeScript"
        );
    }

    #[test]
    fn load_more_query_percent_encodes_reader_input() {
        let query = ListingQuery::new(Some("Design"), Some("modern css"));
        assert_eq!(query.load_more_query(), "&category=Design&q=modern+css");
        assert_eq!(query.listing_href(), "/blogs?category=Design&q=modern+css");
        assert_eq!(ListingQuery::default().listing_href(), "/blogs");
    }
}
