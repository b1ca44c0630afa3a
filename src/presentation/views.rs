use crate::application::chrome::ThemePreference;
use crate::application::error::{ErrorReport, HttpError};
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn render_not_found_response(chrome: LayoutChrome) -> Response {
    let content = ErrorPageView::not_found();
    let view = LayoutContext::new(chrome, content);
    let mut response = render_template_response(ErrorTemplate { view }, StatusCode::NOT_FOUND);
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        "Resource not found",
    )
    .attach(&mut response);
    response
}

#[derive(Clone)]
pub struct BrandView {
    pub title: String,
    pub href: String,
}

#[derive(Clone)]
pub struct NavigationView {
    pub entries: Vec<NavigationLinkView>,
}

#[derive(Clone)]
pub struct NavigationLinkView {
    pub label: String,
    pub href: String,
}

#[derive(Clone)]
pub struct FooterView {
    pub copy: String,
}

#[derive(Clone)]
pub struct PageMetaView {
    pub title: String,
    pub description: String,
}

#[derive(Clone)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub meta: PageMetaView,
    pub theme: ThemePreference,
}

impl LayoutChrome {
    /// Prefix the page title with the content's own title.
    pub fn with_content_title(self, title: &str) -> Self {
        let meta = PageMetaView {
            title: format!("{title} | {}", self.brand.title),
            ..self.meta
        };
        Self { meta, ..self }
    }
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub meta: PageMetaView,
    pub theme: ThemePreference,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, content: T) -> Self {
        Self {
            brand: chrome.brand,
            navigation: chrome.navigation,
            footer: chrome.footer,
            meta: chrome.meta,
            theme: chrome.theme,
            content,
        }
    }
}

#[derive(Clone)]
pub struct StatView {
    pub label: String,
    pub value: usize,
}

#[derive(Clone)]
pub struct CategoryChip {
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

#[derive(Clone)]
pub struct PostCardView {
    pub href: String,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub author_name: &'static str,
    pub author_avatar_url: &'static str,
    pub published: String,
    pub read_time: &'static str,
    pub image_url: &'static str,
    pub views: u64,
    pub likes: u64,
    pub featured: bool,
}

#[derive(Clone)]
pub struct SidebarItemView {
    pub href: String,
    pub title: &'static str,
    pub category: &'static str,
    pub published: String,
}

#[derive(Clone)]
pub struct SidebarView {
    pub recent: Vec<SidebarItemView>,
    pub featured: Vec<SidebarItemView>,
}

#[derive(Clone)]
pub struct FeedLoaderContext {
    pub has_results: bool,
    pub has_more: bool,
    pub next_page: usize,
    pub load_more_query: String,
}

#[derive(Clone)]
pub struct ListingContext {
    pub stats: Vec<StatView>,
    pub search: String,
    pub categories: Vec<CategoryChip>,
    pub has_results: bool,
    pub post_count: usize,
    pub total_count: usize,
    pub posts: Vec<PostCardView>,
    pub loader: FeedLoaderContext,
}

#[derive(Template)]
#[template(path = "blogs.html")]
pub struct BlogsTemplate {
    pub view: LayoutContext<ListingContext>,
}

#[derive(Template)]
#[template(path = "partials/content.html")]
pub struct PostsPartial {
    pub content: ListingContext,
}

#[derive(Template)]
#[template(path = "partials/post_cards_append.html")]
pub struct PostCardsAppendTemplate {
    pub posts: Vec<PostCardView>,
}

#[derive(Template)]
#[template(path = "partials/feed_loader.html")]
pub struct FeedLoaderTemplate {
    pub loader: FeedLoaderContext,
}

#[derive(Clone)]
pub struct PostDetailContext {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub author_name: &'static str,
    pub author_avatar_url: &'static str,
    pub author_role: &'static str,
    pub published: String,
    pub read_time: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub views: u64,
    pub paragraphs: Vec<&'static str>,
    pub liked: bool,
    pub bookmarked: bool,
    pub like_count: u64,
    pub like_action: String,
    pub bookmark_action: String,
    pub sidebar: SidebarView,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub view: LayoutContext<PostDetailContext>,
}

#[derive(Clone)]
pub struct ErrorPageView {
    pub code: u16,
    pub title: String,
    pub message: String,
    pub action: ErrorAction,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            code: 404,
            title: "Page not found".to_string(),
            message: "The page you are looking for does not exist or has moved.".to_string(),
            action: ErrorAction::blogs(),
        }
    }
}

#[derive(Clone)]
pub struct ErrorAction {
    pub label: String,
    pub href: String,
}

impl ErrorAction {
    pub fn blogs() -> Self {
        Self {
            label: "Back to the blog".to_string(),
            href: "/blogs".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: LayoutContext<ErrorPageView>,
}
