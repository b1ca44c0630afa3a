use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use folia::application::{
    chrome::ChromeService, detail::DetailService, engagement::EngagementService, feed::FeedService,
    repos::PostsRepo,
};
use folia::config::Settings;
use folia::infra::http::{HttpState, build_router};
use folia::infra::store::StaticPostStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn app() -> Router {
    let settings = Settings::defaults();
    let posts: Arc<dyn PostsRepo> = Arc::new(StaticPostStore);

    let feed = Arc::new(FeedService::new(posts.clone(), settings.feed.clone()));
    let engagement = Arc::new(EngagementService::new(posts.clone()));
    let detail = Arc::new(DetailService::new(
        posts.clone(),
        feed.as_ref().clone(),
        engagement.as_ref().clone(),
    ));
    let chrome = Arc::new(ChromeService::new(settings.site.clone()));

    build_router(HttpState {
        feed,
        detail,
        engagement,
        chrome,
    })
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("redirect should carry a location header")
}

#[tokio::test]
async fn root_redirects_to_the_listing() {
    let app = app();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/blogs");
}

#[tokio::test]
async fn listing_shows_the_first_page_of_the_store() {
    let app = app();
    let response = get(&app, "/blogs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Building Scalable Web Applications with Next.js and TypeScript"));
    assert!(body.contains("Building Accessible Web Applications"));
    assert!(body.contains("Showing 6 of 6 articles"));
    // Store is exhausted on page one, so no sentinel is rendered.
    assert!(!body.contains("feed-sentinel\""));
}

#[tokio::test]
async fn category_filter_narrows_the_listing() {
    let app = app();
    let body = body_text(get(&app, "/blogs?category=Design").await).await;

    assert!(body.contains("Mastering Modern CSS: A Deep Dive into New Features"));
    assert!(body.contains("Creating Responsive and Accessible Web Designs"));
    assert!(!body.contains("Advanced State Management Patterns in React"));
    assert!(body.contains("Showing 2 of 2 articles"));
}

#[tokio::test]
async fn search_matches_titles_case_insensitively() {
    let app = app();
    let body = body_text(get(&app, "/blogs?q=MODERN%20CSS").await).await;

    assert!(body.contains("Mastering Modern CSS: A Deep Dive into New Features"));
    assert!(body.contains("Showing 1 of 1 articles"));
}

#[tokio::test]
async fn empty_result_shows_the_no_results_state() {
    let app = app();
    let body = body_text(get(&app, "/blogs?q=quantum%20gravity").await).await;
    assert!(body.contains("No articles found"));
}

#[tokio::test]
async fn unknown_and_malformed_post_ids_redirect_to_not_found() {
    let app = app();

    let response = get(&app, "/blogs/999").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/not-found");

    let response = get(&app, "/blogs/abc").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/not-found");
}

#[tokio::test]
async fn detail_page_renders_post_and_seeded_engagement() {
    let app = app();
    let response = get(&app, "/blogs/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Building Scalable Web Applications with Next.js and TypeScript"));
    assert!(body.contains("John Doe"));
    assert!(body.contains("March 15, 2024"));
    assert!(body.contains("likeCount: 89"));
    assert!(body.contains("Recent Posts"));
}

#[tokio::test]
async fn not_found_page_links_back_to_the_listing() {
    let app = app();
    let response = get(&app, "/not-found").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_text(response).await;
    assert!(body.contains("404"));
    assert!(body.contains("href=\"/blogs\""));
}

#[tokio::test]
async fn unmatched_routes_redirect_to_not_found() {
    let app = app();
    let response = get(&app, "/no/such/route").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/not-found");
}

#[tokio::test]
async fn posts_partial_renders_plain_html_without_datastar() {
    let app = app();
    let response = get(&app, "/ui/posts?page=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_text(response).await;
    assert!(body.contains("id=\"post-grid\""));
}

#[tokio::test]
async fn posts_partial_streams_patches_for_datastar_requests() {
    let app = app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/ui/posts?page=2")
        .header("datastar-request", "true")
        .body(Body::empty())
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/event-stream"));

    let body = body_text(response).await;
    // Page 2 of a six-post store is empty: the sentinel is refreshed and
    // the loading signal cleared, but no cards are appended.
    assert!(body.contains("feedLoading"));
    assert!(!body.contains("post-card"));
}

#[tokio::test]
async fn theme_post_sets_cookie_and_bounces_back() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/theme")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::REFERER, "http://localhost:3000/blogs?category=Design")
        .body(Body::from("theme=dark"))
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/blogs?category=Design");

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("theme cookie should be set");
    assert!(cookie.contains("theme=dark"));
}

#[tokio::test]
async fn like_toggle_returns_updated_counter_as_json() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/blogs/1/like")
        .body(Body::empty())
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("\"liked\":true"));
    assert!(body.contains("\"likeCount\":90"));
}

#[tokio::test]
async fn like_toggle_on_unknown_post_is_not_found() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/blogs/999/like")
        .body(Body::empty())
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_assets_are_served_with_long_lived_caching() {
    let app = app();
    let response = get(&app, "/static/public/app.css").await;
    assert_eq!(response.status(), StatusCode::OK);

    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(cache_control.contains("immutable"));

    let missing = get(&app, "/static/public/nope.css").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
