use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use metrics::counter;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::{
    application::{
        chrome::{ChromeService, ThemePreference},
        detail::DetailService,
        engagement::EngagementService,
        error::{ErrorReport, HttpError},
        feed::{self, FeedService, ListingQuery},
        pagination::PageRequest,
        stream::StreamBuilder,
    },
    domain::posts::PostId,
    presentation::views::{
        BlogsTemplate, LayoutContext, PostTemplate, PostsPartial, render_not_found_response,
        render_template_response,
    },
};

use super::{
    DATASTAR_REQUEST_HEADER, session_from_jar, theme_cookie,
    middleware::{log_responses, set_request_context},
};

#[derive(Clone)]
pub struct HttpState {
    pub feed: Arc<FeedService>,
    pub detail: Arc<DetailService>,
    pub engagement: Arc<EngagementService>,
    pub chrome: Arc<ChromeService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/blogs", get(listing))
        .route("/blogs/{id}", get(post_detail))
        .route("/blogs/{id}/like", post(toggle_like))
        .route("/blogs/{id}/bookmark", post(toggle_bookmark))
        .route("/ui/posts", get(posts_partial))
        .route("/theme", post(set_theme))
        .route("/not-found", get(not_found))
        .route(
            "/static/public/{*path}",
            get(crate::infra::assets::serve_public),
        )
        .fallback(fallback_redirect)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListingParams {
    category: Option<String>,
    q: Option<String>,
    page: Option<usize>,
}

impl ListingParams {
    fn query(&self) -> ListingQuery {
        ListingQuery::new(self.category.as_deref(), self.q.as_deref())
    }
}

async fn root() -> Redirect {
    Redirect::to("/blogs")
}

async fn listing(
    State(state): State<HttpState>,
    jar: CookieJar,
    Query(params): Query<ListingParams>,
) -> Response {
    let chrome = state.chrome.load(theme_from_jar(&jar));

    let query = params.query();
    let request = PageRequest::from_raw(params.page.unwrap_or(1), state.feed.page_size());
    let content = state.feed.page_context(&query, request);

    counter!("folia_feed_page_total").increment(1);
    let view = LayoutContext::new(chrome, content);
    render_template_response(BlogsTemplate { view }, StatusCode::OK)
}

async fn posts_partial(
    State(state): State<HttpState>,
    headers: HeaderMap,
    Query(params): Query<ListingParams>,
) -> Result<Response, HttpError> {
    let query = params.query();
    let request = PageRequest::from_raw(params.page.unwrap_or(1), state.feed.page_size());

    counter!("folia_feed_append_total").increment(1);

    if headers.contains_key(DATASTAR_REQUEST_HEADER) {
        let payload = state.feed.append_payload(&query, request);
        return feed::build_datastar_append_response(payload);
    }

    let content = state.feed.page_context(&query, request);
    Ok(render_template_response(
        PostsPartial { content },
        StatusCode::OK,
    ))
}

async fn post_detail(
    State(state): State<HttpState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<PostId>() else {
        counter!("folia_not_found_total").increment(1);
        return Redirect::to("/not-found").into_response();
    };

    let (session, jar) = session_from_jar(jar);
    match state.detail.post_detail(&session, id) {
        Some(content) => {
            counter!("folia_post_view_total").increment(1);
            let chrome = state
                .chrome
                .load(theme_from_jar(&jar))
                .with_content_title(content.title);
            let view = LayoutContext::new(chrome, content);
            (jar, render_template_response(PostTemplate { view }, StatusCode::OK)).into_response()
        }
        None => {
            counter!("folia_not_found_total").increment(1);
            (jar, Redirect::to("/not-found")).into_response()
        }
    }
}

async fn toggle_like(
    State(state): State<HttpState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, HttpError> {
    const SOURCE: &str = "infra::http::public::toggle_like";

    let id = parse_post_id(SOURCE, &id)?;
    let (session, jar) = session_from_jar(jar);
    let engagement = state
        .engagement
        .toggle_like(&session, id)
        .ok_or_else(|| HttpError::not_found(SOURCE, format!("no post with id {id}")))?;

    counter!("folia_engagement_toggle_total", "kind" => "like").increment(1);

    if headers.contains_key(DATASTAR_REQUEST_HEADER) {
        let mut stream = StreamBuilder::new();
        stream.push_signals(
            &json!({"liked": engagement.liked(), "likeCount": engagement.likes()}).to_string(),
        );
        return Ok((jar, stream.into_response()).into_response());
    }

    Ok((
        jar,
        Json(json!({"liked": engagement.liked(), "likeCount": engagement.likes()})),
    )
        .into_response())
}

async fn toggle_bookmark(
    State(state): State<HttpState>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, HttpError> {
    const SOURCE: &str = "infra::http::public::toggle_bookmark";

    let id = parse_post_id(SOURCE, &id)?;
    let (session, jar) = session_from_jar(jar);
    let engagement = state
        .engagement
        .toggle_bookmark(&session, id)
        .ok_or_else(|| HttpError::not_found(SOURCE, format!("no post with id {id}")))?;

    counter!("folia_engagement_toggle_total", "kind" => "bookmark").increment(1);

    if headers.contains_key(DATASTAR_REQUEST_HEADER) {
        let mut stream = StreamBuilder::new();
        stream.push_signals(&json!({"bookmarked": engagement.bookmarked()}).to_string());
        return Ok((jar, stream.into_response()).into_response());
    }

    Ok((jar, Json(json!({"bookmarked": engagement.bookmarked()}))).into_response())
}

#[derive(Debug, Deserialize)]
struct ThemeForm {
    theme: String,
}

async fn set_theme(
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<ThemeForm>,
) -> Response {
    counter!("folia_theme_toggle_total").increment(1);

    let jar = match form.theme.as_str() {
        "light" => jar.add(theme_cookie("light")),
        "dark" => jar.add(theme_cookie("dark")),
        _ => jar.remove(theme_cookie("")),
    };

    (jar, Redirect::to(&back_path(&headers))).into_response()
}

async fn not_found(State(state): State<HttpState>, jar: CookieJar) -> Response {
    counter!("folia_not_found_total").increment(1);
    let chrome = state.chrome.load(theme_from_jar(&jar));
    render_not_found_response(chrome)
}

async fn fallback_redirect() -> Response {
    let mut response = Redirect::to("/not-found").into_response();
    ErrorReport::from_message(
        "infra::http::public::fallback_redirect",
        StatusCode::NOT_FOUND,
        "Unknown route",
    )
    .attach(&mut response);
    response
}

fn theme_from_jar(jar: &CookieJar) -> ThemePreference {
    ThemePreference::from_cookie(jar.get(super::THEME_COOKIE).map(|cookie| cookie.value()))
}

fn parse_post_id(source: &'static str, raw: &str) -> Result<PostId, HttpError> {
    raw.parse::<PostId>()
        .map_err(|err| HttpError::not_found(source, err.to_string()))
}

/// Path-only bounce target for actions that return the reader where they
/// were. Foreign or unparseable referrers fall back to the listing.
fn back_path(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| Url::parse(raw).ok())
        .map(|url| match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        })
        .unwrap_or_else(|| "/blogs".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn back_path_keeps_path_and_query_only() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::REFERER,
            HeaderValue::from_static("http://localhost:3000/blogs?category=Design"),
        );
        assert_eq!(back_path(&headers), "/blogs?category=Design");

        headers.insert(header::REFERER, HeaderValue::from_static("not a url"));
        assert_eq!(back_path(&headers), "/blogs");

        assert_eq!(back_path(&HeaderMap::new()), "/blogs");
    }
}
