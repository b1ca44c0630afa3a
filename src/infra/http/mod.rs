mod middleware;
mod public;

pub use public::{HttpState, build_router};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

const DATASTAR_REQUEST_HEADER: &str = "datastar-request";

const SESSION_COOKIE: &str = "folia_session";
const THEME_COOKIE: &str = "theme";

/// Resolve the engagement session id, minting a cookie when the browser
/// does not carry one yet. Returns the id and the jar to send back.
fn session_from_jar(jar: CookieJar) -> (String, CookieJar) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return (cookie.value().to_string(), jar);
    }

    let id = Uuid::new_v4().to_string();
    let mut cookie = Cookie::new(SESSION_COOKIE, id.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    (id, jar.add(cookie))
}

fn theme_cookie(value: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::new(THEME_COOKIE, value);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie
}
