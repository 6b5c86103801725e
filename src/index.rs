use axum::{debug_handler, extract::State, response::Html};
use axum_extra::extract::{cookie::Cookie, CookieJar};

use crate::{auth::LoggedIn, clock::Clock, views::{self, MenuPage}, AppResult, AppState};

pub const LAST_ACCESS: &str = "lastAccess";

/// Menu page. Shows the previous visit before stamping this one.
#[debug_handler(state = AppState)]
pub async fn index(
    LoggedIn(identity): LoggedIn,
    State(clock): State<Clock>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let last_access = jar
        .get(LAST_ACCESS)
        .map(|cookie| cookie.value().to_owned())
        .unwrap_or_else(|| "Never".to_owned());

    let page = views::render(&MenuPage {
        username: &identity.username,
        last_access: &last_access,
    })?;

    let jar = jar.add(Cookie::build((LAST_ACCESS, clock.now()?)).path("/"));
    Ok((jar, page))
}
