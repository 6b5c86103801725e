use axum::{debug_handler, response::Redirect};
use axum_extra::extract::{cookie::Cookie, CookieJar};
use tower_sessions::Session;
use tracing::info;

use crate::{index::LAST_ACCESS, session::SessionHandle, AppResult};

use super::LOGIN;

#[debug_handler]
pub(crate) async fn logout(
    session: Session,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    if let Some(identity) = session.identity().await? {
        info!("goodbye {}", identity.username);
    }
    session.destroy().await?;

    let jar = jar.remove(Cookie::build(LAST_ACCESS).path("/"));
    Ok((jar, Redirect::to(LOGIN)))
}
