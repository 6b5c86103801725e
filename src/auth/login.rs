use axum::{debug_handler, extract::rejection::FormRejection, response::{IntoResponse, Redirect, Response}, Form};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{info, warn};

use crate::{form::required, session::{Identity, SessionHandle}, views::{self, LoginPage}, AppResult};

use super::LOGIN;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginForm {
    username: Option<String>,
    password: Option<String>,
}

#[debug_handler]
pub(crate) async fn login_page() -> AppResult<Response> {
    Ok(views::render(&LoginPage)?.into_response())
}

/// Any non-empty username and password pair is accepted. A body that isn't a
/// urlencoded form counts as an empty one.
#[debug_handler]
pub(crate) async fn login(
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> AppResult<Redirect> {
    if let Err(rejection) = &form {
        warn!(%rejection, "unreadable login form");
    }
    let LoginForm { username, password } = form.map(|Form(form)| form).unwrap_or_default();
    let username = match (required("username", username), required("password", password)) {
        (Ok(username), Ok(_password)) => username,
        (Err(missing), _) | (_, Err(missing)) => {
            warn!(%missing, "login rejected");
            return Ok(Redirect::to(LOGIN));
        }
    };

    info!("welcome {username}");
    session.sign_in(Identity { username }).await?;

    Ok(Redirect::to("/"))
}
