use axum::{extract::FromRequestParts, http::request::Parts, response::{IntoResponse, Redirect, Response}};
use tower_sessions::Session;
use tracing::debug;

use crate::session::{Identity, SessionHandle};

use super::LOGIN;

/// Gate for protected routes: without a session identity the request is
/// redirected to the login page and the handler never runs.
#[derive(Debug, Clone)]
pub struct LoggedIn(pub Identity);

impl<S> FromRequestParts<S> for LoggedIn
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match session.identity().await {
            Ok(Some(identity)) => Ok(Self(identity)),
            Ok(None) => {
                debug!(path = parts.uri.path(), "not logged in");
                Err(Redirect::to(LOGIN).into_response())
            }
            Err(err) => Err(err.into_response()),
        }
    }
}
