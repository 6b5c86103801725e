pub mod auth;
pub mod chat;
pub mod clock;
pub mod config;
pub mod form;
pub mod index;
pub mod session;
pub mod store;
pub mod users;
pub mod views;

use axum::{extract::FromRef, http::StatusCode, response::{IntoResponse, Response}, routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{chat::MessageLog, clock::Clock, config::Config, users::Registry};

/// Everything handlers share. Cloning is cheap; the stores are reference counted.
#[derive(Clone, Default, FromRef)]
pub struct AppState {
    pub users: Registry,
    pub messages: MessageLog,
    pub clock: Clock,
}

/// Builds the full application: routes, static fallback, sessions and request tracing.
pub fn app(config: &Config, state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .merge(auth::router())
        .merge(users::router())
        .merge(chat::router())
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(session::layer(config))
        .layer(TraceLayer::new_for_http())
}

pub type AppResult<T> = Result<T, AppError>;
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "something went wrong").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
