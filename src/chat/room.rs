use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};

use crate::{auth::LoggedIn, users::Registry, views::{self, ChatPage}, AppResult, AppState};

use super::MessageLog;

#[debug_handler(state = AppState)]
pub(crate) async fn chat(
    _: LoggedIn,
    State(users): State<Registry>,
    State(messages): State<MessageLog>,
) -> AppResult<Response> {
    let users = users.snapshot().await;
    let messages = messages.snapshot().await;

    Ok(views::render(&ChatPage { users: &users, messages: &messages })?.into_response())
}
