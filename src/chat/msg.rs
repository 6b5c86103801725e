use axum::{debug_handler, extract::{rejection::FormRejection, State}, response::{IntoResponse, Redirect, Response}, Form};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{auth::LoggedIn, clock::Clock, form::required, views, AppResult, AppState};

use super::{ChatMessage, MessageLog};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostMessageForm {
    usuario: Option<String>,
    mensagem: Option<String>,
}

/// The author is not checked against the registry. An unreadable body is
/// treated as an empty form.
#[debug_handler(state = AppState)]
pub(crate) async fn post_message(
    LoggedIn(identity): LoggedIn,
    State(messages): State<MessageLog>,
    State(clock): State<Clock>,
    form: Result<Form<PostMessageForm>, FormRejection>,
) -> AppResult<Response> {
    if let Err(rejection) = &form {
        warn!(%rejection, "unreadable message form");
    }
    let PostMessageForm { usuario, mensagem } = form.map(|Form(form)| form).unwrap_or_default();

    let (author, text) = match (required("usuario", usuario), required("mensagem", mensagem)) {
        (Ok(author), Ok(text)) => (author, text),
        (Err(missing), _) | (_, Err(missing)) => {
            warn!(%missing, by = %identity.username, "message rejected");
            return views::rejected("Could not send the message. Try again.");
        }
    };

    let message = ChatMessage { author, text, timestamp: clock.now()? };
    info!(author = %message.author, by = %identity.username, "message posted");
    messages.push(message).await;

    Ok(Redirect::to("/chat").into_response())
}
