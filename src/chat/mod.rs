mod msg;
mod room;

use axum::{routing::{get, post}, Router};

use crate::{store::AppendLog, AppState};

use msg::post_message;
use room::chat;

/// One posted message. The author is whatever nickname was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub timestamp: String,
}

pub type MessageLog = AppendLog<ChatMessage>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", get(chat))
        .route("/postarMensagem", post(post_message))
}
