mod page;

use axum::{routing::{get, post}, Router};

use crate::{store::AppendLog, AppState};

use page::{register, register_page};

/// A registered user. Nicknames are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub full_name: String,
    pub birth_date: String,
    pub nickname: String,
}

pub type Registry = AppendLog<UserProfile>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cadastroUsuario", get(register_page))
        .route("/cadastrarUsuario", post(register))
}
