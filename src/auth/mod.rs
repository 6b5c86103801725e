mod guard;
mod login;
mod logout;

use axum::{routing::get, Router};

use crate::AppState;

pub use guard::LoggedIn;
use login::{login, login_page};
use logout::logout;

pub const LOGIN: &str = "/login";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(LOGIN, get(login_page).post(login))
        .route("/logout", get(logout))
}
