//! Typed pages. Each struct is bound to a template under `templates/`.

use askama::Template;
use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};

use crate::{chat::ChatMessage, users::UserProfile, AppResult};

pub fn render(page: &impl Template) -> AppResult<Html<String>> {
    Ok(Html(page.render()?))
}

/// Renders the plain error page used when a submission is rejected.
pub fn rejected(message: &'static str) -> AppResult<Response> {
    Ok((StatusCode::BAD_REQUEST, render(&ErrorPage { message })?).into_response())
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage;

#[derive(Template)]
#[template(path = "index.html")]
pub struct MenuPage<'a> {
    pub username: &'a str,
    pub last_access: &'a str,
}

#[derive(Template)]
#[template(path = "users/new.html")]
pub struct RegisterPage;

#[derive(Template)]
#[template(path = "users/registered.html")]
pub struct RegisteredPage<'a> {
    pub users: &'a [UserProfile],
}

#[derive(Template)]
#[template(path = "chat.html")]
pub struct ChatPage<'a> {
    pub users: &'a [UserProfile],
    pub messages: &'a [ChatMessage],
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub message: &'static str,
}
