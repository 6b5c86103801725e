use axum::{debug_handler, extract::{rejection::FormRejection, State}, response::{IntoResponse, Response}, Form};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    auth::LoggedIn,
    form::{required, MissingField},
    views::{self, RegisterPage, RegisteredPage},
    AppResult, AppState,
};

use super::{Registry, UserProfile};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RegisterForm {
    nome: Option<String>,
    #[serde(rename = "dataNascimento")]
    data_nascimento: Option<String>,
    nickname: Option<String>,
}

impl RegisterForm {
    /// The birth date is only checked for presence, not format.
    pub(crate) fn into_profile(self) -> Result<UserProfile, MissingField> {
        Ok(UserProfile {
            full_name: required("nome", self.nome)?,
            birth_date: required("dataNascimento", self.data_nascimento)?,
            nickname: required("nickname", self.nickname)?,
        })
    }
}

#[debug_handler]
pub(crate) async fn register_page(_: LoggedIn) -> AppResult<Response> {
    Ok(views::render(&RegisterPage)?.into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn register(
    LoggedIn(identity): LoggedIn,
    State(users): State<Registry>,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> AppResult<Response> {
    if let Err(rejection) = &form {
        warn!(%rejection, "unreadable registration form");
    }
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let profile = match form.into_profile() {
        Ok(profile) => profile,
        Err(missing) => {
            warn!(%missing, by = %identity.username, "registration rejected");
            return views::rejected("Registration failed! Every field is required.");
        }
    };

    info!(nickname = %profile.nickname, by = %identity.username, "registered user");
    users.push(profile).await;

    let users = users.snapshot().await;
    Ok(views::render(&RegisteredPage { users: &users })?.into_response())
}
