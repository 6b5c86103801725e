use std::future::Future;

use serde::{Deserialize, Serialize};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::{config::Config, AppResult};

pub const USER: &str = "user";

/// Who a browser is logged in as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

/// Reading, binding and destroying the identity attached to a client.
pub trait SessionHandle {
    fn identity(&self) -> impl Future<Output = AppResult<Option<Identity>>> + Send;
    fn sign_in(&self, identity: Identity) -> impl Future<Output = AppResult<()>> + Send;
    fn destroy(&self) -> impl Future<Output = AppResult<()>> + Send;
}

impl SessionHandle for Session {
    async fn identity(&self) -> AppResult<Option<Identity>> {
        Ok(self.get::<Identity>(USER).await?)
    }

    async fn sign_in(&self, identity: Identity) -> AppResult<()> {
        self.cycle_id().await?;
        self.insert(USER, identity).await?;
        Ok(())
    }

    async fn destroy(&self) -> AppResult<()> {
        self.flush().await?;
        Ok(())
    }
}

pub fn layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(config.session_idle_minutes)))
}
