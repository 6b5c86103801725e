use std::{fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{Context, anyhow};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub session_idle_minutes: i64,
    pub secure_cookies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3000,
            static_dir: PathBuf::from("public"),
            session_idle_minutes: 30,
            secure_cookies: false,
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let session_idle_minutes = try_load(&lookup, "SESSION_IDLE_MINUTES", defaults.session_idle_minutes)?;
        if session_idle_minutes <= 0 {
            return Err(anyhow!("SESSION_IDLE_MINUTES must be positive, got {session_idle_minutes}"));
        }

        Ok(Self {
            host: try_load(&lookup, "HOST", defaults.host)?,
            port: try_load(&lookup, "PORT", defaults.port)?,
            static_dir: try_load(&lookup, "STATIC_DIR", defaults.static_dir.display().to_string())?.into(),
            session_idle_minutes,
            secure_cookies: try_load(&lookup, "SECURE_COOKIES", defaults.secure_cookies)?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key} value {raw:?}")),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
