//! Environment-based application configuration.
//!
//! All credentials and paths are read from the environment once during
//! startup. A `.env` file is loaded by `main` before `Config::from_env` runs,
//! so local development can keep secrets out of the shell environment.

use std::path::PathBuf;

use sentry::types::Dsn;
use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_MUSIC_DIR: &str = "music";
const DEFAULT_ICONS_DIR: &str = "icons";

pub struct Config {
    /// Discord bot token used to authenticate the gateway connection.
    pub bot_token: String,

    /// DSN for the error reporting service.
    pub sentry_dsn: Dsn,

    /// Base URL of the object storage deployment.
    pub supabase_url: Url,
    /// Service key for the object storage API.
    pub supabase_key: String,

    /// Directory scanned for MP3 files at startup.
    pub music_dir: PathBuf,
    /// Directory of PNG icons uploaded to the storage bucket at startup.
    pub icons_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let supabase_url = require("SUPABASE_URL")?;
        let sentry_dsn = require("SENTRY_DSN")?;

        Ok(Self {
            bot_token: require("BOT_TOKEN")?,
            sentry_dsn: sentry_dsn.parse().map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "SENTRY_DSN".to_string(),
                    reason: "not a valid DSN".to_string(),
                }
            })?,
            supabase_url: Url::parse(&supabase_url).map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "SUPABASE_URL".to_string(),
                    reason: e.to_string(),
                }
            })?,
            supabase_key: require("SUPABASE_KEY")?,
            music_dir: optional("MUSIC_DIR", DEFAULT_MUSIC_DIR),
            icons_dir: optional("ICONS_DIR", DEFAULT_ICONS_DIR),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> PathBuf {
    std::env::var(name).unwrap_or_else(|_| default.to_string()).into()
}
