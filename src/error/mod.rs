//! Error types for startup and Discord operations.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors; it is
//! the error returned from `main` when startup fails. Event handlers never
//! propagate an `AppError` past the event loop, they log it and continue.

pub mod config;
pub mod storage;

use thiserror::Error;

use crate::error::{config::ConfigError, storage::StorageError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Object storage API error during bucket setup or icon upload.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Serenity's error type would otherwise make
    /// every AppError variant larger.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Voice channel join failure from songbird.
    #[error(transparent)]
    JoinErr(#[from] songbird::error::JoinError),

    /// Filesystem error while reading music or icon files.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
