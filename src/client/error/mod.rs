//! Error types for the society portal client.
//!
//! Errors fall into three groups: client-side validation failures caught before any request,
//! failures reported by the API in its response envelope, and transport failures where the
//! request never produced a usable response. Every error keeps its original cause; the
//! text shown to the user is derived from it by [`Error::user_message`].

pub mod api;
pub mod config;
pub mod validation;

use dioxus_logger::tracing;
use thiserror::Error;

pub use self::{api::ApiError, config::ConfigError, validation::ValidationError};

/// Banner text for failures whose detail should not be shown to the user
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Banner text for transport failures
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";

/// Banner text for responses that arrived but could not be used
pub const BAD_RESPONSE_MESSAGE: &str = "The server sent an unexpected response. Please try again.";

/// Main error type for the society portal client.
#[derive(Error, Debug)]
pub enum Error {
    /// Client-side validation failure; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Request to the society API failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Text shown in the error banner.
    ///
    /// Validation messages and messages reported by the API are shown verbatim; transport
    /// and decoding failures lose their detail in favour of a static fallback. The full
    /// error is logged so the cause is never silently dropped.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => {
                tracing::debug!("Validation failed: {}", err);

                err.to_string()
            }
            Self::Api(ApiError::Api(message)) => {
                tracing::warn!(error = %message, "Society API reported an error");

                message.clone()
            }
            Self::Api(ApiError::Status(status)) => {
                tracing::error!(status, "Society API request failed");

                format!("The server could not complete the request (status {status}). Please try again.")
            }
            Self::Api(err @ (ApiError::Decode(_) | ApiError::MissingData(_))) => {
                tracing::error!("{}", err);

                BAD_RESPONSE_MESSAGE.to_string()
            }
            Self::Api(err @ ApiError::Transport(_)) => {
                tracing::error!("{}", err);

                NETWORK_FAILURE_MESSAGE.to_string()
            }
            Self::Api(err @ ApiError::UploadUnsupported(_)) => {
                tracing::error!("{}", err);

                GENERIC_FAILURE_MESSAGE.to_string()
            }
            Self::Config(err) => {
                tracing::error!("{}", err);

                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Logs the error and returns a fixed message instead of its detail.
    ///
    /// Used by flows whose banner must stay generic regardless of the cause.
    pub fn generic_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            err => {
                tracing::error!("{}", err);

                fallback.to_string()
            }
        }
    }
}
