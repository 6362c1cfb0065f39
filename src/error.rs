//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Please enter your API key")]
    MissingCredential,

    #[error("Please enter a prompt")]
    MissingPrompt,

    #[error("A generation request is already in flight")]
    GenerationInFlight,

    #[error("Image provider error: {0}")]
    ImageProvider(String),

    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
