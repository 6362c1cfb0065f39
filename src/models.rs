//! Data models and structures
//!
//! Defines the shared value objects for generated images, user-facing
//! notices, and environment configuration.

use serde::{Deserialize, Serialize};

/// Reference to an image produced by the hosted provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
}

impl GeneratedImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-facing notification raised by page actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            body: body.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            body: body.into(),
            kind: NoticeKind::Error,
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API key used by the CLI when none is passed explicitly. The page
    /// itself always takes the key from user input.
    pub api_key: Option<String>,
    pub provider_base_url: String,
    pub image_model: String,
    pub image_width: u32,
    pub image_height: u32,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let image_width = parse_dimension("IMAGE_WIDTH", 1024)?;
        let image_height = parse_dimension("IMAGE_HEIGHT", 1024)?;

        Ok(Self {
            api_key: std::env::var("RUNWARE_API_KEY").ok(),
            provider_base_url: std::env::var("RUNWARE_BASE_URL")
                .unwrap_or_else(|_| "https://api.runware.ai".to_string()),
            image_model: std::env::var("RUNWARE_MODEL")
                .unwrap_or_else(|_| "runware:100@1".to_string()),
            image_width,
            image_height,
        })
    }
}

fn parse_dimension(var: &str, default: u32) -> crate::Result<u32> {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(crate::Error::Generic(format!(
                "{} must be a positive integer",
                var
            ))),
        },
        Err(_) => Ok(default),
    }
}
