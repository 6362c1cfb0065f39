//! Image generation boundary for the landing page call-out
//!
//! Wraps the hosted image-generation provider behind a narrow trait so the
//! concrete provider is swappable and mockable in tests.

pub mod client;
pub mod mock;
pub mod types;

pub use client::RunwareClient;
pub use mock::MockImageClient;

use crate::models::GeneratedImage;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, api_key: &str, prompt: &str) -> Result<GeneratedImage>;
}
