use super::types::{InferenceResponse, Task};
use super::ImageGenerationService;
use crate::models::{Config, GeneratedImage};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "https://api.runware.ai";

/// HTTP client for the hosted image-generation provider.
///
/// No request timeout is configured: a request that never resolves keeps
/// the page's in-flight flag set, matching the page's observed behavior.
pub struct RunwareClient {
    client: Client,
    base_url: String,
    model: String,
    width: u32,
    height: u32,
}

impl RunwareClient {
    pub fn new(model: String, width: u32, height: u32) -> Self {
        Self::new_with_client(model, width, height, Client::new())
    }

    pub fn new_with_client(model: String, width: u32, height: u32, client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
            width,
            height,
        }
    }

    pub fn from_config(config: &Config, client: Client) -> Self {
        let mut built = Self::new_with_client(
            config.image_model.clone(),
            config.image_width,
            config.image_height,
            client,
        );
        built.base_url = config.provider_base_url.clone();
        built
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl ImageGenerationService for RunwareClient {
    async fn generate_image(&self, api_key: &str, prompt: &str) -> Result<GeneratedImage> {
        let task_uuid = Uuid::new_v4().to_string();
        let tasks = vec![
            Task::Authentication {
                api_key: api_key.to_string(),
            },
            Task::ImageInference {
                task_uuid: task_uuid.clone(),
                positive_prompt: prompt.to_string(),
                model: self.model.clone(),
                width: self.width,
                height: self.height,
                number_results: 1,
            },
        ];

        tracing::debug!("Sending image inference request (task {})", task_uuid);

        let url = format!("{}/v1", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&tasks)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to image provider: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Image provider error (status {}): {}", status, error_text);
            return Err(Error::ImageProvider(format!(
                "API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let parsed: InferenceResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse provider response: {}\nBody: {}", e, body);
            Error::ImageProvider(format!("Failed to parse provider response: {}", e))
        })?;

        if let Some(error) = parsed.errors.first() {
            let message = error.message.as_deref().unwrap_or("unknown provider error");
            tracing::error!("Image provider reported an error: {}", message);
            return Err(Error::ImageProvider(message.to_string()));
        }

        let image_url = parsed
            .data
            .iter()
            .find_map(|result| result.image_url.clone())
            .ok_or_else(|| Error::ImageProvider("No image URL in provider response".to_string()))?;

        Ok(GeneratedImage::new(image_url))
    }
}
