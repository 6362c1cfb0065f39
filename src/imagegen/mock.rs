use super::ImageGenerationService;
use crate::models::GeneratedImage;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type MockOutcome = std::result::Result<GeneratedImage, String>;

#[derive(Clone)]
pub struct MockImageClient {
    responses: Arc<Mutex<Vec<MockOutcome>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<(String, String)>>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_image_url(self, url: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Ok(GeneratedImage::new(url)));
        self
    }

    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The `(api_key, prompt)` pair from the most recent call, if any.
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(&self, api_key: &str, prompt: &str) -> Result<GeneratedImage> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        *self.last_request.lock().unwrap() =
            Some((api_key.to_string(), prompt.to_string()));

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(GeneratedImage::new(
                "https://mock-images.example.com/generated.png",
            ))
        } else {
            let index = (*count - 1) % responses.len();
            match &responses[index] {
                Ok(image) => Ok(image.clone()),
                Err(message) => Err(Error::ImageProvider(message.clone())),
            }
        }
    }
}
