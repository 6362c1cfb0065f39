//! Application orchestration between page state and the image provider.

use crate::imagegen::{ImageGenerationService, RunwareClient};
use crate::models::{Config, GeneratedImage, Notice};
use crate::page::{reduce, Action, PageState};
use crate::{Error, Result};
use tracing::{info, warn};

/// Owns the page state and the provider boundary; applies user actions and
/// drives the single asynchronous generation cycle.
pub struct App {
    imagegen: Box<dyn ImageGenerationService>,
    state: PageState,
}

impl App {
    /// Build an app from a concrete provider client.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_service(imagegen: Box<dyn ImageGenerationService>) -> Self {
        Self {
            imagegen,
            state: PageState::default(),
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        info!(
            "Image provider: {} ({}x{})",
            config.image_model, config.image_width, config.image_height
        );

        let http_client = reqwest::Client::new();
        Ok(Self::with_service(Box::new(RunwareClient::from_config(
            &config,
            http_client,
        ))))
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Apply a synchronous page action.
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    /// Submit the BMI form and return the displayed result, if any.
    pub fn submit_bmi(&mut self) -> Option<f64> {
        self.dispatch(Action::BmiSubmitted);
        self.state.bmi.result
    }

    /// Run one image-generation cycle against the provider.
    ///
    /// Preconditions are checked in order before any network activity: a
    /// non-empty API key, then a non-empty prompt. Each failure raises an
    /// error notice and issues zero requests, as does a trigger while a
    /// request is already outstanding. Failures are not retried.
    pub async fn generate_image(&mut self) -> Result<GeneratedImage> {
        if self.state.studio.api_key.is_empty() {
            return Err(self.reject(Error::MissingCredential));
        }
        if self.state.studio.prompt.is_empty() {
            return Err(self.reject(Error::MissingPrompt));
        }
        if self.state.studio.in_flight {
            return Err(self.reject(Error::GenerationInFlight));
        }

        self.dispatch(Action::GenerationStarted);

        let api_key = self.state.studio.api_key.clone();
        let prompt = self.state.studio.prompt.clone();
        info!("Generating image for prompt ({} chars)", prompt.len());

        match self.imagegen.generate_image(&api_key, &prompt).await {
            Ok(image) => {
                info!("Image generated: {}", image.url);
                self.dispatch(Action::GenerationSucceeded(image.clone()));
                Ok(image)
            }
            Err(e) => {
                warn!("Image generation failed: {}", e);
                self.dispatch(Action::GenerationFailed(
                    "Failed to generate image. Please try again.".to_string(),
                ));
                Err(e)
            }
        }
    }

    fn reject(&mut self, error: Error) -> Error {
        warn!("Generation rejected: {}", error);
        self.dispatch(Action::NoticeRaised(Notice::error(error.to_string())));
        error
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::imagegen::MockImageClient;
    use crate::models::NoticeKind;
    use crate::page::Action;
    use crate::Error;

    fn build_test_app(imagegen: MockImageClient) -> App {
        App::with_service(Box::new(imagegen))
    }

    fn ready_app(imagegen: MockImageClient) -> App {
        let mut app = build_test_app(imagegen);
        app.dispatch(Action::ApiKeyChanged("key".to_string()));
        app.dispatch(Action::PromptChanged("a salad".to_string()));
        app
    }

    #[tokio::test]
    async fn test_generate_image_requires_api_key() {
        let imagegen = MockImageClient::new();
        let probe = imagegen.clone();
        let mut app = build_test_app(imagegen);
        app.dispatch(Action::PromptChanged("a salad".to_string()));

        let err = app.generate_image().await.unwrap_err();
        assert!(matches!(err, Error::MissingCredential));
        assert_eq!(probe.get_call_count(), 0);
        assert_eq!(
            app.state().studio.notice.as_ref().map(|n| n.kind),
            Some(NoticeKind::Error)
        );
        assert!(!app.state().studio.in_flight);
    }

    #[tokio::test]
    async fn test_generate_image_requires_prompt() {
        let imagegen = MockImageClient::new();
        let probe = imagegen.clone();
        let mut app = build_test_app(imagegen);
        app.dispatch(Action::ApiKeyChanged("key".to_string()));

        let err = app.generate_image().await.unwrap_err();
        assert!(matches!(err, Error::MissingPrompt));
        assert_eq!(probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_image_checks_credential_before_prompt() {
        let mut app = build_test_app(MockImageClient::new());

        let err = app.generate_image().await.unwrap_err();
        assert!(matches!(err, Error::MissingCredential));
    }

    #[tokio::test]
    async fn test_generate_image_rejects_duplicate_trigger() {
        let imagegen = MockImageClient::new();
        let probe = imagegen.clone();
        let mut app = ready_app(imagegen);
        app.dispatch(Action::GenerationStarted);

        let err = app.generate_image().await.unwrap_err();
        assert!(matches!(err, Error::GenerationInFlight));
        assert_eq!(probe.get_call_count(), 0);
        // The outstanding request stays in flight.
        assert!(app.state().studio.in_flight);
    }

    #[tokio::test]
    async fn test_generate_image_stores_result() {
        let imagegen = MockImageClient::new().with_image_url("https://example/img.png");
        let probe = imagegen.clone();
        let mut app = ready_app(imagegen);

        let image = app.generate_image().await.unwrap();
        assert_eq!(image.url, "https://example/img.png");
        assert_eq!(probe.get_call_count(), 1);
        assert_eq!(
            probe.last_request(),
            Some(("key".to_string(), "a salad".to_string()))
        );

        let studio = &app.state().studio;
        assert!(!studio.in_flight);
        assert_eq!(studio.image.as_ref().map(|i| i.url.as_str()), Some("https://example/img.png"));
        assert_eq!(
            studio.notice.as_ref().map(|n| n.kind),
            Some(NoticeKind::Success)
        );
    }

    #[tokio::test]
    async fn test_generate_image_failure_keeps_prior_image() {
        let imagegen = MockImageClient::new()
            .with_image_url("https://example/first.png")
            .with_failure("provider down");
        let mut app = ready_app(imagegen);

        app.generate_image().await.unwrap();

        let err = app.generate_image().await.unwrap_err();
        assert!(matches!(err, Error::ImageProvider(_)));

        let studio = &app.state().studio;
        assert!(!studio.in_flight);
        assert_eq!(
            studio.image.as_ref().map(|i| i.url.as_str()),
            Some("https://example/first.png")
        );
        assert_eq!(
            studio.notice.as_ref().map(|n| n.kind),
            Some(NoticeKind::Error)
        );
    }

    #[test]
    fn test_submit_bmi_round_trip() {
        let mut app = build_test_app(MockImageClient::new());
        app.dispatch(Action::WeightChanged("70".to_string()));
        app.dispatch(Action::HeightChanged("1.75".to_string()));

        assert_eq!(app.submit_bmi(), Some(22.9));

        // Invalid follow-up input keeps the displayed result.
        app.dispatch(Action::HeightChanged("".to_string()));
        assert_eq!(app.submit_bmi(), Some(22.9));
    }
}
