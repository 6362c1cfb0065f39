//! Page state and the single update function applied per user action
//!
//! All page behavior is expressed as explicit value objects folded through
//! a pure reducer; the async provider call lives in [`crate::app`] and
//! feeds its outcome back here as actions.

use crate::bmi;
use crate::models::{GeneratedImage, Notice};
use serde::{Deserialize, Serialize};

/// State of the BMI calculator form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BmiPanel {
    pub weight: String,
    pub height: String,
    pub result: Option<f64>,
}

/// State of the image-generation call-out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudioPanel {
    pub api_key: String,
    pub prompt: String,
    pub image: Option<GeneratedImage>,
    pub in_flight: bool,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageState {
    pub bmi: BmiPanel,
    pub studio: StudioPanel,
}

/// One user action (or provider outcome) applied to the page.
#[derive(Debug, Clone)]
pub enum Action {
    WeightChanged(String),
    HeightChanged(String),
    BmiSubmitted,
    ApiKeyChanged(String),
    PromptChanged(String),
    GenerationStarted,
    GenerationSucceeded(GeneratedImage),
    GenerationFailed(String),
    /// Raise a notice without touching the rest of the studio state, used
    /// for triggers rejected before any request is issued.
    NoticeRaised(Notice),
}

/// Apply one action to the page state, producing the next state.
pub fn reduce(mut state: PageState, action: Action) -> PageState {
    match action {
        Action::WeightChanged(weight) => {
            state.bmi.weight = weight;
        }
        Action::HeightChanged(height) => {
            state.bmi.height = height;
        }
        Action::BmiSubmitted => {
            // Invalid input is a silent no-op: the prior result stays.
            if let Ok(value) = bmi::calculate(&state.bmi.weight, &state.bmi.height) {
                state.bmi.result = Some(value);
            }
        }
        Action::ApiKeyChanged(api_key) => {
            state.studio.api_key = api_key;
        }
        Action::PromptChanged(prompt) => {
            state.studio.prompt = prompt;
        }
        Action::GenerationStarted => {
            state.studio.in_flight = true;
            state.studio.notice = None;
        }
        Action::GenerationSucceeded(image) => {
            state.studio.image = Some(image);
            state.studio.in_flight = false;
            state.studio.notice = Some(Notice::success("Image generated successfully!"));
        }
        Action::GenerationFailed(message) => {
            // A failed request never clears a previously generated image.
            state.studio.in_flight = false;
            state.studio.notice = Some(Notice::error(message));
        }
        Action::NoticeRaised(notice) => {
            state.studio.notice = Some(notice);
        }
    }

    state
}
