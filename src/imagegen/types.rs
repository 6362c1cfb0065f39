//! Wire payloads for the hosted image-generation provider.

use serde::{Deserialize, Serialize};

/// Task objects posted to the provider. Each request body is a JSON array
/// of these, with the authentication task first.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "taskType")]
pub enum Task {
    #[serde(rename = "authentication")]
    Authentication {
        #[serde(rename = "apiKey")]
        api_key: String,
    },
    #[serde(rename = "imageInference")]
    ImageInference {
        #[serde(rename = "taskUUID")]
        task_uuid: String,
        #[serde(rename = "positivePrompt")]
        positive_prompt: String,
        model: String,
        width: u32,
        height: u32,
        #[serde(rename = "numberResults")]
        number_results: u32,
    },
}

/// Top-level response envelope. Successful results land in `data`;
/// provider-reported failures arrive in `errors`, sometimes with a 200
/// status.
#[derive(Debug, Deserialize)]
pub struct InferenceResponse {
    #[serde(default)]
    pub data: Vec<TaskResult>,
    #[serde(default)]
    pub errors: Vec<TaskError>,
}

#[derive(Debug, Deserialize)]
pub struct TaskResult {
    #[serde(rename = "taskType")]
    pub task_type: Option<String>,
    #[serde(rename = "taskUUID")]
    pub task_uuid: Option<String>,
    #[serde(rename = "imageUUID")]
    pub image_uuid: Option<String>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TaskError {
    pub code: Option<String>,
    pub message: Option<String>,
}
