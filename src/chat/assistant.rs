use crate::error::AcquisitionError;
use crate::providers::{GenerationRequest, GenerativeModel};
use std::sync::Arc;
use tracing::error;

pub const EMPTY_REPLY: &str = "Bhai, AI busy hai!";
pub const FAILURE_REPLY: &str = "Bhai, search kaam kar raha hai par chatbot busy hai!";

/// Free-form questions answered by the generative model
#[derive(Clone)]
pub struct ModelAssistant {
    model: Option<Arc<dyn GenerativeModel>>,
}

impl ModelAssistant {
    pub fn new(model: Option<Arc<dyn GenerativeModel>>) -> Self {
        Self { model }
    }

    /// Ask the model. Always produces a line of text.
    pub async fn ask(&self, prompt: &str) -> String {
        let Some(model) = &self.model else {
            return FAILURE_REPLY.to_string();
        };

        match model.generate(&GenerationRequest::text(prompt)).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => EMPTY_REPLY.to_string(),
            Err(AcquisitionError::EmptyResponse) => EMPTY_REPLY.to_string(),
            Err(e) => {
                error!("Assistant call failed: {}", e);
                FAILURE_REPLY.to_string()
            }
        }
    }
}
