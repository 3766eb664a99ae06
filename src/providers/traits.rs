use crate::error::AcquisitionError;
use crate::providers::types::GenerationRequest;
use async_trait::async_trait;

/// Common trait for hosted generative models
/// Search and the chat assistant only depend on this, so tests can swap in a fake.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one prompt and return the raw text of the first candidate
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AcquisitionError>;

    /// Get the model identifier
    fn model_name(&self) -> &str;
}
