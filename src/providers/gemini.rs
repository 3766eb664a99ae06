use crate::config::Config;
use crate::error::AcquisitionError;
use crate::providers::traits::GenerativeModel;
use crate::providers::types::{GenerateContentBody, GenerateContentResponse, GenerationRequest};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Google Gemini client over the public REST API
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn with_endpoint(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from config, or `None` when no key is configured
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        match &config.api_key {
            Some(key) => Ok(Some(Self::with_endpoint(
                key.clone(),
                config.model.clone(),
                config.base_url.clone(),
                config.request_timeout,
            )?)),
            None => Ok(None),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AcquisitionError> {
        let url = self.endpoint();
        debug!("Calling {} ({} prompt bytes)", url, request.prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentBody::from_request(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini returned status: {}", status);
            return Err(AcquisitionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        payload.text().ok_or(AcquisitionError::EmptyResponse)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
