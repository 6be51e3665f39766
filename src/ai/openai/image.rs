use super::client::OpenAiHttpClient;
use super::types::{ImageGenerationRequest, ImageGenerationResponse};
use crate::ai::{GeneratedImage, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

const IMAGE_SIZE: &str = "1024x1024";
const IMAGE_QUALITY: &str = "standard";

/// Image generation client backed by the OpenAI Images API.
pub struct OpenAiImageClient {
    http: OpenAiHttpClient,
    model: String,
}

impl OpenAiImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: OpenAiHttpClient::new_with_client(api_key, Duration::from_secs(120), client),
            model,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl ImageGenerationService for OpenAiImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage> {
        tracing::debug!("Generating image from prompt ({} chars)", prompt.len());

        let request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: IMAGE_SIZE.to_string(),
            quality: IMAGE_QUALITY.to_string(),
        };

        let response: ImageGenerationResponse = self
            .http
            .post("/v1/images/generations", &request)
            .await
            .map_err(Error::Generation)?;

        let image_data = response
            .data
            .first()
            .ok_or_else(|| Error::Generation("no image data in OpenAI response".to_string()))?;

        if let Some(b64_json) = &image_data.b64_json {
            use base64::Engine as _;
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(b64_json)
                .map_err(|e| Error::Generation(format!("failed to decode base64 image: {}", e)))?;

            Ok(GeneratedImage {
                bytes,
                url: image_data.url.clone(),
            })
        } else if let Some(url) = &image_data.url {
            let bytes = self
                .http
                .get_bytes(url)
                .await
                .map_err(Error::Generation)?;

            Ok(GeneratedImage {
                bytes,
                url: Some(url.clone()),
            })
        } else {
            Err(Error::Generation(
                "no image data (neither base64 nor URL) in response".to_string(),
            ))
        }
    }
}
