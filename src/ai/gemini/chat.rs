use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, InlineData, Part};
use crate::ai::ChatService;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest {
    contents: Vec<Content>,
}

/// Conversational client backed by Gemini `generateContent`.
pub struct GeminiChatClient {
    http: GeminiHttpClient,
}

impl GeminiChatClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }

    async fn send(&self, contents: Vec<Content>) -> Result<String> {
        let request = ChatRequest { contents };
        let response: GenerateContentResponse = self
            .http
            .generate_content(&request)
            .await
            .map_err(Error::Chat)?;

        response
            .first_text()
            .ok_or_else(|| Error::Chat("no text in Gemini chat response".to_string()))
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiChatClient);

#[async_trait]
impl ChatService for GeminiChatClient {
    async fn ask(&self, question: &str) -> Result<String> {
        tracing::debug!("Asking Gemini a text question ({} chars)", question.len());

        self.send(vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part::Text {
                text: question.to_string(),
            }],
        }])
        .await
    }

    async fn ask_with_image(&self, question: &str, image: &[u8]) -> Result<String> {
        tracing::debug!(
            "Asking Gemini about an image ({} bytes): {} chars of question",
            image.len(),
            question.len()
        );

        use base64::Engine as _;
        let base64_image = base64::engine::general_purpose::STANDARD.encode(image);

        self.send(vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: crate::ai::mime::detect_image_mime(image).to_string(),
                        data: base64_image,
                    },
                },
                Part::Text {
                    text: question.to_string(),
                },
            ],
        }])
        .await
    }
}
