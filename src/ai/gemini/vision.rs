use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, InlineData, Part};
use crate::ai::VisionService;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct DescribeRequest {
    contents: Vec<Content>,
}

/// Image description client backed by Gemini `generateContent`.
pub struct GeminiVisionClient {
    http: GeminiHttpClient,
}

impl GeminiVisionClient {
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
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiVisionClient);

#[async_trait]
impl VisionService for GeminiVisionClient {
    async fn describe_image(&self, image: &[u8], instruction: Option<&str>) -> Result<String> {
        tracing::debug!("Describing image ({} bytes) via Gemini", image.len());

        use base64::Engine as _;
        let base64_image = base64::engine::general_purpose::STANDARD.encode(image);

        // Caller instruction goes ahead of the standing description prompt,
        // with the image last.
        let mut parts = Vec::new();
        if let Some(extra) = instruction {
            parts.push(Part::Text {
                text: extra.to_string(),
            });
        }
        parts.push(Part::Text {
            text: prompts::DESCRIBE.to_string(),
        });
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: crate::ai::mime::detect_image_mime(image).to_string(),
                data: base64_image,
            },
        });

        let request = DescribeRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        let response: GenerateContentResponse = self
            .http
            .generate_content(&request)
            .await
            .map_err(Error::Vision)?;

        response
            .first_text()
            .ok_or_else(|| Error::Vision("no text in Gemini vision response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::test_support;
    use wiremock::matchers::body_string_contains;
    use wiremock::{MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-1.5-flash";

    fn make_client(server: &MockServer) -> GeminiVisionClient {
        GeminiVisionClient::new("test-key".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_describe_uses_default_instruction() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("\"inlineData\""))
            .and(body_string_contains("so an artist could recreate it"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "A red fox on a mossy log." }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server);

        let description = client
            .describe_image(&[0x89, 0x50, 0x4E, 0x47], None)
            .await
            .unwrap();
        assert_eq!(description, "A red fox on a mossy log.");
    }

    #[tokio::test]
    async fn test_describe_sends_custom_instruction_with_default_prompt() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("Focus on the foreground."))
            .and(body_string_contains("so an artist could recreate it"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "Red, green, brown." }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server);

        let description = client
            .describe_image(&[0xFF, 0xD8, 0xFF], Some("Focus on the foreground."))
            .await
            .unwrap();
        assert_eq!(description, "Red, green, brown.");
    }

    #[tokio::test]
    async fn test_api_error_returns_vision_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let client = make_client(&server);

        let err = client
            .describe_image(&[0x89, 0x50, 0x4E, 0x47], None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Vision(_)));
    }

    #[tokio::test]
    async fn test_describe_rejects_response_without_text() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": []
            })))
            .mount(&server)
            .await;

        let client = make_client(&server);

        let err = client
            .describe_image(&[0x89, 0x50, 0x4E, 0x47], None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Vision(_)));
    }
}
