//! AI service clients
//!
//! Capability traits for the external generative services, the concrete
//! Gemini and OpenAI clients behind them, and mocks for tests. The rest of
//! the application depends only on the traits.

use async_trait::async_trait;

use crate::Result;

pub mod gemini;
pub mod mime;
pub mod mock;
pub mod openai;

pub use gemini::{GeminiChatClient, GeminiVisionClient};
pub use mock::{MockChatClient, MockImageGenerationClient, MockVisionClient};
pub use openai::OpenAiImageClient;

/// Conversational text service. Both methods return the model's reply as
/// plain text.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Answer a free-form text question.
    async fn ask(&self, question: &str) -> Result<String>;

    /// Answer a question about the supplied image bytes.
    async fn ask_with_image(&self, question: &str, image: &[u8]) -> Result<String>;
}

/// Image understanding service.
#[async_trait]
pub trait VisionService: Send + Sync {
    /// Describe the supplied image bytes. When `instruction` is `Some` it is
    /// passed to the service ahead of the standing description prompt.
    async fn describe_image(&self, image: &[u8], instruction: Option<&str>) -> Result<String>;
}

/// Text-to-image generation service.
#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate one image from a text prompt.
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage>;
}

/// Image produced by a generation service.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Raw image bytes, always populated.
    pub bytes: Vec<u8>,
    /// Hosted URL when the provider returned one.
    pub url: Option<String>,
}
