//! Application orchestration for the restyle and chat flows.

use crate::ai::{
    ChatService, GeminiChatClient, GeminiVisionClient, ImageGenerationService, OpenAiImageClient,
    VisionService,
};
use crate::models::{Config, RestyledImage};
use crate::{compose, Error, Result};
use tracing::info;

/// Coordinates the vision, chat, and image-generation services.
///
/// The restyle flow chains vision and generation: describe the input image,
/// build a generation prompt from the description, then generate.
pub struct App {
    chat: Box<dyn ChatService>,
    vision: Box<dyn VisionService>,
    image_gen: Box<dyn ImageGenerationService>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub chat: Box<dyn ChatService>,
    pub vision: Box<dyn VisionService>,
    pub image_gen: Box<dyn ImageGenerationService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and harnesses that
    /// need to inject mocks.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            chat: services.chat,
            vision: services.vision,
            image_gen: services.image_gen,
        }
    }

    /// Construct an app from resolved configuration.
    pub fn new(config: &Config) -> Self {
        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::new();

        info!("Chat model: {}", config.chat_model);
        info!("Vision model: {}", config.vision_model);
        info!("Image model: {}", config.image_model);

        Self::with_services(AppServices {
            chat: Box::new(GeminiChatClient::new_with_client(
                config.gemini_api_key.clone(),
                config.chat_model.clone(),
                http_client.clone(),
            )),
            vision: Box::new(GeminiVisionClient::new_with_client(
                config.gemini_api_key.clone(),
                config.vision_model.clone(),
                http_client.clone(),
            )),
            image_gen: Box::new(OpenAiImageClient::new_with_client(
                config.openai_api_key.clone(),
                config.image_model.clone(),
                http_client,
            )),
        })
    }

    /// Describe `image`, compose a restyle prompt from the description, and
    /// generate the restyled result.
    ///
    /// `instruction` is extra guidance forwarded to the vision service
    /// alongside its standing description prompt. No generation request is
    /// made when description cleanup leaves nothing usable.
    pub async fn restyle_image(
        &self,
        image: &[u8],
        style: &str,
        instruction: Option<&str>,
    ) -> Result<RestyledImage> {
        if image.is_empty() {
            return Err(Error::InvalidInput("image data is empty".to_string()));
        }
        let style = style.trim();
        if style.is_empty() {
            return Err(Error::InvalidInput("style must not be empty".to_string()));
        }

        let description = self.vision.describe_image(image, instruction).await?;
        info!(
            "Vision description received ({} chars)",
            description.chars().count()
        );

        let prompt = compose::restyle_prompt(&description, style)?;
        info!(
            "Composed generation prompt ({} chars)",
            prompt.chars().count()
        );

        let generated = self.image_gen.generate_image(&prompt).await?;
        info!("Generated image ({} bytes)", generated.bytes.len());

        Ok(RestyledImage {
            prompt,
            bytes: generated.bytes,
            url: generated.url,
        })
    }

    /// Answer a free-form text question.
    pub async fn chat(&self, question: &str) -> Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::InvalidInput("question must not be empty".to_string()));
        }

        self.chat.ask(question).await
    }

    /// Answer a question about the supplied image.
    pub async fn chat_with_image(&self, question: &str, image: &[u8]) -> Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::InvalidInput("question must not be empty".to_string()));
        }
        if image.is_empty() {
            return Err(Error::InvalidInput("image data is empty".to_string()));
        }

        self.chat.ask_with_image(question, image).await
    }
}
