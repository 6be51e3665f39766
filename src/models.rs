//! Data models and configuration
//!
//! Defines the restyle outcome shape and the process-wide configuration
//! struct resolved once at startup.

use crate::{Error, Result};

/// Environment variable names tried, in order, for the vision/chat key.
const VISION_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

const DEFAULT_CHAT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_VISION_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Outcome of a successful restyle run.
#[derive(Debug, Clone)]
pub struct RestyledImage {
    /// Composed prompt submitted to the generation service.
    pub prompt: String,
    /// Raw bytes of the generated image.
    pub bytes: Vec<u8>,
    /// Source URL when the generation service returned one.
    pub url: Option<String>,
}

/// Process-wide configuration resolved once at startup.
///
/// Components receive this by reference; nothing reads ambient environment
/// state after construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub openai_api_key: String,
    pub chat_model: String,
    pub vision_model: String,
    pub image_model: String,
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through a lookup function. Split out from
    /// [`Config::from_env`] so key resolution is testable without touching
    /// the process environment.
    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let gemini_api_key = first_present(&lookup, &VISION_KEY_VARS).ok_or_else(|| {
            Error::Config(format!("none of {} are set", VISION_KEY_VARS.join(" / ")))
        })?;
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Config("OPENAI_API_KEY not set".to_string()))?;

        Ok(Self {
            gemini_api_key,
            openai_api_key,
            chat_model: lookup("CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            vision_model: lookup("VISION_MODEL")
                .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
            image_model: lookup("IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
        })
    }
}

fn first_present(lookup: &impl Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.is_empty()))
}
