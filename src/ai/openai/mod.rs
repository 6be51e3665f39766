//! OpenAI REST API client
//!
//! Image generation via the Images API.

pub mod client;
pub mod image;
pub mod types;

pub use image::OpenAiImageClient;
