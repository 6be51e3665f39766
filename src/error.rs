//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Normalizing a vision description produced nothing usable. The restyle
    /// flow aborts before any generation call when this is raised.
    #[error("image description was empty after cleanup")]
    EmptyDescription,

    /// Chat collaborator failure (network, auth, quota, bad payload).
    #[error("chat service error: {0}")]
    Chat(String),

    /// Vision collaborator failure (network, auth, quota, bad payload).
    #[error("vision service error: {0}")]
    Vision(String),

    /// Image-generation collaborator failure.
    #[error("image generation error: {0}")]
    Generation(String),

    /// Missing or empty required field at a boundary; rejected before any
    /// downstream call is attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Startup-time configuration problem (missing credential, bad value).
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
