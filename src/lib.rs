//! Thin client layer over generative AI services - restyle images and chat
//!
//! Forwards user text or images to a multimodal chat/vision model and an
//! image-generation model, and chains them for the restyle flow: describe
//! an input image, compose a generation prompt from the description, and
//! produce a restyled image. Consumed through an interactive menu, direct
//! subcommands, or two HTTP endpoints.

pub mod ai;
pub mod app;
pub mod compose;
pub mod error;
pub mod menu;
pub mod models;
pub mod output;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
