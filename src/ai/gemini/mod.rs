//! Gemini REST API clients
//!
//! Chat and vision capabilities, both served by the `generateContent`
//! endpoint through a shared HTTP client.

pub mod chat;
pub mod client;
pub mod types;
pub mod vision;

pub use chat::GeminiChatClient;
pub use vision::GeminiVisionClient;


#[cfg(test)]
macro_rules! impl_with_gemini_base_url {
    ($client:ty) => {
        impl $client {
            pub fn with_base_url(mut self, base_url: String) -> Self {
                self.http = self.http.with_base_url(base_url);
                self
            }
        }
    };
}

#[cfg(test)]
pub(crate) use impl_with_gemini_base_url;
