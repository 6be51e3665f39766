use super::{ChatService, GeneratedImage, ImageGenerationService, VisionService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One-pixel PNG used as the default generated image in tests.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53,
    0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, // IDAT
    0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00,
    0x00, 0x03, 0x01, 0x01, 0x00, 0x9C, 0xE3, 0xBF,
    0x59, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND
    0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Chat mock. Queued responses cycle; clones share state so a test can keep
/// a handle for assertions after handing one to the app.
#[derive(Clone)]
pub struct MockChatClient {
    responses: Arc<Mutex<Vec<String>>>,
    questions: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    fail: bool,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            questions: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail: false,
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_question(&self) -> Option<String> {
        self.questions.lock().unwrap().last().cloned()
    }

    fn reply(&self, question: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.questions.lock().unwrap().push(question.to_string());

        if self.fail {
            return Err(Error::Chat("mock chat failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!("A mock reply to: {question}"))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn ask(&self, question: &str) -> Result<String> {
        self.reply(question)
    }

    async fn ask_with_image(&self, question: &str, _image: &[u8]) -> Result<String> {
        self.reply(question)
    }
}

/// Vision mock. Records the instruction passed with each call.
#[derive(Clone)]
pub struct MockVisionClient {
    descriptions: Arc<Mutex<Vec<String>>>,
    instructions: Arc<Mutex<Vec<Option<String>>>>,
    call_count: Arc<Mutex<usize>>,
    fail: bool,
}

impl MockVisionClient {
    pub fn new() -> Self {
        Self {
            descriptions: Arc::new(Mutex::new(Vec::new())),
            instructions: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail: false,
        }
    }

    pub fn with_description(self, description: String) -> Self {
        self.descriptions.lock().unwrap().push(description);
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_instructions(&self) -> Vec<Option<String>> {
        self.instructions.lock().unwrap().clone()
    }
}

impl Default for MockVisionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionService for MockVisionClient {
    async fn describe_image(&self, _image: &[u8], instruction: Option<&str>) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.instructions
            .lock()
            .unwrap()
            .push(instruction.map(|i| i.to_string()));

        if self.fail {
            return Err(Error::Vision("mock vision failure".to_string()));
        }

        let descriptions = self.descriptions.lock().unwrap();
        if descriptions.is_empty() {
            // Default mock response
            Ok("A small test image.".to_string())
        } else {
            let index = (*count - 1) % descriptions.len();
            Ok(descriptions[index].clone())
        }
    }
}

/// Image generation mock. Records every prompt so tests can assert on the
/// composed text that reached the service.
#[derive(Clone)]
pub struct MockImageGenerationClient {
    images: Arc<Mutex<Vec<GeneratedImage>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    fail: bool,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            images: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail: false,
        }
    }

    pub fn with_image(self, image: GeneratedImage) -> Self {
        self.images.lock().unwrap().push(image);
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.fail {
            return Err(Error::Generation("mock generation failure".to_string()));
        }

        let images = self.images.lock().unwrap();
        if images.is_empty() {
            // Default mock response
            Ok(GeneratedImage {
                bytes: TINY_PNG.to_vec(),
                url: Some("https://images.example.com/mock.png".to_string()),
            })
        } else {
            let index = (*count - 1) % images.len();
            Ok(images[index].clone())
        }
    }
}
