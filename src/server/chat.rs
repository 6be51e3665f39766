use super::{error_response, ErrorResponse};
use crate::app::App;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub response_text: String,
}

/// `POST /chat`: forward a text prompt to the chat service.
pub async fn chat_with_gemini(
    State(app): State<Arc<App>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return missing_prompt();
    };

    let Some(prompt) = req.prompt else {
        return missing_prompt();
    };

    match app.chat(&prompt).await {
        Ok(response_text) => (
            StatusCode::OK,
            Json(ChatResponse {
                message: "Chatbot response generated successfully!".to_string(),
                response_text,
            }),
        )
            .into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

fn missing_prompt() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "JSON body with 'prompt' is required".to_string(),
        }),
    )
        .into_response()
}
