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
pub struct StylizeRequest {
    pub image_data: Option<String>,
    pub style_prompt: Option<String>,
    pub user_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StylizeResponse {
    pub message: String,
    pub image_url: String,
}

/// `POST /stylize_image`: describe the uploaded image, restyle it, and
/// answer with the hosted URL of the generated result.
pub async fn stylize_image(
    State(app): State<Arc<App>>,
    payload: Result<Json<StylizeRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return bad_request("JSON body is required");
    };

    let image_b64 = req.image_data.as_deref().unwrap_or("");
    let style = req.style_prompt.as_deref().unwrap_or("");
    if image_b64.is_empty() || style.is_empty() {
        return bad_request("Missing 'image_data' or 'style_prompt'");
    }

    use base64::Engine as _;
    let image = match base64::engine::general_purpose::STANDARD.decode(image_b64) {
        Ok(bytes) => bytes,
        Err(_) => return bad_request("'image_data' is not valid base64"),
    };

    let instruction = req.user_prompt.as_deref().filter(|p| !p.trim().is_empty());

    match app.restyle_image(&image, style, instruction).await {
        Ok(restyled) => match restyled.url {
            Some(image_url) => (
                StatusCode::OK,
                Json(StylizeResponse {
                    message: "Image stylized successfully!".to_string(),
                    image_url,
                }),
            )
                .into_response(),
            None => {
                tracing::error!("Generation service returned image bytes but no URL");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "image generation returned no URL".to_string(),
                    }),
                )
                    .into_response()
            }
        },
        Err(err) => error_response(&err).into_response(),
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
