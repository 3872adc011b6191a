// src/routes/chat.rs
use axum::{Json, extract::State};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// GET / greeting. Returns the same payload whether or not the backend
/// is reachable.
pub async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello from TexBot" }))
}

/// POST /chats: validate the message, forward it with the persona to the
/// completion backend, relay the generated text.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let trimmed = payload.message.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let request_id = Uuid::new_v4();
    tracing::info!(
        request_id = %request_id,
        message_length = trimmed.len(),
        model = %state.completion.model(),
        "Forwarding chat request"
    );

    let response = state
        .completion
        .complete(&state.persona, trimmed)
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, error = %e, "Completion request failed");
        })?;

    tracing::info!(
        request_id = %request_id,
        response_length = response.len(),
        "Chat request completed"
    );

    Ok(Json(ChatResponse { response }))
}
