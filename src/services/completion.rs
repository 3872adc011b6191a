// src/services/completion.rs
// Client for an OpenAI-compatible chat completions endpoint.
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::services::persona::Persona;

/// Chat completion request body (OpenAI-compatible format).
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<ResponseChoice>,
}

#[derive(Debug, Deserialize)]
struct ResponseChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the generated text from a completion response body.
fn parse_completion(body: &str) -> AppResult<String> {
    let data: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Backend(format!("unexpected response body: {e}")))?;

    data.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| AppError::Backend("response contained no completion text".to_string()))
}

pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one (persona, message) pair to the backend and return the
    /// generated text. No retry and no timeout; a failure is reported to
    /// the caller as-is.
    pub async fn complete(&self, persona: &Persona, message: &str) -> AppResult<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: persona.instructions,
                },
                WireMessage {
                    role: "user",
                    content: message,
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Backend(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Backend(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(AppError::Backend(format!(
                "backend returned {status}: {body}"
            )));
        }

        parse_completion(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_first_choice_content() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Cotton is a natural fiber."}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;
        let text = parse_completion(body).unwrap();
        assert_eq!(text, "Cotton is a natural fiber.");
    }

    #[test]
    fn parse_tolerates_extra_fields() {
        let body = r#"{
            "id": "cmpl-1",
            "object": "chat.completion",
            "choices": [{"index": 0, "message": {"content": "ok"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }"#;
        assert_eq!(parse_completion(body).unwrap(), "ok");
    }

    #[test]
    fn parse_rejects_empty_choices() {
        let result = parse_completion(r#"{"choices": []}"#);
        assert!(matches!(result, Err(AppError::Backend(_))));
    }

    #[test]
    fn parse_rejects_null_content() {
        let result = parse_completion(r#"{"choices": [{"message": {"content": null}}]}"#);
        assert!(matches!(result, Err(AppError::Backend(_))));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(parse_completion("not json").is_err());
    }

    #[test]
    fn request_body_serializes_in_wire_format() {
        let request = CompletionRequest {
            model: "test-model",
            messages: vec![
                WireMessage {
                    role: "system",
                    content: "be helpful",
                },
                WireMessage {
                    role: "user",
                    content: "hello",
                },
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
    }
}
