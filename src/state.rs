// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::completion::CompletionClient;
use crate::services::persona::Persona;

pub type SharedState = Arc<AppState>;

/// Read-only state shared by all requests. No locks needed: the persona
/// and backend settings never change after startup.
pub struct AppState {
    pub persona: Persona,
    pub completion: CompletionClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            persona: Persona::texbot(),
            completion: CompletionClient::new(config),
        }
    }
}
