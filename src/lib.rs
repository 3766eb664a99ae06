pub mod bookings;
pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod search;
pub mod web;

use crate::bookings::{BookingDesk, BookingStore};
use crate::chat::{ChatResponder, ModelAssistant};
use crate::config::Config;
use crate::providers::{GeminiClient, GenerativeModel};
use crate::search::SearchService;
use crate::web::AppState;
use std::sync::Arc;

/// Wire up services from configuration
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let model: Option<Arc<dyn GenerativeModel>> = match GeminiClient::from_config(config)? {
        Some(client) => Some(Arc::new(client)),
        None => None,
    };

    Ok(AppState {
        search: SearchService::new(model.clone()),
        desk: BookingDesk::new(BookingStore::new(), config.booking_delay),
        chat: ChatResponder::new(config.chat_delay),
        assistant: ModelAssistant::new(model),
    })
}
