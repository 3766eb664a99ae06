pub mod handlers;
pub mod views;

use crate::bookings::BookingDesk;
use crate::chat::{ChatResponder, ModelAssistant};
use crate::search::SearchService;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub const HEALTH_PATH: &str = "/health";
pub const SEARCH_PATH: &str = "/api/search";
pub const BOOKINGS_PATH: &str = "/api/bookings";
pub const CHAT_PATH: &str = "/api/chat";
pub const ASSISTANT_PATH: &str = "/api/assistant";
pub const ADMIN_PATH: &str = "/admin";

/// Everything a request handler may touch
#[derive(Clone)]
pub struct AppState {
    pub search: SearchService,
    pub desk: BookingDesk,
    pub chat: ChatResponder,
    pub assistant: ModelAssistant,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(handlers::health))
        .route(SEARCH_PATH, get(handlers::search))
        .route(
            BOOKINGS_PATH,
            get(handlers::list_bookings).post(handlers::create_booking),
        )
        .route(CHAT_PATH, post(handlers::chat))
        .route(ASSISTANT_PATH, post(handlers::ask_assistant))
        .route(ADMIN_PATH, get(handlers::admin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
