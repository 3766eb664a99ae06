use crate::bookings::BookingForm;
use crate::error::ApiError;
use crate::models::{Booking, Listing, SearchResult};
use crate::web::{views, AppState};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn search(
    State(st): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResult> {
    info!("🔎 Search near {:?}", params.q);
    Json(st.search.search(&params.q).await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub hostel: Listing,
    #[serde(flatten)]
    pub form: BookingForm,
}

pub async fn create_booking(
    State(st): State<AppState>,
    Json(body): Json<BookingSubmission>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let pending = st.desk.submit(&body.hostel, body.form)?;
    let booking = pending.wait().await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

#[derive(Debug, Serialize)]
pub struct BookingList {
    pub total: usize,
    pub bookings: Vec<Booking>,
}

pub async fn list_bookings(State(st): State<AppState>) -> Json<BookingList> {
    let bookings = st.desk.store().list().await;
    Json(BookingList {
        total: bookings.len(),
        bookings,
    })
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

pub async fn chat(
    State(st): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    if body.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message is empty".to_string()));
    }
    let reply = st.chat.respond(&body.message).await;
    Ok(Json(ChatReply { reply }))
}

pub async fn ask_assistant(
    State(st): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    if body.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message is empty".to_string()));
    }
    let reply = st.assistant.ask(&body.message).await;
    Ok(Json(ChatReply { reply }))
}

pub async fn admin(State(st): State<AppState>) -> Html<String> {
    let bookings = st.desk.store().list().await;
    Html(views::admin_dashboard(&bookings).into_string())
}
