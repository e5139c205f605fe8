use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BookingDraft, BookingRecord};
use crate::services::booking;
use crate::state::AppState;

// POST /api/bookings
#[derive(Serialize)]
pub struct SubmitResponse {
    pub booking: BookingRecord,
    pub message: String,
    pub whatsapp_url: String,
}

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<BookingDraft>,
) -> Result<Json<SubmitResponse>, AppError> {
    let outcome = booking::submit(&state, draft).await?;

    Ok(Json(SubmitResponse {
        booking: outcome.record,
        message: outcome.message,
        whatsapp_url: outcome.whatsapp_url,
    }))
}

// GET /api/bookings?phone=...
#[derive(Deserialize)]
pub struct LookupQuery {
    pub phone: Option<String>,
}

pub async fn lookup_booking(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<BookingRecord>, AppError> {
    let phone = query.phone.unwrap_or_default();
    let record = booking::lookup(&state, &phone).await?;
    Ok(Json(record))
}
