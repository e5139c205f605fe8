use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;
use crate::services::{booking, ticket};
use crate::state::AppState;

// GET /api/tickets/:phone
pub async fn download_ticket(
    State(state): State<Arc<AppState>>,
    Path(raw_phone): Path<String>,
) -> Result<Response, AppError> {
    // Strip .txt suffix if present
    let phone = raw_phone.strip_suffix(".txt").unwrap_or(&raw_phone);

    let record = booking::lookup(&state, phone).await?;

    let pass = ticket::render_ticket(&record);
    let filename = format!("LaganPremium_{}.txt", record.id);

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pass,
    )
        .into_response())
}
