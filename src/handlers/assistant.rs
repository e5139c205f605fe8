use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::assistant;
use crate::state::AppState;

// POST /api/assistant
#[derive(Deserialize)]
pub struct AdviceRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct AdviceResponse {
    pub reply: String,
}

pub async fn ask_assistant(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    let text = body.message.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Message must not be empty.".to_string()));
    }

    let reply = assistant::advise(state.llm.as_ref(), &state.catalog, text).await;
    Ok(Json(AdviceResponse { reply }))
}
