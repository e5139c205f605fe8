use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

// GET /api/catalog
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "cities": state.catalog.cities,
        "services": state.catalog.services,
    }))
}
