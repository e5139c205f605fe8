use crate::config::AppConfig;
use crate::models::Catalog;
use crate::services::ai::LlmProvider;
use crate::services::store::BookingStore;

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub store: Box<dyn BookingStore>,
    pub llm: Box<dyn LlmProvider>,
}
