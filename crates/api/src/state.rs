use std::sync::Arc;
use tabledns_application::use_cases::{ListNamesUseCase, UpsertNameUseCase};

#[derive(Clone)]
pub struct AppState {
    pub upsert_name: Arc<UpsertNameUseCase>,
    pub list_names: Arc<ListNamesUseCase>,
}
