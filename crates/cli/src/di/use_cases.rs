use super::Repositories;
use std::sync::Arc;
use tabledns_api::AppState;
use tabledns_application::use_cases::{
    ListNamesUseCase, ResolveQuestionUseCase, UpsertNameUseCase,
};

pub struct UseCases {
    pub resolve: Arc<ResolveQuestionUseCase>,
    pub upsert_name: Arc<UpsertNameUseCase>,
    pub list_names: Arc<ListNamesUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            resolve: Arc::new(ResolveQuestionUseCase::new(repos.name_table.clone())),
            upsert_name: Arc::new(UpsertNameUseCase::new(repos.name_table.clone())),
            list_names: Arc::new(ListNamesUseCase::new(repos.name_table.clone())),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            upsert_name: self.upsert_name.clone(),
            list_names: self.list_names.clone(),
        }
    }
}
