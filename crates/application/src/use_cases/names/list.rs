use crate::ports::NameTable;
use std::sync::Arc;
use tabledns_domain::{DomainError, NameEntry};

pub struct ListNamesUseCase {
    name_table: Arc<dyn NameTable>,
}

impl ListNamesUseCase {
    pub fn new(name_table: Arc<dyn NameTable>) -> Self {
        Self { name_table }
    }

    pub async fn execute(&self) -> Result<Vec<NameEntry>, DomainError> {
        self.name_table.get_names().await
    }
}
