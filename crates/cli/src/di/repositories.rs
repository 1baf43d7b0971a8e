use std::sync::Arc;
use tabledns_domain::Config;
use tabledns_infrastructure::repositories::JsonNameTable;

pub struct Repositories {
    pub name_table: Arc<JsonNameTable>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        Self {
            name_table: Arc::new(JsonNameTable::new(&config.names.path)),
        }
    }
}
