use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tabledns_application::ports::NameTable;
use tabledns_domain::{DomainError, NameEntry};

#[derive(Clone, Default)]
pub struct MockNameTable {
    entries: Arc<Mutex<Vec<NameEntry>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockNameTable {
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let table = Self::default();
        {
            let mut guard = table.entries.lock().unwrap();
            for (name, ip) in entries {
                guard.push(NameEntry::new(*name, ip.parse().unwrap()));
            }
        }
        table
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }
}

#[async_trait]
impl NameTable for MockNameTable {
    async fn get_names(&self) -> Result<Vec<NameEntry>, DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::StoreUnavailable("mock".to_string()));
        }
        Ok(self.entries.lock().unwrap().clone())
    }
}
