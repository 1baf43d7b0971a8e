use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use tabledns_application::ports::{NameTable, NameTableWriter};
use tabledns_domain::{DomainError, NameEntry};

#[derive(Clone, Default)]
pub struct MockNameTable {
    entries: Arc<Mutex<Vec<NameEntry>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let table = Self::new();
        for (name, ip) in entries {
            table.add(name, ip);
        }
        table
    }

    pub fn add(&self, name: &str, ip: &str) {
        let address: IpAddr = ip.parse().unwrap();
        self.entries
            .lock()
            .unwrap()
            .push(NameEntry::new(name, address));
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn entries(&self) -> Vec<NameEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameTable for MockNameTable {
    async fn get_names(&self) -> Result<Vec<NameEntry>, DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::StoreUnavailable(
                "names.json: No such file or directory".to_string(),
            ));
        }
        Ok(self.entries.lock().unwrap().clone())
    }
}

#[async_trait]
impl NameTableWriter for MockNameTable {
    async fn upsert(&self, entry: NameEntry) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::IoError("mock write failure".to_string()));
        }
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => existing.address = entry.address,
            None => entries.push(entry),
        }
        Ok(())
    }
}
