use crate::ports::NameTableWriter;
use std::net::IpAddr;
use std::sync::Arc;
use tabledns_domain::{DomainError, NameEntry};
use tracing::info;

pub struct UpsertNameUseCase {
    writer: Arc<dyn NameTableWriter>,
}

impl UpsertNameUseCase {
    pub fn new(writer: Arc<dyn NameTableWriter>) -> Self {
        Self { writer }
    }

    pub async fn execute(&self, name: &str, ip: &str) -> Result<NameEntry, DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "name must not be empty".to_string(),
            ));
        }

        let address: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;

        let entry = NameEntry::new(name, address);
        self.writer.upsert(entry.clone()).await?;

        info!(name = %entry.name, address = %entry.address, "Added/Updated name table entry");
        Ok(entry)
    }
}
