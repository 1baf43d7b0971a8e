use async_trait::async_trait;
use tabledns_domain::{DomainError, NameEntry};

/// Read side of the name table. Every call returns a fresh snapshot of the
/// backing store; implementations must not cache between calls.
#[async_trait]
pub trait NameTable: Send + Sync {
    async fn get_names(&self) -> Result<Vec<NameEntry>, DomainError>;
}

/// Write side, used only by the administrative surface.
#[async_trait]
pub trait NameTableWriter: Send + Sync {
    /// Replaces the address of the entry called `entry.name`, or appends it.
    async fn upsert(&self, entry: NameEntry) -> Result<(), DomainError>;
}
