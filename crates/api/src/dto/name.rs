use serde::{Deserialize, Serialize};
use tabledns_domain::NameEntry;

/// Query string of `/add-entry`. Both fields are optional here so a missing
/// one can be reported with a friendly message instead of a rejection.
#[derive(Debug, Default, Deserialize)]
pub struct AddEntryParams {
    pub name: Option<String>,
    pub ip: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameDto {
    pub name: String,
    pub address: String,
}

impl From<NameEntry> for NameDto {
    fn from(entry: NameEntry) -> Self {
        Self {
            name: entry.name,
            address: entry.address.to_string(),
        }
    }
}
