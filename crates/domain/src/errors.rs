use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed header: need {needed} bytes, got {available}")]
    MalformedHeader { needed: usize, available: usize },

    #[error("Malformed name at offset {offset}: {reason}")]
    MalformedName { offset: usize, reason: String },

    #[error("Malformed question at offset {offset}: type/class truncated")]
    MalformedQuestion { offset: usize },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Section {section} holds {len} records, more than a header count can express")]
    SectionTooLarge { section: &'static str, len: usize },

    #[error("Record data for {name} is {len} bytes, longer than 65535")]
    RecordDataTooLong { name: String, len: usize },

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Name table unavailable: {0}")]
    StoreUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
