//! tabledns Domain Layer
pub mod config;
pub mod dns_message;
pub mod errors;
pub mod name_entry;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{
    DnsHeader, DnsMessage, DomainName, PartialMessage, Question, ResourceRecord, CLASS_INET,
    FIXED_TTL, FLAG_RESPONSE, HEADER_LEN, TYPE_A, UDP_MAX_MESSAGE_SIZE,
};
pub use errors::DomainError;
pub use name_entry::NameEntry;
