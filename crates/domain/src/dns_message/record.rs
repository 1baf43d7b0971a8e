use super::{DomainName, CLASS_INET, TYPE_A};
use std::net::Ipv4Addr;

/// A question section entry: name, type and class, no record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub record_type: u16,
    pub class: u16,
}

impl Question {
    pub fn new(name: impl Into<DomainName>, record_type: u16, class: u16) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }

    /// Only `A`/`IN` questions are ever answered.
    pub fn is_host_address(&self) -> bool {
        self.record_type == TYPE_A && self.class == CLASS_INET
    }
}

/// An answer, authority or additional record.
///
/// The rdata length is not stored; it is always derived from `data` when the
/// record is written, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub record_type: u16,
    pub class: u16,
    pub ttl: u32,
    pub data: Vec<u8>,
}

impl ResourceRecord {
    pub fn a(name: impl Into<DomainName>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name: name.into(),
            record_type: TYPE_A,
            class: CLASS_INET,
            ttl,
            data: address.octets().to_vec(),
        }
    }

    pub fn data_len(&self) -> usize {
        self.data.len()
    }
}
