use std::net::{IpAddr, Ipv4Addr};

/// One row of the name table.
///
/// `name` is kept as written in the table. When it becomes an answer record
/// it goes through `DomainName::from`, which drops empty labels, so
/// `"a..b."` is answered as `a.b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub name: String,
    pub address: IpAddr,
}

impl NameEntry {
    pub fn new(name: impl Into<String>, address: IpAddr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// The address as 16 bytes, IPv4 stored IPv4-mapped.
    pub fn address_octets(&self) -> [u8; 16] {
        match self.address {
            IpAddr::V4(v4) => v4.to_ipv6_mapped().octets(),
            IpAddr::V6(v6) => v6.octets(),
        }
    }

    /// The trailing four bytes of the 16-byte form, i.e. what goes into an
    /// `A` record's rdata.
    pub fn a_record_address(&self) -> Ipv4Addr {
        let octets = self.address_octets();
        Ipv4Addr::new(octets[12], octets[13], octets[14], octets[15])
    }
}
