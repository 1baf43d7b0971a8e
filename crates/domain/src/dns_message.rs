pub mod header;
pub mod message;
pub mod name;
pub mod record;

pub use header::DnsHeader;
pub use message::{DnsMessage, PartialMessage};
pub use name::DomainName;
pub use record::{Question, ResourceRecord};

/// Host address record type.
pub const TYPE_A: u16 = 1;

/// The Internet class.
pub const CLASS_INET: u16 = 1;

/// QR bit: the message is a response.
pub const FLAG_RESPONSE: u16 = 1 << 15;

/// Size of the fixed DNS header on the wire.
pub const HEADER_LEN: usize = 12;

/// RFC 1035 maximum UDP payload; also the receive buffer size.
pub const UDP_MAX_MESSAGE_SIZE: usize = 512;

/// TTL stamped on every synthesized answer.
pub const FIXED_TTL: u32 = 31337;
