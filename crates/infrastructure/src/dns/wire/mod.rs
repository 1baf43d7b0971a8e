//! RFC 1035 message framing without name compression.

mod decode;
mod encode;

pub use decode::{decode_header, decode_name, decode_query};
pub use encode::{encode_header, encode_message, encode_name};
