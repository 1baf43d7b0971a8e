use super::FLAG_RESPONSE;

/// The fixed 12-byte DNS header.
///
/// `flags` is kept verbatim on decode; a response built by this server only
/// ever carries [`FLAG_RESPONSE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl DnsHeader {
    /// Header for a reply to `request_id`. Counts are filled in by the caller.
    pub fn response(request_id: u16) -> Self {
        Self {
            id: request_id,
            flags: FLAG_RESPONSE,
            ..Self::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_RESPONSE != 0
    }
}
