use crate::dns::wire;
use bytes::{Bytes, BytesMut};
use std::net::SocketAddr;
use std::sync::Arc;
use tabledns_application::use_cases::{Resolution, ResolveQuestionUseCase};
use tabledns_domain::{DnsHeader, DnsMessage, HEADER_LEN};
use tracing::{debug, error, warn};

/// Turns one request datagram into one response datagram.
///
/// Nothing here fails: decode faults fall back to whatever was parsed and
/// store faults resolve to nothing. A response that cannot be encoded is
/// retried with the echoed questions alone, and only if that also fails
/// does it degrade to a bare header carrying the request ID.
pub struct DnsServerHandler {
    use_case: Arc<ResolveQuestionUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQuestionUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_datagram(&self, request: &[u8], client: SocketAddr) -> Bytes {
        let query = match wire::decode_query(request) {
            Ok(message) => message,
            Err(partial) => {
                warn!(
                    client = %client,
                    error = %partial.error,
                    questions = partial.message.questions.len(),
                    "Malformed DNS request, answering with partial data"
                );
                partial.message
            }
        };

        debug!(
            client = %client,
            id = query.header.id,
            questions = query.questions.len(),
            "DNS query received"
        );

        let mut resolution = Resolution::default();
        for question in &query.questions {
            resolution.extend(self.use_case.execute(question).await);
        }

        let response = DnsMessage::response_to(
            &query.header,
            query.questions,
            resolution.answers,
            resolution.authorities,
            resolution.additionals,
        );

        match wire::encode_message(&response) {
            Ok(bytes) => {
                debug!(
                    client = %client,
                    id = response.header.id,
                    answers = response.answers.len(),
                    bytes = bytes.len(),
                    "Sending response"
                );
                bytes
            }
            Err(e) => {
                error!(
                    client = %client,
                    error = %e,
                    "Failed to encode response, retrying without records"
                );
                questions_only(&response)
            }
        }
    }
}

fn questions_only(response: &DnsMessage) -> Bytes {
    let stripped = DnsMessage::response_to(
        &response.header,
        response.questions.clone(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    match wire::encode_message(&stripped) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "Failed to encode questions, sending bare header");
            header_only(response.header.id)
        }
    }
}

fn header_only(id: u16) -> Bytes {
    let mut buf = BytesMut::with_capacity(HEADER_LEN);
    wire::encode_header(&DnsHeader::response(id), &mut buf);
    buf.freeze()
}
