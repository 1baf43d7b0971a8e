use super::{DnsHeader, Question, ResourceRecord};
use crate::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsMessage {
    pub header: DnsHeader,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl DnsMessage {
    /// Builds a reply to `request`: same ID, response flag only, questions
    /// echoed back, and header counts taken from the section lengths.
    pub fn response_to(
        request: &DnsHeader,
        questions: Vec<Question>,
        answers: Vec<ResourceRecord>,
        authorities: Vec<ResourceRecord>,
        additionals: Vec<ResourceRecord>,
    ) -> Self {
        let mut message = Self {
            header: DnsHeader::response(request.id),
            questions,
            answers,
            authorities,
            additionals,
        };
        message.sync_counts();
        message
    }

    /// Rewrites the header counts from the section lengths, saturating at
    /// `u16::MAX`.
    pub fn sync_counts(&mut self) {
        fn count(len: usize) -> u16 {
            u16::try_from(len).unwrap_or(u16::MAX)
        }
        self.header.question_count = count(self.questions.len());
        self.header.answer_count = count(self.answers.len());
        self.header.authority_count = count(self.authorities.len());
        self.header.additional_count = count(self.additionals.len());
    }
}

/// A decode that failed part-way. `message` holds every field and question
/// read before `error` was hit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct PartialMessage {
    pub message: DnsMessage,
    pub error: DomainError,
}
