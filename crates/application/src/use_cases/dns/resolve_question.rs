use crate::ports::NameTable;
use std::sync::Arc;
use tabledns_domain::{DomainName, Question, ResourceRecord, FIXED_TTL};
use tracing::{debug, error, info};

/// Records produced for a single question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.authorities.is_empty() && self.additionals.is_empty()
    }

    /// Appends `other`'s sections to ours, preserving order.
    pub fn extend(&mut self, other: Resolution) {
        self.answers.extend(other.answers);
        self.authorities.extend(other.authorities);
        self.additionals.extend(other.additionals);
    }
}

/// Answers one question from the name table.
///
/// An entry matches when the queried name *contains* the entry's name,
/// compared byte for byte, and every matching entry yields its own answer,
/// named after the entry rather than the query.
pub struct ResolveQuestionUseCase {
    name_table: Arc<dyn NameTable>,
}

impl ResolveQuestionUseCase {
    pub fn new(name_table: Arc<dyn NameTable>) -> Self {
        Self { name_table }
    }

    pub async fn execute(&self, question: &Question) -> Resolution {
        if !question.is_host_address() {
            debug!(
                name = %question.name,
                record_type = question.record_type,
                class = question.class,
                "Unsupported question type/class, empty resolution"
            );
            return Resolution::default();
        }

        let names = match self.name_table.get_names().await {
            Ok(names) => names,
            Err(e) => {
                error!(error = %e, name = %question.name, "Failed to read name table");
                return Resolution::default();
            }
        };

        let answers = names
            .iter()
            .filter(|entry| question.name.contains(entry.name.as_bytes()))
            .map(|entry| {
                let address = entry.a_record_address();
                let name = DomainName::from(entry.name.as_str());
                if name.to_dotted() != entry.name.as_bytes() {
                    debug!(
                        entry = %entry.name,
                        written = %name,
                        "Entry name normalized for the wire"
                    );
                }
                info!(query = %question.name, entry = %entry.name, %address, "Resolved");
                ResourceRecord::a(name, address, FIXED_TTL)
            })
            .collect();

        Resolution {
            answers,
            ..Resolution::default()
        }
    }
}
