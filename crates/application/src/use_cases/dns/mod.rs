pub mod resolve_question;

pub use resolve_question::{Resolution, ResolveQuestionUseCase};
