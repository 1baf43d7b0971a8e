pub mod dns;
pub mod names;

pub use dns::{Resolution, ResolveQuestionUseCase};
pub use names::{ListNamesUseCase, UpsertNameUseCase};
