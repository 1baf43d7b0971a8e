pub mod list;
pub mod upsert;

pub use list::ListNamesUseCase;
pub use upsert::UpsertNameUseCase;
