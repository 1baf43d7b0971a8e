mod repositories;
mod use_cases;

pub use repositories::Repositories;
pub use use_cases::UseCases;
