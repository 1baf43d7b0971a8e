pub mod name;

pub use name::{AddEntryParams, NameDto};
