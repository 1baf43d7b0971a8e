pub mod health;
pub mod names;

pub use health::health_check;
pub use names::{add_entry, list_names};
