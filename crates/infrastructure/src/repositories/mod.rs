pub mod json_name_table;

pub use json_name_table::{JsonNameTable, NameModel};
