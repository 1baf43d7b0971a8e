mod name_table;

pub use name_table::{NameTable, NameTableWriter};
