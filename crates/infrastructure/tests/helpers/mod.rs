#![allow(dead_code)]

mod builders;
mod mock_name_table;

pub use builders::*;
pub use mock_name_table::MockNameTable;
