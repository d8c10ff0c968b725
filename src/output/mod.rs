//! Output formatting and file writing

pub mod json;
pub mod table;

pub use json::{format_json, write_json_file};
pub use table::format_table;
