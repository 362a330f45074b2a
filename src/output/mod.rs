//! Report formatting and display
//!
//! - `text` - plain text sections, headers optionally bold
//! - `json` - pretty-printed JSON

mod config;
mod json;
mod text;

pub use config::{ColorWhen, OutputConfig};
pub use json::{print_json, write_json};
pub use text::{print_report, write_report};
