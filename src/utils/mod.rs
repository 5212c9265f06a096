pub mod error;
pub mod logging;
pub mod string_utils;

pub use error::*;
pub use string_utils::{escape_html, js_string_literal, non_empty, truncate_chars_with_suffix, truncate_safe};
