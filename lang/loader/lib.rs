mod input;
mod source;

pub use input::{parse_character, parse_integer};
pub use source::{load, split_lines};
