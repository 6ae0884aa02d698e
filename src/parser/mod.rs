//! Text-to-model parsing: header recognition, argument grammar, extractors.

pub mod commands;
pub mod grammar;
pub mod header;
pub mod sections;

pub use commands::{extract_commands, Commands};
pub use grammar::parse_arguments;
pub use header::{is_command_header, is_rule, split_header, HeaderParts};
pub use sections::{extract_sections, parse, Sections};
