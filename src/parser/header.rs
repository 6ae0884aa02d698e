//! Command header recognition.
//!
//! Headers are indented exactly four spaces and span the whole line:
//!
//! ```text
//!     SPR(N, X, Y, [W, H], [FLIP_X], [FLIP_Y])
//!     FOLDER
//! ```

use regex::Regex;
use std::sync::LazyLock;

// Four spaces, an upper-case name, an optional argument list, trailing blanks.
static RE_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {4}[A-Z][A-Z0-9]*(\([A-Z_0-9,\[\]\. ]*\))?\s*$").unwrap()
});

/// Rule lines delimit section frames.
pub const RULE: &str = "----------";

pub fn is_rule(line: &str) -> bool {
    line.starts_with(RULE)
}

/// Whether `line` introduces a command.
pub fn is_command_header(line: &str) -> bool {
    RE_COMMAND.is_match(line) && brackets_balanced(line)
}

fn brackets_balanced(line: &str) -> bool {
    let mut depth = 0usize;
    for c in line.chars() {
        match c {
            '[' => depth += 1,
            ']' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// The pieces of a header line the command extractor needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderParts<'a> {
    pub original: &'a str,
    pub name: &'a str,
    /// Text between the outer parentheses, empty when there are none
    pub args: &'a str,
}

/// Split a header line into its name and raw argument list.
pub fn split_header(line: &str) -> HeaderParts<'_> {
    let (name, rest) = line.split_once('(').unwrap_or((line, ""));
    let args = rest.split_once(')').map_or(rest, |(args, _)| args);
    HeaderParts {
        original: line.trim(),
        name: name.trim(),
        args,
    }
}
