//! Error taxonomy for the parsing core.

use thiserror::Error;

/// Result type for stub generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the sequencer, the extractors and the title table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sliding window narrower than two lines was requested
    #[error("invalid window size {0}: must be at least 2")]
    InvalidWindow(usize),

    /// A command header carried an argument list that does not parse
    #[error("malformed argument list in `{header}`: {source}")]
    MalformedArguments {
        header: String,
        #[source]
        source: GrammarError,
    },

    /// A section title with no entry in the title table
    #[error("unrecognized section title: {0:?}")]
    UnknownSection(String),

    #[error("unknown format: {0}. Use lua or json")]
    UnknownFormat(String),

    #[error("failed to serialize section: {0}")]
    Serialize(String),
}

/// Failure to parse the bracketed argument grammar of a header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct GrammarError {
    /// Byte offset into the argument list where parsing stopped.
    pub offset: usize,
    pub kind: GrammarErrorKind,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarErrorKind {
    #[error("unclosed `[`")]
    UnclosedGroup,
    #[error("unexpected `]`")]
    UnexpectedClose,
    #[error("empty argument")]
    EmptyArgument,
    #[error("missing `,` between arguments")]
    MissingSeparator,
}

impl GrammarError {
    pub fn new(offset: usize, kind: GrammarErrorKind) -> Self {
        Self { offset, kind }
    }
}
