//! pico8-stubs: turn the PICO-8 API reference text into Lua
//! language-server stubs.
//!
//! The reference is split into sections framed by dashed rules; each section
//! documents commands whose headers use a bracket grammar for optional
//! arguments (`SPR(N, X, Y, [W, H], [FLIP_X], [FLIP_Y])`). Parsing turns the
//! text into [`Section`]s and [`Command`]s; rendering expands the bracket
//! grammar into `---@overload` annotations above a default declaration.

pub mod error;
pub mod model;
pub mod overload;
pub mod parser;
pub mod render;
pub mod titles;
pub mod window;

pub use error::{Error, GrammarError, GrammarErrorKind, Result};
pub use model::{ArgNode, Command, Section};
pub use parser::parse;
