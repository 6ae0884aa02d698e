//! Argument-list grammar: comma-separated names with `[...]` optional groups.
//!
//! `TILE_X, TILE_Y, [SX, SY], [TILE_W, TILE_H]` parses to two leaves followed
//! by two groups. Groups nest to any depth; names keep their case and lose
//! surrounding whitespace.

use crate::error::{GrammarError, GrammarErrorKind};
use crate::model::ArgNode;

/// Parse the text between a header's parentheses.
pub fn parse_arguments(input: &str) -> Result<Vec<ArgNode>, GrammarError> {
    let mut parser = Parser { src: input, pos: 0 };
    let nodes = parser.list()?;
    match parser.peek() {
        None => Ok(nodes),
        Some(']') => Err(GrammarError::new(parser.pos, GrammarErrorKind::UnexpectedClose)),
        Some(_) => Err(GrammarError::new(parser.pos, GrammarErrorKind::MissingSeparator)),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    /// Items up to (not including) a closing `]` or the end of input.
    fn list(&mut self) -> Result<Vec<ArgNode>, GrammarError> {
        let mut nodes = Vec::new();
        self.skip_whitespace();
        if matches!(self.peek(), None | Some(']')) {
            return Ok(nodes);
        }

        loop {
            nodes.push(self.item()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                None | Some(']') => return Ok(nodes),
                Some(_) => {
                    return Err(GrammarError::new(
                        self.pos,
                        GrammarErrorKind::MissingSeparator,
                    ))
                }
            }
        }
    }

    fn item(&mut self) -> Result<ArgNode, GrammarError> {
        self.skip_whitespace();
        if self.peek() != Some('[') {
            return self.leaf();
        }

        let open = self.pos;
        self.pos += 1;
        let nodes = self.list()?;
        if self.peek() != Some(']') {
            return Err(GrammarError::new(open, GrammarErrorKind::UnclosedGroup));
        }
        self.pos += 1;
        Ok(ArgNode::Group(nodes))
    }

    fn leaf(&mut self) -> Result<ArgNode, GrammarError> {
        let start = self.pos;
        let rest = &self.src[start..];
        let len = rest.find([',', '[', ']']).unwrap_or(rest.len());
        let name = rest[..len].trim();
        if name.is_empty() {
            return Err(GrammarError::new(start, GrammarErrorKind::EmptyArgument));
        }
        self.pos = start + len;
        Ok(ArgNode::Leaf(name.to_string()))
    }
}
