//! Command extraction over a shared three-line window.
//!
//! The command being built sits in the middle of the window and the newest
//! line is the lookahead. Documentation grows one lookahead line at a time
//! until the lookahead is a header or a rule; the extractor stops without
//! advancing past it, so the holder of the cursor sees that boundary next.

use crate::error::{Error, Result};
use crate::model::Command;
use crate::parser::grammar::parse_arguments;
use crate::parser::header::{is_command_header, is_rule, split_header};
use crate::window::Windows;
use log::{debug, trace};
use std::iter::FusedIterator;

/// Yields one [`Command`] per header until a rule line or the end of input.
pub struct Commands<'w, I: Iterator> {
    windows: &'w mut Windows<I>,
    /// Newest line revealed by the cursor
    lookahead: Option<I::Item>,
    done: bool,
}

/// Extract commands starting at the cursor's current position.
///
/// The first command opens once a header reaches the middle of the window.
pub fn extract_commands<I>(windows: &mut Windows<I>) -> Commands<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str> + Clone,
{
    Commands {
        windows,
        lookahead: None,
        done: false,
    }
}

impl<'w, I> Commands<'w, I>
where
    I: Iterator,
    I::Item: AsRef<str> + Clone,
{
    /// Continue from a caller that has already seen `lookahead` as the
    /// newest line of its last window.
    pub(crate) fn resume(windows: &'w mut Windows<I>, lookahead: I::Item) -> Self {
        Commands {
            windows,
            lookahead: Some(lookahead),
            done: false,
        }
    }

    /// Advance one step; returns the line now in the middle of the window.
    fn advance(&mut self) -> Option<I::Item> {
        let mut span = self.windows.next()?;
        let newest = span.pop()?;
        let current = span.pop()?;
        self.lookahead = Some(newest);
        Some(current)
    }

    fn seek_header(&mut self) -> Option<Result<Command>> {
        loop {
            let Some(current) = self.advance() else {
                self.done = true;
                // A header on the final line never reaches the middle.
                return self
                    .lookahead
                    .take()
                    .filter(|line| is_command_header(line.as_ref()))
                    .map(|line| build_command(line.as_ref(), String::new()));
            };
            let current = current.as_ref();
            if is_command_header(current) {
                return Some(self.collect_doc(current));
            }
            if is_rule(current) {
                self.done = true;
                return None;
            }
            trace!("skipping line before first header: {:?}", current);
        }
    }

    fn collect_doc(&mut self, header: &str) -> Result<Command> {
        let mut command = build_command(header, String::new())?;

        while let Some(line) = self.lookahead.clone() {
            let line = line.as_ref();
            if is_rule(line) {
                self.done = true;
                break;
            }
            if is_command_header(line) {
                break;
            }
            command.doc.push_str(line);
            if self.advance().is_none() {
                self.lookahead = None;
                self.done = true;
            }
        }

        debug!(
            "command {} ({} doc bytes)",
            command.name,
            command.doc.len()
        );
        Ok(command)
    }
}

fn build_command(header: &str, doc: String) -> Result<Command> {
    let parts = split_header(header);
    let args = parse_arguments(parts.args).map_err(|source| Error::MalformedArguments {
        header: parts.original.to_string(),
        source,
    })?;
    Ok(Command {
        original: parts.original.to_string(),
        name: parts.name.to_string(),
        args,
        doc,
    })
}

impl<I> Iterator for Commands<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str> + Clone,
{
    type Item = Result<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.seek_header();
        if matches!(item, Some(Err(_))) {
            self.done = true;
        }
        item
    }
}

impl<I> FusedIterator for Commands<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str> + Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrammarErrorKind;
    use crate::model::ArgNode;
    use crate::window::windows;

    fn commands(text: &str) -> Vec<Result<Command>> {
        let mut w = windows(text.split_inclusive('\n'), 3).unwrap();
        extract_commands(&mut w).collect()
    }

    fn leaves(names: &[&str]) -> Vec<ArgNode> {
        names.iter().map(|n| ArgNode::leaf(*n)).collect()
    }

    const METATABLES: &str = "
    SETMETATABLE(TBL, M)

        Set table TBL metatable to M


    GETMETATABLE(TBL)

        return the current metatable for table t, or nil if none is set

    RAWSET(TBL, KEY, VALUE)

    RAWGET(TBL, KEY)

";

    #[test]
    fn extracts_metatable_commands() {
        let cmds: Vec<Command> = commands(METATABLES).into_iter().map(|c| c.unwrap()).collect();
        assert_eq!(cmds.len(), 4);

        assert_eq!(
            cmds[0],
            Command {
                original: "SETMETATABLE(TBL, M)".to_string(),
                name: "SETMETATABLE".to_string(),
                args: leaves(&["TBL", "M"]),
                doc: "\n        Set table TBL metatable to M\n\n\n".to_string(),
            }
        );
        assert_eq!(
            cmds[1],
            Command {
                original: "GETMETATABLE(TBL)".to_string(),
                name: "GETMETATABLE".to_string(),
                args: leaves(&["TBL"]),
                doc: "\n        return the current metatable for table t, or nil if none is set\n\n"
                    .to_string(),
            }
        );
        assert_eq!(cmds[2].name, "RAWSET");
        assert_eq!(cmds[2].args, leaves(&["TBL", "KEY", "VALUE"]));
        assert_eq!(cmds[2].doc, "\n");
        assert_eq!(cmds[3].name, "RAWGET");
        assert_eq!(cmds[3].args, leaves(&["TBL", "KEY"]));
        assert_eq!(cmds[3].doc, "\n");
    }

    #[test]
    fn adjacent_headers_are_separate_commands() {
        let cmds = commands("\n    FLIP()\n    CLS([COL])\n        clear\n");
        let cmds: Vec<Command> = cmds.into_iter().map(|c| c.unwrap()).collect();
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].name, "FLIP");
        assert_eq!(cmds[0].doc, "");
        assert_eq!(cmds[1].name, "CLS");
        assert_eq!(cmds[1].doc, "        clear\n");
    }

    #[test]
    fn stops_at_rule_and_leaves_cursor_there() {
        let text = "\n    STOP()\n        halt\n--------------------\nSystem\n--------------------\n";
        let mut w = windows(text.split_inclusive('\n'), 3).unwrap();
        let cmds: Vec<_> = extract_commands(&mut w).collect();
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].as_ref().unwrap().doc, "        halt\n");

        // Next span puts the rule in the middle.
        assert_eq!(
            w.next(),
            Some(vec!["        halt\n", "--------------------\n", "System\n"])
        );
    }

    #[test]
    fn header_on_last_line() {
        let cmds = commands("\n    RUN()\n    STOP()");
        let names: Vec<String> = cmds.into_iter().map(|c| c.unwrap().name).collect();
        assert_eq!(names, vec!["RUN", "STOP"]);
    }

    #[test]
    fn doc_without_trailing_newline() {
        let cmds = commands("\n    TIME()\n        seconds");
        assert_eq!(cmds[0].as_ref().unwrap().doc, "        seconds");
    }

    #[test]
    fn malformed_arguments_abort_extraction() {
        let cmds = commands("\n    PALT(C [T])\n        doc\n    FLIP()\n        doc\n");
        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            Err(Error::MalformedArguments { header, source }) => {
                assert_eq!(header, "PALT(C [T])");
                assert_eq!(source.kind, GrammarErrorKind::MissingSeparator);
            }
            other => panic!("expected grammar error, got {:?}", other),
        }
    }

    #[test]
    fn empty_input() {
        assert!(commands("").is_empty());
        assert!(commands("\n\n\n").is_empty());
    }
}
