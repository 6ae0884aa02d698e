//! Section extraction.
//!
//! A section opens on a three-line frame (rule, title, rule), collects prose
//! lines, then hands the cursor to the command extractor at the first
//! header. Whatever is open when input runs out is still yielded.

use crate::error::Result;
use crate::model::Section;
use crate::parser::commands::Commands;
use crate::parser::header::{is_command_header, is_rule};
use crate::window::{windows, Windows};
use log::debug;
use std::iter::FusedIterator;

/// Rule, title, rule.
const FRAME_WIDTH: usize = 3;

/// Yields sections in input order.
pub struct Sections<I: Iterator> {
    windows: Windows<I>,
    done: bool,
}

/// Extract every framed section from a sequence of lines.
///
/// Lines should keep their terminators; documentation is stored verbatim.
pub fn extract_sections<S>(lines: S) -> Result<Sections<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: AsRef<str> + Clone,
{
    Ok(Sections {
        windows: windows(lines, FRAME_WIDTH)?,
        done: false,
    })
}

/// Parse a whole reference text into sections.
pub fn parse(text: &str) -> Result<Vec<Section>> {
    extract_sections(text.split_inclusive('\n'))?.collect()
}

impl<I> Sections<I>
where
    I: Iterator,
    I::Item: AsRef<str> + Clone,
{
    fn open(&mut self) -> Option<Section> {
        loop {
            let frame = self.windows.next()?;
            let [top, title, bottom] = frame.as_slice() else {
                continue;
            };
            if !(is_rule(top.as_ref()) && is_rule(bottom.as_ref())) {
                continue;
            }

            let title_text = title.as_ref().trim().to_string();
            debug!("section {:?}", title_text);
            return Some(Section {
                header: [
                    top.as_ref().to_string(),
                    title.as_ref().to_string(),
                    bottom.as_ref().to_string(),
                ],
                title: title_text,
                doc: Vec::new(),
                commands: Vec::new(),
            });
        }
    }

    fn fill(&mut self, section: &mut Section) -> Result<()> {
        while let Some(mut span) = self.windows.next() {
            let Some(line) = span.pop() else {
                continue;
            };
            if is_rule(line.as_ref()) {
                return Ok(());
            }
            if is_command_header(line.as_ref()) {
                section.commands = Commands::resume(&mut self.windows, line).collect::<Result<_>>()?;
                debug!(
                    "section {:?}: {} commands",
                    section.title,
                    section.commands.len()
                );
                return Ok(());
            }
            section.doc.push(line.as_ref().to_string());
        }
        self.done = true;
        Ok(())
    }
}

impl<I> Iterator for Sections<I>
where
    I: Iterator,
    I::Item: AsRef<str> + Clone,
{
    type Item = Result<Section>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(mut section) = self.open() else {
            self.done = true;
            return None;
        };
        if let Err(e) = self.fill(&mut section) {
            self.done = true;
            return Some(Err(e));
        }
        Some(Ok(section))
    }
}

impl<I> FusedIterator for Sections<I>
where
    I: Iterator,
    I::Item: AsRef<str> + Clone,
{
}
