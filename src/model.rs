//! Data model for parsed reference text, independent of output format.

use serde::Serialize;

/// One node of a header's argument grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgNode {
    /// Plain argument name, case as written in the header
    Leaf(String),
    /// `[...]` span: one level of optional arguments
    Group(Vec<ArgNode>),
}

impl ArgNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        ArgNode::Leaf(name.into())
    }

    pub fn group(nodes: impl IntoIterator<Item = ArgNode>) -> Self {
        ArgNode::Group(nodes.into_iter().collect())
    }
}

/// Whether an argument name stands for trailing repetition (`...`, `P1 ..`).
pub fn is_variadic(name: &str) -> bool {
    name.contains("..")
}

/// A single documented command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Header line as written, surrounding whitespace trimmed
    pub original: String,
    /// Text before the first `(`, upper-case in the reference
    pub name: String,
    pub args: Vec<ArgNode>,
    /// Every line after the header up to the next boundary, terminators kept
    pub doc: String,
}

impl Command {
    /// Names of the arguments outside every optional group.
    pub fn default_args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().filter_map(|a| match a {
            ArgNode::Leaf(name) => Some(name.as_str()),
            ArgNode::Group(_) => None,
        })
    }
}

/// A reference section framed by two rule lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Rule, title and rule lines, terminators kept
    pub header: [String; 3],
    pub title: String,
    /// Lines between the frame and the first command
    pub doc: Vec<String>,
    pub commands: Vec<Command>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_skip_groups() {
        let cmd = Command {
            name: "FSET".to_string(),
            args: vec![
                ArgNode::leaf("N"),
                ArgNode::group([ArgNode::leaf("F")]),
                ArgNode::leaf("VAL"),
            ],
            ..Default::default()
        };
        assert_eq!(cmd.default_args().collect::<Vec<_>>(), vec!["N", "VAL"]);
    }

    #[test]
    fn variadic_names() {
        assert!(is_variadic("..."));
        assert!(is_variadic("P1 .."));
        assert!(!is_variadic("P1"));
        assert!(!is_variadic("X.Y"));
    }
}
