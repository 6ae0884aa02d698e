//! Overload expansion over the optional-group tree.
//!
//! A signature is produced by walking the argument tree with a budget of
//! groups that may be entered. Leaves are always taken; a group is entered
//! only while budget remains, costing one unit, and a skipped group drops
//! everything nested under it. The overload series raises the budget one
//! step at a time and ends at the first budget that cannot be spent.

use crate::model::ArgNode;
use std::iter::FusedIterator;

/// Flatten `args`, entering at most `budget` groups depth-first.
///
/// Returns the flattened names and the unspent budget.
pub fn delve_overloads(args: &[ArgNode], budget: usize) -> (Vec<&str>, usize) {
    let mut names = Vec::new();
    let leftover = delve_into(args, budget, &mut names);
    (names, leftover)
}

fn delve_into<'a>(args: &'a [ArgNode], mut budget: usize, names: &mut Vec<&'a str>) -> usize {
    for arg in args {
        match arg {
            ArgNode::Leaf(name) => names.push(name),
            ArgNode::Group(nodes) if budget > 0 => {
                budget = delve_into(nodes, budget - 1, names);
            }
            ArgNode::Group(_) => {}
        }
    }
    budget
}

/// Signatures for budgets `1, 2, 3, …`, least expanded first.
///
/// The budget-zero signature is the default declaration and is not part of
/// the series.
pub fn progress_overloads(args: &[ArgNode]) -> Overloads<'_> {
    Overloads {
        args,
        budget: 0,
        done: false,
    }
}

#[derive(Debug, Clone)]
pub struct Overloads<'a> {
    args: &'a [ArgNode],
    budget: usize,
    done: bool,
}

impl<'a> Iterator for Overloads<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.budget += 1;
        let (names, leftover) = delve_overloads(self.args, self.budget);
        if leftover > 0 {
            self.done = true;
            return None;
        }
        Some(names)
    }
}

impl FusedIterator for Overloads<'_> {}
