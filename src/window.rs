//! Fixed-width lookahead over a one-way sequence.
//!
//! The extractors share a single `Windows` cursor: each call to `next`
//! advances the span by exactly one item, so whoever holds the cursor next
//! resumes at the line the previous holder stopped on.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Smallest useful window: one current item plus one item of lookahead.
pub const MIN_WINDOW: usize = 2;

/// Lazy sequence of contiguous, overlapping spans of `size` items.
#[derive(Debug)]
pub struct Windows<I: Iterator> {
    iter: I,
    buf: VecDeque<I::Item>,
    size: usize,
    exhausted: bool,
}

/// Wrap `source` in a sliding window of `size` items.
///
/// Yields `max(0, n - size + 1)` spans for a source of `n` items. Fails
/// before touching the source when `size < 2`.
pub fn windows<S: IntoIterator>(source: S, size: usize) -> Result<Windows<S::IntoIter>> {
    if size < MIN_WINDOW {
        return Err(Error::InvalidWindow(size));
    }
    Ok(Windows {
        iter: source.into_iter(),
        buf: VecDeque::with_capacity(size),
        size,
        exhausted: false,
    })
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if self.buf.len() < self.size {
            // First span: fill the whole buffer or give up.
            while self.buf.len() < self.size {
                match self.iter.next() {
                    Some(item) => self.buf.push_back(item),
                    None => {
                        self.exhausted = true;
                        self.buf.clear();
                        return None;
                    }
                }
            }
        } else {
            match self.iter.next() {
                Some(item) => {
                    self.buf.pop_front();
                    self.buf.push_back(item);
                }
                None => {
                    self.exhausted = true;
                    return None;
                }
            }
        }

        Some(self.buf.iter().cloned().collect())
    }
}

impl<I> FusedIterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pairs_by_default_width() {
        let spans: Vec<_> = windows(0..10, 2).unwrap().collect();
        assert_eq!(spans.len(), 9);
        assert_eq!(spans[0], vec![0, 1]);
        assert_eq!(spans[4], vec![4, 5]);
        assert_eq!(spans[8], vec![8, 9]);
    }

    #[test]
    fn triples() {
        let spans: Vec<_> = windows(0..5, 3).unwrap().collect();
        assert_eq!(spans, vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]);
    }

    #[test]
    fn short_source_yields_nothing() {
        assert_eq!(windows([0], 3).unwrap().count(), 0);
        assert_eq!(windows(Vec::<i32>::new(), 2).unwrap().count(), 0);
    }

    #[test]
    fn exact_length_yields_one_span() {
        let spans: Vec<_> = windows(["a", "b", "c"], 3).unwrap().collect();
        assert_eq!(spans, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn rejects_narrow_windows() {
        assert_eq!(windows(0..10, 1).unwrap_err(), Error::InvalidWindow(1));
        assert_eq!(windows(0..10, 0).unwrap_err(), Error::InvalidWindow(0));
    }

    #[test]
    fn stays_exhausted() {
        let mut w = windows(0..3, 2).unwrap();
        assert_eq!(w.next(), Some(vec![0, 1]));
        assert_eq!(w.next(), Some(vec![1, 2]));
        assert_eq!(w.next(), None);
        assert_eq!(w.next(), None);
    }

    #[test]
    fn shared_cursor_resumes_where_left() {
        let mut w = windows(0..6, 3).unwrap();
        assert_eq!(w.next(), Some(vec![0, 1, 2]));
        let taken: Vec<_> = w.by_ref().take(2).collect();
        assert_eq!(taken, vec![vec![1, 2, 3], vec![2, 3, 4]]);
        assert_eq!(w.next(), Some(vec![3, 4, 5]));
    }

    proptest! {
        #[test]
        fn span_count_and_contiguity(n in 0usize..64, size in 2usize..8) {
            let spans: Vec<Vec<usize>> = windows(0..n, size).unwrap().collect();
            prop_assert_eq!(spans.len(), (n + 1).saturating_sub(size));
            for (start, span) in spans.iter().enumerate() {
                let expected: Vec<usize> = (start..start + size).collect();
                prop_assert_eq!(span, &expected);
            }
        }

        #[test]
        fn narrow_always_fails(size in 0usize..2, n in 0usize..16) {
            prop_assert_eq!(windows(0..n, size).unwrap_err(), Error::InvalidWindow(size));
        }
    }
}
