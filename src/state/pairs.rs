// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pair Enumerator.
//!
//! Visits every unordered index pair `(i, j)` with `j < i < len` exactly
//! once. The outer index runs down from `len - 1`, the inner index runs
//! down from `i - 1` to `0`:
//!
//! ```
//! use mixing_search::state::pairs::PairIter;
//!
//! let pairs: Vec<_> = PairIter::new(3).collect();
//! assert_eq!(pairs, vec![(2, 1), (2, 0), (1, 0)]);
//! ```

/// Iterator over unordered index pairs, in descending order.
#[derive(Debug, Clone)]
pub struct PairIter {
    /// Outer index plus one, so that zero means exhausted.
    outer: usize,
    /// Next inner index to yield, plus one.
    inner: usize,
}

impl PairIter {
    /// Enumerate the pairs of a state with `len` channels.
    pub fn new(len: usize) -> Self {
        let outer = len;
        let inner = len.saturating_sub(1);
        Self { outer, inner }
    }
}

impl Iterator for PairIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.outer > 0 {
            if self.inner > 0 {
                self.inner -= 1;
                return Some((self.outer - 1, self.inner));
            }
            self.outer -= 1;
            self.inner = self.outer.saturating_sub(1);
        }
        None
    }
}

/// Number of unordered pairs among `len` channels.
pub fn pair_count(len: usize) -> usize {
    len * len.saturating_sub(1) / 2
}
