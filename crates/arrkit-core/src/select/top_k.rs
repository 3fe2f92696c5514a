use crate::errors::Result;
use crate::select::buffer::{Extremum, SelectionBuffer};
use std::fmt::Debug;

/// Single-pass bounded top-K selection over `(key, value)` pairs.
///
/// Results always come back sorted ascending by value, for both the
/// smallest and the largest variant. Keys are carried through unchanged.
///
/// ```
/// use arrkit_core::select::TopK;
///
/// let scores = vec![(0, Some(5)), (1, Some(2)), (2, Some(8)), (3, Some(1))];
/// let lowest = TopK::smallest(2).select(scores).unwrap();
/// assert_eq!(lowest, vec![(3, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopK {
    extremum: Extremum,
    limit: usize,
}

impl TopK {
    pub fn new(extremum: Extremum, limit: usize) -> Self {
        Self { extremum, limit }
    }

    pub fn smallest(limit: usize) -> Self {
        Self::new(Extremum::Min, limit)
    }

    pub fn largest(limit: usize) -> Self {
        Self::new(Extremum::Max, limit)
    }

    pub fn extremum(&self) -> Extremum {
        self.extremum
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Select among pairs whose `None` values are skipped.
    ///
    /// # Errors
    ///
    /// - `InvalidLimit` if the limit is zero
    /// - `Incomparable` if two values have no ordering
    pub fn select<K, V, I>(&self, items: I) -> Result<Vec<(K, V)>>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        V: PartialOrd + Debug,
    {
        self.select_with(items, |_, _| true, |_, v| v)
    }

    /// Select with a filter and a transform.
    ///
    /// `filter` runs first; only pairs it accepts reach `transform`, whose
    /// output is what gets compared and returned. A `None` from `transform`
    /// drops the pair.
    ///
    /// # Errors
    ///
    /// - `InvalidLimit` if the limit is zero
    /// - `Incomparable` if two transformed values have no ordering
    pub fn select_with<K, V, W, I, P, T>(
        &self,
        items: I,
        mut filter: P,
        mut transform: T,
    ) -> Result<Vec<(K, W)>>
    where
        I: IntoIterator<Item = (K, V)>,
        P: FnMut(&K, &V) -> bool,
        T: FnMut(&K, V) -> Option<W>,
        W: PartialOrd + Debug,
    {
        let mut buffer = SelectionBuffer::new(self.extremum, self.limit)?;
        for (key, value) in items {
            if !filter(&key, &value) {
                continue;
            }
            if let Some(value) = transform(&key, value) {
                buffer.offer(key, value)?;
            }
        }
        buffer.finish()
    }
}
