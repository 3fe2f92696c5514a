//! Bounded selection buffer.
//!
//! Holds at most `limit` entries. Once full it tracks the threshold: the
//! index of the worst kept value (largest for `Min`, smallest for `Max`).
//! A candidate is admitted only if strictly better than the threshold; it
//! then evicts the first entry holding the threshold value and the
//! threshold is recomputed by a linear rescan.

use crate::errors::{ArrError, Result};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Which end of the ordering a selection keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Keep the smallest values
    Min,
    /// Keep the largest values
    Max,
}

impl Extremum {
    /// Operation name used in logs and errors
    pub fn op_name(&self) -> &'static str {
        match self {
            Extremum::Min => "min_x",
            Extremum::Max => "max_x",
        }
    }

    /// `ord` is candidate-vs-threshold; true if the candidate is strictly better.
    fn improves(&self, ord: Ordering) -> bool {
        match self {
            Extremum::Min => ord == Ordering::Less,
            Extremum::Max => ord == Ordering::Greater,
        }
    }
}

pub(crate) fn compare<V: PartialOrd + Debug>(op: &str, a: &V, b: &V) -> Result<Ordering> {
    a.partial_cmp(b)
        .ok_or_else(|| ArrError::incomparable(op, a, b))
}

#[derive(Debug)]
pub struct SelectionBuffer<K, V> {
    extremum: Extremum,
    limit: usize,
    entries: Vec<(K, V)>,
    threshold: Option<usize>,
}

impl<K, V: PartialOrd + Debug> SelectionBuffer<K, V> {
    /// # Errors
    ///
    /// Returns `ArrError::InvalidLimit` when `limit` is zero.
    pub fn new(extremum: Extremum, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(ArrError::InvalidLimit {
                op: extremum.op_name().to_string(),
                limit,
            });
        }
        Ok(Self {
            extremum,
            limit,
            // the limit may be far larger than the input
            entries: Vec::with_capacity(limit.min(64)),
            threshold: None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current worst kept value, once the buffer is full.
    pub fn threshold(&self) -> Option<&V> {
        self.threshold.map(|i| &self.entries[i].1)
    }

    /// Offer a candidate. Returns whether it was kept.
    ///
    /// # Errors
    ///
    /// Returns `ArrError::Incomparable` if the candidate has no ordering
    /// against a buffered value.
    pub fn offer(&mut self, key: K, value: V) -> Result<bool> {
        if self.entries.len() < self.limit {
            self.entries.push((key, value));
            if self.entries.len() == self.limit {
                self.threshold = Some(self.worst_index()?);
            }
            return Ok(true);
        }

        let worst = match self.threshold {
            Some(i) => i,
            None => self.worst_index()?,
        };
        let ord = compare(self.extremum.op_name(), &value, &self.entries[worst].1)?;
        if !self.extremum.improves(ord) {
            return Ok(false);
        }

        self.entries.remove(worst);
        self.entries.push((key, value));
        self.threshold = Some(self.worst_index()?);
        Ok(true)
    }

    /// Index of the first entry holding the worst value.
    fn worst_index(&self) -> Result<usize> {
        let op = self.extremum.op_name();
        let mut worst = 0;
        for i in 1..self.entries.len() {
            let ord = compare(op, &self.entries[worst].1, &self.entries[i].1)?;
            // entries[i] is worse when the current worst would improve on it
            if self.extremum.improves(ord) {
                worst = i;
            }
        }
        Ok(worst)
    }

    /// Drain into a vector sorted ascending by value (stable).
    ///
    /// # Errors
    ///
    /// Returns `ArrError::Incomparable` if a kept value has no ordering
    /// (e.g. a lone NaN that was never compared during the scan).
    pub fn finish(self) -> Result<Vec<(K, V)>> {
        let op = self.extremum.op_name();
        if let Some((_, first)) = self.entries.first() {
            for (_, v) in &self.entries {
                compare(op, v, first)?;
            }
        }
        let mut entries = self.entries;
        // every pair is comparable after the check above
        entries.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        Ok(entries)
    }
}
