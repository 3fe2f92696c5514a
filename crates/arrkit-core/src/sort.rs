//! Value sorting with explicitly typed callbacks.
//!
//! Callers pick a [`Comparator`] (two values in, an ordering out) or a
//! [`KeyFn`] (one value in, a sort key out). Both sorts are stable and
//! keep each entry's key.

use crate::errors::{ArrError, Result};
use crate::logging_facility::macros::logged_op;
use crate::model::{OrderedMap, Value};
use crate::{log_op_end, log_op_start};
use std::cmp::Ordering;
use std::time::Instant;

/// Orders two values directly.
pub type Comparator<'a> = &'a dyn Fn(&Value, &Value) -> Ordering;

/// Derives the value an entry is sorted by.
pub type KeyFn<'a> = &'a dyn Fn(&Value) -> Value;

/// Entries of `map` ordered by `cmp` on their values.
///
/// ```
/// use arrkit_core::model::{OrderedMap, Value};
/// use arrkit_core::sort::sort_by_comparator;
/// use std::cmp::Ordering;
///
/// let map = OrderedMap::from_values([3, 1, 2]);
/// let desc = |a: &Value, b: &Value| b.try_cmp(a).unwrap_or(Ordering::Equal);
/// let desc = sort_by_comparator(&map, &desc);
/// let values: Vec<_> = desc.values().filter_map(|v| v.as_i64()).collect();
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
pub fn sort_by_comparator(map: &OrderedMap, cmp: Comparator<'_>) -> OrderedMap {
    let started = Instant::now();
    log_op_start!("sort_by_comparator", item_count = map.len() as u64);

    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| cmp(a.1, b.1));
    let sorted: OrderedMap = entries
        .into_iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    log_op_end!(
        "sort_by_comparator",
        duration_ms = started.elapsed().as_millis() as u64,
        result_len = sorted.len() as u64
    );
    sorted
}

/// Entries of `map` ordered ascending by `key_fn` of their values.
///
/// Each key is computed once per entry.
///
/// # Errors
///
/// Returns `ArrError::Incomparable` if two derived keys have no ordering.
pub fn sort_by_key_fn(map: &OrderedMap, key_fn: KeyFn<'_>) -> Result<OrderedMap> {
    logged_op!("sort_by_key_fn", { item_count = map.len() as u64 }, {
        let mut keyed: Vec<_> = map.iter().map(|(k, v)| (key_fn(v), k, v)).collect();
        ensure_comparable(&keyed).map(|()| {
            // comparability checked above
            keyed.sort_by(|a, b| a.0.try_cmp(&b.0).unwrap_or(Ordering::Equal));
            keyed
                .into_iter()
                .map(|(_, k, v)| (k.clone(), v.clone()))
                .collect::<OrderedMap>()
        })
    })
}

fn ensure_comparable<A, B>(keyed: &[(Value, A, B)]) -> Result<()> {
    let Some((first, _, _)) = keyed.first() else {
        return Ok(());
    };
    match keyed.iter().find(|(k, _, _)| k.try_cmp(first).is_none()) {
        Some((bad, _, _)) => Err(ArrError::incomparable("sort_by_key_fn", bad, first)),
        None => Ok(()),
    }
}
