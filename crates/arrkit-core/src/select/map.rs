//! `OrderedMap` front-end for top-K selection.
//!
//! `Value::Null` plays the role of "no value": such entries never take
//! part in the selection.

use crate::errors::Result;
use crate::logging_facility::macros::logged_op;
use crate::model::{Key, OrderedMap, Value};
use crate::select::buffer::Extremum;
use crate::select::top_k::TopK;

/// The `limit` entries with the smallest values, ascending by value.
///
/// # Errors
///
/// - `InvalidLimit` if `limit` is zero
/// - `Incomparable` if two non-null values have no ordering
///   (e.g. a string against a number)
pub fn min_x(map: &OrderedMap, limit: usize) -> Result<OrderedMap> {
    select_plain(Extremum::Min, map, limit)
}

/// The `limit` entries with the largest values, ascending by value.
///
/// # Errors
///
/// Same as [`min_x`].
pub fn max_x(map: &OrderedMap, limit: usize) -> Result<OrderedMap> {
    select_plain(Extremum::Max, map, limit)
}

/// [`min_x`] over entries accepted by `filter`, comparing (and returning)
/// the output of `transform`. A `Null` from `transform` drops the entry.
///
/// # Errors
///
/// Same as [`min_x`].
pub fn min_x_with<P, T>(map: &OrderedMap, limit: usize, filter: P, transform: T) -> Result<OrderedMap>
where
    P: FnMut(&Key, &Value) -> bool,
    T: FnMut(&Key, &Value) -> Value,
{
    select_mapped(Extremum::Min, map, limit, filter, transform)
}

/// Mirror of [`min_x_with`] keeping the largest transformed values.
///
/// # Errors
///
/// Same as [`min_x`].
pub fn max_x_with<P, T>(map: &OrderedMap, limit: usize, filter: P, transform: T) -> Result<OrderedMap>
where
    P: FnMut(&Key, &Value) -> bool,
    T: FnMut(&Key, &Value) -> Value,
{
    select_mapped(Extremum::Max, map, limit, filter, transform)
}

fn select_plain(extremum: Extremum, map: &OrderedMap, limit: usize) -> Result<OrderedMap> {
    let op = extremum.op_name();
    logged_op!(op, { item_count = map.len() as u64, limit = limit as u64 }, {
        let items = map.iter().map(|(k, v)| (k, (!v.is_null()).then_some(v)));
        TopK::new(extremum, limit).select(items).map(|top| {
            top.into_iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<OrderedMap>()
        })
    })
}

fn select_mapped<P, T>(
    extremum: Extremum,
    map: &OrderedMap,
    limit: usize,
    mut filter: P,
    mut transform: T,
) -> Result<OrderedMap>
where
    P: FnMut(&Key, &Value) -> bool,
    T: FnMut(&Key, &Value) -> Value,
{
    let op = extremum.op_name();
    logged_op!(op, { item_count = map.len() as u64, limit = limit as u64 }, {
        TopK::new(extremum, limit)
            .select_with(
                map.iter(),
                |k, v| filter(*k, *v),
                |k, v| {
                    let out = transform(*k, v);
                    (!out.is_null()).then_some(out)
                },
            )
            .map(|top| {
                top.into_iter()
                    .map(|(k, v)| (k.clone(), v))
                    .collect::<OrderedMap>()
            })
    })
}
