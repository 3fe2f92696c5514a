//! Deep structural equality of nested ordered maps.
//!
//! Key order is irrelevant and a key mapped to `Null` is the same as an
//! absent key. Nested maps are compared with the same strictness as the
//! outer call, always on the value stored under the key being visited.

use crate::model::{OrderedMap, Value};
use crate::{log_op_end, log_op_start};
use std::time::Instant;

/// How scalars are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Same kind and same value: `Int(1)` differs from `Float(1.0)` and `"1"`.
    #[default]
    Strict,
    /// Values are coerced before matching: numbers (including numeric
    /// strings) compare numerically, bools by truthiness, and null equals
    /// any falsy value.
    Loose,
}

/// Whether `a` and `b` hold the same entries at every depth.
///
/// ```
/// use arrkit_core::compare::{deep_equal, Strictness};
/// use arrkit_core::model::Value;
/// use arrkit_core::omap;
///
/// let a = omap! { "a" => 1, "b" => Value::Null };
/// let b = omap! { "a" => 1 };
/// assert!(deep_equal(&a, &b, Strictness::Strict));
/// ```
pub fn deep_equal(a: &OrderedMap, b: &OrderedMap, strictness: Strictness) -> bool {
    let started = Instant::now();
    log_op_start!(
        "deep_equal",
        item_count = (a.len() + b.len()) as u64,
        strictness = ?strictness
    );

    let equal = maps_equal(a, b, strictness);

    log_op_end!(
        "deep_equal",
        duration_ms = started.elapsed().as_millis() as u64,
        equal = equal
    );
    equal
}

fn maps_equal(a: &OrderedMap, b: &OrderedMap, strictness: Strictness) -> bool {
    let a_matches = a
        .iter()
        .all(|(key, av)| values_equal(av, b.get(key).unwrap_or(&Value::Null), strictness));

    a_matches
        && b
            .iter()
            .filter(|(key, _)| !a.contains_key(key))
            .all(|(_, bv)| values_equal(&Value::Null, bv, strictness))
}

/// Equality of two values under `strictness`; maps recurse.
pub fn values_equal(a: &Value, b: &Value, strictness: Strictness) -> bool {
    if let (Value::Map(x), Value::Map(y)) = (a, b) {
        return maps_equal(x, y, strictness);
    }
    match strictness {
        Strictness::Strict => strict_eq(a, b),
        Strictness::Loose => loose_eq(a, b),
    }
}

fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Opaque(x), Value::Opaque(y)) => x == y,
        _ => false,
    }
}

fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Opaque(x), Value::Opaque(y)) => x == y,
        (Value::Opaque(_), _) | (_, Value::Opaque(_)) => false,
        (Value::Null, other) | (other, Value::Null) => !other.is_truthy(),
        (Value::Bool(x), other) | (other, Value::Bool(x)) => *x == other.is_truthy(),
        (Value::Str(x), Value::Str(y)) if x == y => true,
        _ => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}
