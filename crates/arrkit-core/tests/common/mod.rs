use arrkit_core::model::{Key, OrderedMap, Value};

/// Build an integer-keyed map; `None` becomes `Value::Null`.
#[allow(dead_code)]
pub fn int_pairs(pairs: &[(i64, Option<i64>)]) -> OrderedMap {
    pairs
        .iter()
        .map(|(k, v)| (Key::Int(*k), Value::from(*v)))
        .collect()
}

/// `(key, int value)` view of a map, for concise assertions.
#[allow(dead_code)]
pub fn entries(map: &OrderedMap) -> Vec<(Key, i64)> {
    map.iter()
        .filter_map(|(k, v)| v.as_i64().map(|i| (k.clone(), i)))
        .collect()
}
