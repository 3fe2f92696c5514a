//! Structural fingerprinting of nested ordered maps.
//!
//! Each entry renders to one text fragment:
//!
//! | value  | fragment              |
//! |--------|-----------------------|
//! | bool   | `{key}-{true\|false}` |
//! | scalar | `{key}:{value}`       |
//! | map    | `{key}:[{digest}]`    |
//! | null   | `{key}/`              |
//!
//! Fragments are joined with `\n` and digested. In orderless mode entries
//! are sorted by key first and integer keys render as an empty label, so
//! insertion order and list positions stop mattering. Sorting is by key,
//! never by value: orderless `[1, 2]` and `[2, 1]` still differ.
//!
//! A null value and an absent key render differently, unlike
//! [`deep_equal`](crate::compare::deep_equal), which treats them as equal.

use crate::errors::ExErrorKind;
use crate::hash::fingerprint::Fingerprint;
use crate::model::{Key, OrderedMap, Value};
use crate::{log_op_end, log_op_start};
use arrkit_core_types::schema::EVENT_UNSUPPORTED_VALUE;
use std::time::Instant;

const OP: &str = "structural_hash";

/// Fingerprint plus the dotted key paths of values that could not be
/// rendered and were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashReport {
    pub fingerprint: Fingerprint,
    pub skipped: Vec<String>,
}

impl HashReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Deterministic fingerprint of `map`.
///
/// ```
/// use arrkit_core::hash::structural_hash;
/// use arrkit_core::omap;
///
/// let a = omap! { "x" => 1, "y" => 2 };
/// let b = omap! { "y" => 2, "x" => 1 };
/// assert_eq!(structural_hash(&a, true), structural_hash(&b, true));
/// assert_ne!(structural_hash(&a, false), structural_hash(&b, false));
/// ```
pub fn structural_hash(map: &OrderedMap, orderless: bool) -> Fingerprint {
    structural_hash_report(map, orderless).fingerprint
}

/// Like [`structural_hash`], also reporting skipped entries.
///
/// Opaque values cannot be rendered: each one is logged as a warning,
/// listed in [`HashReport::skipped`] and omitted from the digest.
pub fn structural_hash_report(map: &OrderedMap, orderless: bool) -> HashReport {
    let started = Instant::now();
    log_op_start!(OP, item_count = map.len() as u64, orderless = orderless);

    let mut walker = Walker {
        orderless,
        path: Vec::new(),
        skipped: Vec::new(),
    };
    let fingerprint = walker.digest_map(map);

    log_op_end!(
        OP,
        duration_ms = started.elapsed().as_millis() as u64,
        skipped = walker.skipped.len() as u64
    );
    HashReport {
        fingerprint,
        skipped: walker.skipped,
    }
}

/// Fingerprint of a single value.
///
/// Maps are hashed structurally; scalars hash their text form (null as the
/// empty string). An opaque value is reported and hashes like null.
pub fn fingerprint_value(value: &Value, orderless: bool) -> Fingerprint {
    match value {
        Value::Map(m) => structural_hash(m, orderless),
        Value::Opaque(_) => {
            report_unsupported("", value);
            Fingerprint::of_text("")
        }
        scalar => Fingerprint::of_text(&scalar.to_string()),
    }
}

impl Fingerprint {
    /// Structural fingerprint in the default orderless mode.
    pub fn of(map: &OrderedMap) -> Self {
        structural_hash(map, true)
    }
}

struct Walker {
    orderless: bool,
    path: Vec<String>,
    skipped: Vec<String>,
}

impl Walker {
    fn digest_map(&mut self, map: &OrderedMap) -> Fingerprint {
        let entries: Vec<(&Key, &Value)> = if self.orderless {
            map.sorted_by_key()
        } else {
            map.iter().collect()
        };

        let mut fragments = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            self.path.push(key.to_string());
            if let Some(fragment) = self.render(key, value) {
                fragments.push(fragment);
            }
            self.path.pop();
        }
        Fingerprint::of_text(&fragments.join("\n"))
    }

    fn render(&mut self, key: &Key, value: &Value) -> Option<String> {
        let label = if self.orderless && key.is_int() {
            String::new()
        } else {
            key.to_string()
        };

        match value {
            Value::Bool(b) => Some(format!("{}-{}", label, b)),
            Value::Int(_) | Value::Float(_) | Value::Str(_) => Some(format!("{}:{}", label, value)),
            Value::Map(nested) => Some(format!("{}:[{}]", label, self.digest_map(nested))),
            Value::Null => Some(format!("{}/", label)),
            Value::Opaque(_) => {
                let key_path = self.path.join(".");
                report_unsupported(&key_path, value);
                self.skipped.push(key_path);
                None
            }
        }
    }
}

fn report_unsupported(key_path: &str, value: &Value) {
    tracing::warn!(
        component = module_path!(),
        op = OP,
        event = EVENT_UNSUPPORTED_VALUE,
        key_path = key_path,
        value_kind = value.kind(),
        err.code = ExErrorKind::UnsupportedValue.code(),
        "value cannot be fingerprinted; entry omitted"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::omap;

    const LIST_12: &str = "cde699d7d3722a16803309f8d9494c46959111b05a97c437b9384e862aeacaa0";

    #[test]
    fn test_known_digest_single_entry() {
        let fp = structural_hash(&omap! { "a" => 1 }, true);
        assert_eq!(
            fp.as_str(),
            "2b2c40a6706d9e5f320d553628313833e3668d8b0c8f5b0a25a2ca7d926df6d4"
        );
    }

    #[test]
    fn test_orderless_list_labels_are_blank() {
        let fp = structural_hash(&OrderedMap::from_values([1, 2]), true);
        assert_eq!(fp.as_str(), LIST_12);
    }

    #[test]
    fn test_nested_digest_embedded() {
        let map = omap! { "b" => OrderedMap::from_values([1, 2]), "a" => 1 };
        assert_eq!(
            structural_hash(&map, true).as_str(),
            "e3824673a7ec89ea09f417fd76473bbaf15e397cff9c0a2bde5429aeaccc8eef"
        );
    }

    #[test]
    fn test_fragment_kinds_in_insertion_order() {
        let map = omap! {
            "flag" => true,
            "none" => Value::Null,
            "ratio" => 0.5,
            "name" => "x",
        };
        assert_eq!(
            structural_hash(&map, false).as_str(),
            "2d52fe4cf9cce45e107c1a2f2b345c61a65cf1faf3c19c490cd4b81765972317"
        );
    }

    #[test]
    fn test_opaque_reported_and_omitted() {
        let with_handle = omap! {
            "a" => 1,
            "inner" => omap! { "conn" => Value::Opaque("socket".into()) },
        };
        let report = structural_hash_report(&with_handle, false);
        assert_eq!(report.skipped, vec!["inner.conn".to_string()]);
        assert!(!report.is_complete());

        let without = omap! { "a" => 1, "inner" => OrderedMap::new() };
        assert_eq!(report.fingerprint, structural_hash(&without, false));
    }

    #[test]
    fn test_fingerprint_value_scalars() {
        assert_eq!(
            fingerprint_value(&Value::Int(1), true),
            Fingerprint::of_text("1")
        );
        assert_eq!(fingerprint_value(&Value::Null, true), Fingerprint::of_text(""));
        assert_eq!(
            fingerprint_value(&Value::Map(OrderedMap::from_values([1, 2])), true).as_str(),
            LIST_12
        );
    }

    #[test]
    fn test_of_defaults_to_orderless() {
        let map = omap! { "z" => 1, "a" => 2 };
        assert_eq!(Fingerprint::of(&map), structural_hash(&map, true));
    }
}
