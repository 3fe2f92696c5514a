use crate::model::key::Key;
use crate::model::ordered_map::OrderedMap;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A value stored in an [`OrderedMap`].
///
/// `Opaque` stands for a host object that can be carried around but not
/// inspected; only its type label is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Map(OrderedMap),
    Opaque(String),
}

impl Value {
    /// Short name of the value's kind, used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Map(_) => "map",
            Value::Opaque(_) => "opaque",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)
        )
    }

    pub fn as_map(&self) -> Option<&OrderedMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of the value: ints, floats and numeric strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Truthiness: null, false, zero, `""`, `"0"` and the empty map are
    /// falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::Map(m) => !m.is_empty(),
            Value::Opaque(_) => true,
        }
    }

    /// Ordering between two values of compatible kinds.
    ///
    /// Ints and floats compare numerically with each other, strings by byte
    /// order, bools with bools. Any other pairing, or a NaN, has no ordering.
    pub fn try_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Value::Str(a), Value::Str(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Convert into a JSON value.
    ///
    /// Maps whose keys are exactly `0..n` in order become arrays, other maps
    /// become objects. Non-finite floats become `null`, opaque values their
    /// label.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Map(m) => m.to_json(),
            Value::Opaque(label) => serde_json::Value::String(label.clone()),
        }
    }
}

/// Exact ordering of an int against a float, without rounding the int.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, the first float past i64::MAX
    const I64_END: f64 = 9_223_372_036_854_775_808.0;
    if float.is_nan() {
        return None;
    }
    if float >= I64_END {
        return Some(Ordering::Less);
    }
    if float < -I64_END {
        return Some(Ordering::Greater);
    }
    let floor = float.floor();
    match i128::from(int).cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Some(Ordering::Less),
        ord => Some(ord),
    }
}

/// `PartialOrd` follows [`Value::try_cmp`].
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::Map(m) => write!(f, "{}", m.to_json()),
            Value::Opaque(label) => write!(f, "<{}>", label),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Map(OrderedMap::from_values(items.into_iter().map(Value::from)))
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Key::from_member_name(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<OrderedMap> for Value {
    fn from(m: OrderedMap) -> Self {
        Value::Map(m)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_cmp_mixes_int_and_float() {
        assert_eq!(
            Value::Int(2).try_cmp(&Value::Float(2.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Float(3.0).try_cmp(&Value::Int(3)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_try_cmp_large_int_against_float_is_exact() {
        let base: i64 = 1 << 53;
        let rounded = Value::Float(base as f64);
        assert_eq!(Value::Int(base + 1).try_cmp(&rounded), Some(Ordering::Greater));
        assert_eq!(rounded.try_cmp(&Value::Int(base + 1)), Some(Ordering::Less));
        assert_eq!(Value::Int(base).try_cmp(&rounded), Some(Ordering::Equal));
        assert_eq!(
            Value::Int(i64::MAX).try_cmp(&Value::Float(i64::MAX as f64)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Int(i64::MIN).try_cmp(&Value::Float(f64::NEG_INFINITY)),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::Int(-3).try_cmp(&Value::Float(-2.5)), Some(Ordering::Less));
        assert_eq!(Value::Int(-2).try_cmp(&Value::Float(-2.5)), Some(Ordering::Greater));
        assert_eq!(Value::Int(1).try_cmp(&Value::Float(f64::NAN)), None);
    }

    #[test]
    fn test_scalar_kinds() {
        assert!(Value::Int(1).is_scalar());
        assert!(Value::from("s").is_scalar());
        assert!(!Value::Null.is_scalar());
        assert!(!Value::Map(OrderedMap::new()).is_scalar());
        assert!(!Value::Opaque("fd".into()).is_scalar());
    }

    #[test]
    fn test_try_cmp_rejects_mismatched_kinds() {
        assert_eq!(Value::from("1").try_cmp(&Value::Int(1)), None);
        assert_eq!(Value::Null.try_cmp(&Value::Null), None);
        assert_eq!(Value::Float(f64::NAN).try_cmp(&Value::Float(1.0)), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from("0").is_truthy());
        assert!(!Value::Map(OrderedMap::new()).is_truthy());
        assert!(Value::from("a").is_truthy());
        assert!(Value::Float(0.1).is_truthy());
    }

    #[test]
    fn test_from_json_number_kinds() {
        assert_eq!(Value::from(serde_json::json!(3)), Value::Int(3));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
    }

    #[test]
    fn test_non_finite_float_serializes_as_null() {
        assert_eq!(Value::Float(f64::INFINITY).to_json(), serde_json::Value::Null);
    }
}
