use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Key of an ordered map entry.
///
/// Integer keys are the sequential (list-position) keys; string keys are
/// named keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// Key for a JSON object member name. Canonical decimal integers
    /// (`"0"`, `"-3"`; not `"01"`, `"+1"` or `"-0"`) become integer keys,
    /// so integer keys survive a trip through JSON.
    pub fn from_member_name(name: String) -> Self {
        match name.parse::<i64>() {
            Ok(i) if i.to_string() == name => Key::Int(i),
            _ => Key::Str(name),
        }
    }
}

/// Integer keys sort before string keys; integers numerically, strings by
/// byte order.
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Int(a), Key::Int(b)) => a.cmp(b),
            (Key::Str(a), Key::Str(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Key::Int(_), Key::Str(_)) => Ordering::Less,
            (Key::Str(_), Key::Int(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Int(i as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_keys_sort_before_string_keys() {
        let mut keys = vec![Key::from("b"), Key::from(10), Key::from("a"), Key::from(2)];
        keys.sort();
        assert_eq!(
            keys,
            vec![Key::from(2), Key::from(10), Key::from("a"), Key::from("b")]
        );
    }

    #[test]
    fn test_member_names_parse_canonical_integers_only() {
        assert_eq!(Key::from_member_name("0".into()), Key::Int(0));
        assert_eq!(Key::from_member_name("-3".into()), Key::Int(-3));
        for name in ["01", "+1", "-0", " 1", "1.0", "", "name", "99999999999999999999"] {
            assert_eq!(Key::from_member_name(name.into()), Key::from(name), "{name}");
        }
    }

    #[test]
    fn test_display_is_literal() {
        assert_eq!(Key::from(7).to_string(), "7");
        assert_eq!(Key::from("name").to_string(), "name");
    }
}
