//! Data model: keys, values and the insertion-ordered map.

pub mod key;
pub mod ordered_map;
pub mod value;

pub use key::Key;
pub use ordered_map::OrderedMap;
pub use value::Value;
