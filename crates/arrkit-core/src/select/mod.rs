//! Bounded top-K selection.
//!
//! [`TopK`] works over any `(key, value)` iterator; [`min_x`] / [`max_x`]
//! and their `_with` variants are the [`OrderedMap`](crate::model::OrderedMap)
//! front-end with operation logging.

pub mod buffer;
pub mod map;
pub mod top_k;

pub use buffer::{Extremum, SelectionBuffer};
pub use map::{max_x, max_x_with, min_x, min_x_with};
pub use top_k::TopK;
