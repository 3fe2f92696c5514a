//! arrkit core - selection, fingerprinting and comparison over ordered maps
//!
//! This crate provides:
//! - An insertion-ordered key/value model ([`OrderedMap`], [`Value`], [`Key`])
//! - Bounded top-K selection (`min_x` / `max_x`)
//! - Deterministic, optionally order-insensitive structural fingerprints
//! - Deep structural equality with strict or loose scalar matching
//! - Random choice and sampling from an injected random source
//! - Sorting by explicit comparator or key function
//!
//! Everything is pure and synchronous; operations log through `tracing`
//! (see [`logging_facility`]).

pub mod compare;
pub mod errors;
pub mod hash;
pub mod logging_facility;
pub mod model;
pub mod sample;
pub mod select;
pub mod sort;

// Re-export commonly used types
pub use compare::{deep_equal, Strictness};
pub use errors::{ArrError, ExError, ExErrorKind, Result};
pub use hash::{fingerprint_value, structural_hash, structural_hash_report, Fingerprint};
pub use model::{Key, OrderedMap, Value};
pub use sample::{choose, sample};
pub use select::{max_x, max_x_with, min_x, min_x_with, TopK};
pub use sort::{sort_by_comparator, sort_by_key_fn, Comparator, KeyFn};

#[doc(hidden)]
pub mod __private {
    pub use arrkit_core_types::schema;
    pub use tracing;
}
