//! Order-insensitive structural fingerprints.

pub mod fingerprint;
pub mod structural;

pub use fingerprint::Fingerprint;
pub use structural::{fingerprint_value, structural_hash, structural_hash_report, HashReport};
