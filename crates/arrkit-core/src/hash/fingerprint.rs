use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex-encoded SHA256 digest of a structure's canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Digest arbitrary text.
    pub fn of_text(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_text_deterministic() {
        let a = Fingerprint::of_text("test");
        let b = Fingerprint::of_text("test");
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64); // SHA256 hex length
    }

    #[test]
    fn test_empty_text_digest() {
        assert_eq!(
            Fingerprint::of_text("").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let fp = Fingerprint::of_text("x");
        let json = serde_json::to_value(&fp).unwrap();
        assert_eq!(json, serde_json::Value::String(fp.into_string()));
    }
}
