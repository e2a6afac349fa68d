//! 32-byte metadata digest supplied alongside the ASA URL.
//!
//! The digest is SHA-512/256 over the trimmed metadata URL the user typed,
//! not over the normalized URL and not over the referenced file's contents.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha512_256};
use std::fmt;

/// SHA-512/256 digest carried in the asset's metadata hash field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataHash([u8; MetadataHash::LEN]);

impl MetadataHash {
    pub const LEN: usize = 32;

    /// Digest of the raw input string (surrounding whitespace removed).
    pub fn of_source(raw: &str) -> Self {
        let digest = Sha512_256::digest(raw.trim().as_bytes());
        let mut out = [0u8; Self::LEN];
        out.copy_from_slice(&digest);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for MetadataHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for MetadataHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector_abc() {
        assert_eq!(
            MetadataHash::of_source("abc").to_hex(),
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
        );
    }

    #[test]
    fn whitespace_is_trimmed_before_hashing() {
        assert_eq!(
            MetadataHash::of_source("  abc\n"),
            MetadataHash::of_source("abc")
        );
    }

    #[test]
    fn hashes_raw_input_not_normalized_url() {
        let raw = "https://ipfs.io/ipfs/QmX";
        assert_ne!(
            MetadataHash::of_source(raw),
            MetadataHash::of_source("ipfs://QmX#arc3")
        );
    }

    #[test]
    fn serializes_as_hex_string() {
        let h = MetadataHash::of_source("abc");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"{}\"", h.to_hex()));
        assert_eq!(h.as_bytes().len(), MetadataHash::LEN);
    }
}
