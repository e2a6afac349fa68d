//! ARC-3 metadata URL normalization.
//!
//! Turns a user-supplied metadata URL into a canonical `ipfs://…#arc3` string
//! that fits the 96-byte ASA URL field: known HTTP(S) gateways are rewritten
//! to `ipfs://`, the `#arc3` tag is appended if missing, and a trailing
//! `/metadata.json` is dropped once when the result is over budget.

mod gateway;
mod length;

use std::fmt;

pub use gateway::{canonicalize, Gateway, HostPattern, GATEWAYS};
pub use length::{byte_len, ARC3_TAG, MAX_ASA_URL_BYTES};

/// Scheme prefix accepted without further URL parsing.
const IPFS_SCHEME: &str = "ipfs://";

/// A metadata URL that passed validation and fits the ASA URL field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    value: String,
    byte_len: usize,
}

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Encoded length in bytes, always `<= MAX_ASA_URL_BYTES`.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Why a metadata URL was rejected. Both kinds are recoverable by asking the
/// user for different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("invalid metadata URL: expected ipfs:// or http(s)://")]
    InvalidUrlFormat,
    #[error("ASA URL is too long ({bytes}/96 bytes)")]
    UrlTooLong { bytes: usize },
}

impl UrlError {
    /// What to tell the user so they can fix their input.
    pub fn hint(&self) -> &'static str {
        match self {
            UrlError::InvalidUrlFormat => {
                "Please provide a valid metadata URL (ipfs:// or https://)."
            }
            UrlError::UrlTooLong { .. } => {
                "Use a shorter ipfs:// CID or pin the JSON file directly."
            }
        }
    }
}

/// Unenforced view of what `normalize` would produce, for live form previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub value: String,
    pub byte_len: usize,
    pub fits: bool,
}

/// True if `value` starts with `ipfs://` or parses as an absolute http(s) URL.
pub fn looks_like_ipfs_or_http(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if value.starts_with(IPFS_SCHEME) {
        return true;
    }
    url::Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn shape(trimmed: &str) -> String {
    length::fit(length::tag(canonicalize(trimmed)))
}

/// Normalizes a raw metadata URL for the ASA URL field.
///
/// # Examples
///
/// - `normalize("https://ipfs.io/ipfs/QmX")` → `"ipfs://QmX#arc3"`
/// - `normalize("ipfs://QmX#arc3")` → `"ipfs://QmX#arc3"` (unchanged)
/// - `normalize("not a url")` → `Err(UrlError::InvalidUrlFormat)`
pub fn normalize(raw: &str) -> Result<NormalizedUrl, UrlError> {
    let trimmed = raw.trim();
    if !looks_like_ipfs_or_http(trimmed) {
        tracing::debug!(input = trimmed, "rejected metadata URL: unrecognized format");
        return Err(UrlError::InvalidUrlFormat);
    }

    let value = shape(trimmed);
    let bytes = byte_len(&value);
    if bytes > MAX_ASA_URL_BYTES {
        tracing::debug!(bytes, url = %value, "rejected metadata URL: over budget");
        return Err(UrlError::UrlTooLong { bytes });
    }

    tracing::debug!(bytes, url = %value, "normalized metadata URL");
    Ok(NormalizedUrl {
        value,
        byte_len: bytes,
    })
}

/// Shapes non-empty input the way `normalize` would, without rejecting it.
pub fn preview(raw: &str) -> Option<Preview> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = shape(trimmed);
    let bytes = byte_len(&value);
    Some(Preview {
        value,
        byte_len: bytes,
        fits: bytes <= MAX_ASA_URL_BYTES,
    })
}
