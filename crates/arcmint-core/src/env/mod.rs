//! Environment-provided network endpoints and their validation.
//!
//! The process environment is read once into an [`EnvVars`] snapshot at the
//! entry point and passed down explicitly; nothing else in the crate reads
//! `std::env`.

mod client;
mod validate;

use std::collections::BTreeMap;

pub use client::{algod_config, indexer_config, kmd_config, ClientConfig, KmdConfig, NetworkConfig};
pub use validate::{mask, summary, validate, DeployStage};

/// Recognized variable names.
pub mod keys {
    pub const DEPLOY_ENV: &str = "DEPLOY_ENV";
    pub const ALGOD_NETWORK: &str = "ALGOD_NETWORK";
    pub const ALGOD_SERVER: &str = "ALGOD_SERVER";
    pub const ALGOD_PORT: &str = "ALGOD_PORT";
    pub const ALGOD_TOKEN: &str = "ALGOD_TOKEN";
    pub const INDEXER_SERVER: &str = "INDEXER_SERVER";
    pub const INDEXER_PORT: &str = "INDEXER_PORT";
    pub const INDEXER_TOKEN: &str = "INDEXER_TOKEN";
    pub const KMD_SERVER: &str = "KMD_SERVER";
    pub const KMD_PORT: &str = "KMD_PORT";
    pub const KMD_TOKEN: &str = "KMD_TOKEN";
    pub const KMD_WALLET: &str = "KMD_WALLET";
    pub const KMD_PASSWORD: &str = "KMD_PASSWORD";
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("missing required env var: {0}")]
    Missing(&'static str),
    #[error(transparent)]
    InvalidNetwork(#[from] crate::network::UnknownNetwork),
    #[error("KMD config requested but {} is not localnet", keys::ALGOD_NETWORK)]
    KmdRequiresLocalnet,
    #[error("env validation {stage}: missing {}", .missing.join(", "))]
    Validation {
        stage: DeployStage,
        missing: Vec<&'static str>,
    },
}

/// Immutable snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars(BTreeMap<String, String>);

impl EnvVars {
    /// Snapshot of the current process environment (non-UTF-8 entries skipped).
    pub fn from_process() -> Self {
        Self::from_pairs(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Trimmed value; blank values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub(crate) fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub(crate) fn require(&self, key: &'static str) -> Result<&str, EnvError> {
        self.get(key).ok_or(EnvError::Missing(key))
    }

    pub fn is_missing(&self, key: &str) -> bool {
        self.get(key).is_none()
    }
}
