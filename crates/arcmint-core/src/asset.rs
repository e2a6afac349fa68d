//! Single-edition NFT creation request handed to an external signer.
//!
//! This module only prepares the request. Signing and submission belong to
//! the wallet.

use crate::metadata_hash::MetadataHash;
use crate::metadata_url::{self, UrlError};
use serde::{Deserialize, Serialize};

/// Asset parameters that do not depend on user input (config.toml `[asset]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetTemplate {
    pub asset_name: String,
    pub unit_name: String,
    pub total: u64,
    pub decimals: u32,
    pub default_frozen: bool,
}

impl Default for AssetTemplate {
    fn default() -> Self {
        Self {
            asset_name: "bTree Visitor Ticket".to_string(),
            unit_name: "MTK".to_string(),
            total: 1,
            decimals: 0,
            default_frozen: false,
        }
    }
}

/// Unsigned asset-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCreateRequest {
    pub sender: String,
    pub total: u64,
    pub decimals: u32,
    pub asset_name: String,
    pub unit_name: String,
    /// Normalized ARC-3 URL, at most 96 bytes.
    pub url: String,
    pub metadata_hash: MetadataHash,
    pub default_frozen: bool,
}

impl AssetCreateRequest {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MintError {
    #[error("no wallet connected: a sender address is required")]
    WalletNotConnected,
    #[error("asset is not a single edition (total={total}, decimals={decimals})")]
    NotSingleEdition { total: u64, decimals: u32 },
    #[error(transparent)]
    Url(#[from] UrlError),
}

/// Builds the creation request for one NFT from the sender and the raw metadata URL.
pub fn prepare_mint(
    sender: &str,
    raw_url: &str,
    template: &AssetTemplate,
) -> Result<AssetCreateRequest, MintError> {
    let sender = sender.trim();
    if sender.is_empty() {
        return Err(MintError::WalletNotConnected);
    }
    if template.total != 1 || template.decimals != 0 {
        return Err(MintError::NotSingleEdition {
            total: template.total,
            decimals: template.decimals,
        });
    }

    let url = metadata_url::normalize(raw_url)?;
    let metadata_hash = MetadataHash::of_source(raw_url);
    tracing::info!(
        sender,
        url = url.as_str(),
        bytes = url.byte_len(),
        hash = %metadata_hash,
        "prepared asset create request"
    );

    Ok(AssetCreateRequest {
        sender: sender.to_string(),
        total: template.total,
        decimals: template.decimals,
        asset_name: template.asset_name.clone(),
        unit_name: template.unit_name.clone(),
        url: url.into_string(),
        metadata_hash,
        default_frozen: template.default_frozen,
    })
}
