//! Algorand network selection and the wallets offered on each network.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Localnet,
    #[default]
    Testnet,
    Mainnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Localnet => "localnet",
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
        }
    }

    pub fn is_localnet(&self) -> bool {
        *self == Network::Localnet
    }

    /// Wallet providers to enable: KMD only on localnet, browser/mobile wallets elsewhere.
    pub fn wallets(&self) -> &'static [WalletId] {
        match self {
            Network::Localnet => &[WalletId::Kmd],
            Network::Testnet | Network::Mainnet => {
                &[WalletId::Pera, WalletId::Lute, WalletId::Defly]
            }
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network {0:?} (expected localnet, testnet or mainnet)")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "localnet" => Ok(Network::Localnet),
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletId {
    Kmd,
    Pera,
    Lute,
    Defly,
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WalletId::Kmd => "kmd",
            WalletId::Pera => "pera",
            WalletId::Lute => "lute",
            WalletId::Defly => "defly",
        };
        f.write_str(name)
    }
}

/// Configured network compared with the one the wallet manager reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStatus {
    pub configured: String,
    pub active: String,
    pub mismatch: bool,
}

impl NetworkStatus {
    /// Both ids are compared lowercased; an empty side never counts as a mismatch.
    pub fn compare(configured: &str, active: &str) -> Self {
        let configured = configured.trim().to_ascii_lowercase();
        let active = active.trim().to_ascii_lowercase();
        let mismatch = !configured.is_empty() && !active.is_empty() && configured != active;
        Self {
            configured,
            active,
            mismatch,
        }
    }
}
