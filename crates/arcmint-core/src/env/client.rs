//! Algod / indexer / KMD endpoint configs resolved from [`EnvVars`].

use super::{keys, mask, EnvError, EnvVars};
use crate::network::Network;
use std::fmt;

const DEFAULT_KMD_WALLET: &str = "unencrypted-default-wallet";

/// Endpoint of an algod or indexer node.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server: String,
    /// Empty for hosted providers such as AlgoNode.
    pub port: String,
    pub token: String,
    pub network: Network,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("token", &mask(&self.token))
            .field("network", &self.network)
            .finish()
    }
}

impl ClientConfig {
    /// `server[:port]` for display.
    pub fn endpoint(&self) -> String {
        if self.port.is_empty() {
            self.server.clone()
        } else {
            format!("{}:{}", self.server, self.port)
        }
    }
}

/// Local KMD wallet daemon (localnet only).
#[derive(Clone, PartialEq, Eq)]
pub struct KmdConfig {
    pub server: String,
    pub port: String,
    pub token: String,
    pub wallet: String,
    pub password: String,
}

impl fmt::Debug for KmdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KmdConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("token", &mask(&self.token))
            .field("wallet", &self.wallet)
            .field("password", &mask(&self.password))
            .finish()
    }
}

/// Everything the app needs to talk to a network, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub network: Network,
    pub algod: ClientConfig,
    pub indexer: Option<ClientConfig>,
    pub kmd: Option<KmdConfig>,
}

impl NetworkConfig {
    pub fn from_env(env: &EnvVars) -> Result<Self, EnvError> {
        let algod = algod_config(env)?;
        let indexer = indexer_config(env)?;
        let kmd = if algod.network.is_localnet() {
            Some(kmd_config(env)?)
        } else {
            None
        };
        Ok(Self {
            network: algod.network,
            algod,
            indexer,
            kmd,
        })
    }
}

fn trim_trailing_slashes(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn network(env: &EnvVars) -> Result<Network, EnvError> {
    Ok(env.require(keys::ALGOD_NETWORK)?.parse()?)
}

pub fn algod_config(env: &EnvVars) -> Result<ClientConfig, EnvError> {
    let network = network(env)?;
    let server = trim_trailing_slashes(env.require(keys::ALGOD_SERVER)?);
    Ok(ClientConfig {
        server,
        port: env.get_or(keys::ALGOD_PORT, "").to_string(),
        token: env.get_or(keys::ALGOD_TOKEN, "").to_string(),
        network,
    })
}

/// `Ok(None)` when no indexer server is configured.
pub fn indexer_config(env: &EnvVars) -> Result<Option<ClientConfig>, EnvError> {
    let Some(server) = env.get(keys::INDEXER_SERVER) else {
        return Ok(None);
    };
    let network = network(env)?;
    Ok(Some(ClientConfig {
        server: trim_trailing_slashes(server),
        port: env.get_or(keys::INDEXER_PORT, "").to_string(),
        token: env.get_or(keys::INDEXER_TOKEN, "").to_string(),
        network,
    }))
}

pub fn kmd_config(env: &EnvVars) -> Result<KmdConfig, EnvError> {
    if !network(env)?.is_localnet() {
        return Err(EnvError::KmdRequiresLocalnet);
    }
    Ok(KmdConfig {
        server: trim_trailing_slashes(env.require(keys::KMD_SERVER)?),
        port: env.require(keys::KMD_PORT)?.to_string(),
        token: env.require(keys::KMD_TOKEN)?.to_string(),
        wallet: env.get_or(keys::KMD_WALLET, DEFAULT_KMD_WALLET).to_string(),
        password: env.get_or(keys::KMD_PASSWORD, "").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testnet_env() -> EnvVars {
        EnvVars::from_pairs([
            ("ALGOD_NETWORK", "testnet"),
            ("ALGOD_SERVER", "https://testnet-api.algonode.cloud//"),
            ("INDEXER_SERVER", "https://testnet-idx.algonode.cloud/"),
        ])
    }

    fn localnet_env() -> EnvVars {
        EnvVars::from_pairs([
            ("ALGOD_NETWORK", "localnet"),
            ("ALGOD_SERVER", "http://localhost"),
            ("ALGOD_PORT", "4001"),
            ("ALGOD_TOKEN", "a".repeat(64).as_str()),
            ("KMD_SERVER", "http://localhost/"),
            ("KMD_PORT", "4002"),
            ("KMD_TOKEN", "a".repeat(64).as_str()),
        ])
    }

    #[test]
    fn algod_strips_trailing_slashes_and_defaults_port() {
        let cfg = algod_config(&testnet_env()).unwrap();
        assert_eq!(cfg.server, "https://testnet-api.algonode.cloud");
        assert_eq!(cfg.port, "");
        assert_eq!(cfg.token, "");
        assert_eq!(cfg.network, Network::Testnet);
        assert_eq!(cfg.endpoint(), "https://testnet-api.algonode.cloud");
    }

    #[test]
    fn algod_requires_network_and_server() {
        let env = EnvVars::from_pairs([("ALGOD_SERVER", "http://x")]);
        assert_eq!(algod_config(&env), Err(EnvError::Missing("ALGOD_NETWORK")));
        let env = EnvVars::from_pairs([("ALGOD_NETWORK", "testnet")]);
        assert_eq!(algod_config(&env), Err(EnvError::Missing("ALGOD_SERVER")));
    }

    #[test]
    fn unknown_network_is_rejected() {
        let env = EnvVars::from_pairs([("ALGOD_NETWORK", "betanet"), ("ALGOD_SERVER", "http://x")]);
        assert!(matches!(algod_config(&env), Err(EnvError::InvalidNetwork(_))));
    }

    #[test]
    fn indexer_is_optional() {
        let env = EnvVars::from_pairs([("ALGOD_NETWORK", "testnet"), ("ALGOD_SERVER", "http://x")]);
        assert_eq!(indexer_config(&env), Ok(None));
        let idx = indexer_config(&testnet_env()).unwrap().unwrap();
        assert_eq!(idx.server, "https://testnet-idx.algonode.cloud");
    }

    #[test]
    fn kmd_only_on_localnet() {
        assert_eq!(kmd_config(&testnet_env()), Err(EnvError::KmdRequiresLocalnet));
        let kmd = kmd_config(&localnet_env()).unwrap();
        assert_eq!(kmd.server, "http://localhost");
        assert_eq!(kmd.port, "4002");
        assert_eq!(kmd.wallet, "unencrypted-default-wallet");
        assert_eq!(kmd.password, "");
    }

    #[test]
    fn network_config_bundles_endpoints() {
        let cfg = NetworkConfig::from_env(&testnet_env()).unwrap();
        assert_eq!(cfg.network, Network::Testnet);
        assert!(cfg.indexer.is_some());
        assert!(cfg.kmd.is_none());

        let cfg = NetworkConfig::from_env(&localnet_env()).unwrap();
        assert_eq!(cfg.algod.endpoint(), "http://localhost:4001");
        assert!(cfg.kmd.is_some());
    }

    #[test]
    fn debug_output_masks_tokens() {
        let cfg = algod_config(&localnet_env()).unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains(&"a".repeat(64)));
        assert!(dbg.contains("aaaa…aaaa"));
    }
}
