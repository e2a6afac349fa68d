use crate::asset::AssetTemplate;
use crate::network::Network;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/arcmint/config.toml`.
///
/// Endpoints come from the environment (see `env`); this file holds mint
/// defaults that do not change between deployments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Network used for wallet selection when `ALGOD_NETWORK` is unset.
    #[serde(default)]
    pub network: Network,
    /// Asset parameters for minted tickets.
    #[serde(default)]
    pub asset: AssetTemplate,
}

impl AppConfig {
    /// `ALGOD_NETWORK` if set and valid, otherwise the configured fallback.
    pub fn effective_network(&self, env: &crate::env::EnvVars) -> Network {
        env.get(crate::env::keys::ALGOD_NETWORK)
            .and_then(|n| n.parse().ok())
            .unwrap_or(self.network)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("arcmint")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

pub fn load_or_init_at(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let default_cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvVars;

    #[test]
    fn default_config_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.network, Network::Testnet);
        assert_eq!(cfg.asset.asset_name, "bTree Visitor Ticket");
        assert_eq!(cfg.asset.unit_name, "MTK");
        assert_eq!(cfg.asset.total, 1);
        assert_eq!(cfg.asset.decimals, 0);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_asset_section() {
        let toml = r#"
            network = "mainnet"

            [asset]
            asset_name = "Gala Pass"
        "#;
        let cfg: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.network, Network::Mainnet);
        assert_eq!(cfg.asset.asset_name, "Gala Pass");
        assert_eq!(cfg.asset.unit_name, "MTK");
        assert!(!cfg.asset.default_frozen);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(created, loaded);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "network = \"betanet\"").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }

    #[test]
    fn env_network_overrides_config() {
        let cfg = AppConfig::default();
        let env = EnvVars::from_pairs([("ALGOD_NETWORK", "localnet")]);
        assert_eq!(cfg.effective_network(&env), Network::Localnet);
        assert_eq!(cfg.effective_network(&EnvVars::default()), Network::Testnet);
    }
}
