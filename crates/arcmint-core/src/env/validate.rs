//! Deploy-stage validation and masked summaries of the environment.

use super::{keys, EnvError, EnvVars};
use crate::network::Network;
use serde::{Deserialize, Serialize};
use std::fmt;

const REQUIRED: &[&str] = &[keys::ALGOD_NETWORK, keys::ALGOD_SERVER, keys::INDEXER_SERVER];
const REQUIRED_LOCALNET: &[&str] = &[keys::KMD_SERVER, keys::KMD_PORT, keys::KMD_TOKEN];

/// Where the build is running, from `DEPLOY_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployStage {
    #[default]
    Development,
    Preview,
    Production,
}

impl DeployStage {
    /// Unknown or unset values fall back to development.
    pub fn from_env(env: &EnvVars) -> Self {
        match env
            .get(keys::DEPLOY_ENV)
            .map(|s| s.to_ascii_lowercase())
            .as_deref()
        {
            Some("preview") => DeployStage::Preview,
            Some("production") => DeployStage::Production,
            _ => DeployStage::Development,
        }
    }

    /// Required variables are only enforced on hosted stages.
    pub fn checks_required(&self) -> bool {
        matches!(self, DeployStage::Preview | DeployStage::Production)
    }

    /// Variable summaries are never logged in production.
    pub fn logs_summary(&self) -> bool {
        !matches!(self, DeployStage::Production)
    }
}

impl fmt::Display for DeployStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeployStage::Development => "development",
            DeployStage::Preview => "preview",
            DeployStage::Production => "production",
        };
        f.write_str(name)
    }
}

/// Checks required variables for `stage`.
///
/// Returns the missing keys. Missing keys are an error in production and a
/// warning in preview; development checks nothing.
pub fn validate(env: &EnvVars, stage: DeployStage) -> Result<Vec<&'static str>, EnvError> {
    if !stage.checks_required() {
        return Ok(Vec::new());
    }

    let localnet = env
        .get(keys::ALGOD_NETWORK)
        .and_then(|n| n.parse::<Network>().ok())
        .is_some_and(|n| n.is_localnet());

    let mut missing: Vec<&'static str> = REQUIRED
        .iter()
        .copied()
        .filter(|k| env.is_missing(k))
        .collect();
    if localnet {
        missing.extend(REQUIRED_LOCALNET.iter().copied().filter(|k| env.is_missing(k)));
    }

    if missing.is_empty() {
        return Ok(missing);
    }
    if stage == DeployStage::Production {
        return Err(EnvError::Validation { stage, missing });
    }
    tracing::warn!(%stage, missing = %missing.join(", "), "env validation: missing variables");
    Ok(missing)
}

/// Hides secrets for display: `(empty)`, `********` for short values, or
/// the first and last four characters.
pub fn mask(value: &str) -> String {
    if value.is_empty() {
        return "(empty)".to_string();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        return "********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// Display-safe (key, value) pairs for every recognized variable.
pub fn summary(env: &EnvVars) -> Vec<(&'static str, String)> {
    let plain = |key: &'static str| (key, env.get_or(key, "(empty)").to_string());
    let secret = |key: &'static str| (key, mask(env.get_or(key, "")));

    vec![
        (keys::DEPLOY_ENV, DeployStage::from_env(env).to_string()),
        plain(keys::ALGOD_NETWORK),
        plain(keys::ALGOD_SERVER),
        plain(keys::ALGOD_PORT),
        secret(keys::ALGOD_TOKEN),
        plain(keys::INDEXER_SERVER),
        plain(keys::INDEXER_PORT),
        secret(keys::INDEXER_TOKEN),
        plain(keys::KMD_SERVER),
        plain(keys::KMD_PORT),
        secret(keys::KMD_TOKEN),
        plain(keys::KMD_WALLET),
        secret(keys::KMD_PASSWORD),
    ]
}
