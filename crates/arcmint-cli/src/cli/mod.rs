//! CLI for preparing ARC-3 NFT mints.

mod commands;

use anyhow::Result;
use arcmint_core::config;
use arcmint_core::env::EnvVars;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use commands::{
    run_completions, run_env_check, run_hash, run_mint, run_network, run_normalize, run_preview,
};

/// Top-level CLI for arcmint.
#[derive(Debug, Parser)]
#[command(name = "arcmint")]
#[command(about = "arcmint: normalize ARC-3 metadata URLs and prepare NFT mints", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize a metadata URL to ipfs://…#arc3 within the 96-byte limit.
    Normalize {
        /// Metadata URL (ipfs:// or http(s)://).
        url: String,
    },

    /// Show what a metadata URL would normalize to, without enforcing limits.
    Preview {
        /// Metadata URL as typed.
        url: String,
    },

    /// Print the SHA-512/256 metadata hash of the input URL string.
    Hash {
        /// Metadata URL as typed.
        url: String,
    },

    /// Print the unsigned asset-create request for a single-edition NFT.
    Mint {
        /// Creator account address (the connected wallet).
        #[arg(long)]
        sender: String,
        /// Metadata URL (ipfs:// or http(s)://).
        url: String,
    },

    /// Validate endpoint variables for the current DEPLOY_ENV stage.
    EnvCheck,

    /// Show the configured network, enabled wallets and endpoints.
    Network {
        /// Network reported by the wallet manager, to check for a mismatch.
        #[arg(long, value_name = "ID")]
        active: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args(env: &EnvVars) -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Normalize { url } => run_normalize(&url)?,
            CliCommand::Preview { url } => run_preview(&url)?,
            CliCommand::Hash { url } => run_hash(&url)?,
            CliCommand::Mint { sender, url } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_mint(&cfg, &sender, &url)?;
            }
            CliCommand::EnvCheck => run_env_check(env)?,
            CliCommand::Network { active } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_network(&cfg, env, active.as_deref())?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
