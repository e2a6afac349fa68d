//! `arcmint mint --sender <addr> <url>` – unsigned asset-create request as JSON.

use anyhow::{Context, Result};
use arcmint_core::asset::{prepare_mint, MintError};
use arcmint_core::config::AppConfig;

pub fn run_mint(cfg: &AppConfig, sender: &str, raw: &str) -> Result<()> {
    let request = match prepare_mint(sender, raw, &cfg.asset) {
        Ok(request) => request,
        Err(MintError::Url(err)) => anyhow::bail!("{err}. {}", err.hint()),
        Err(err) => return Err(err.into()),
    };
    let json = request
        .to_json_pretty()
        .context("serialize asset create request")?;
    println!("{json}");
    Ok(())
}
