//! `arcmint network` – configured network, wallets and endpoints.

use anyhow::Result;
use arcmint_core::config::AppConfig;
use arcmint_core::env::{EnvVars, NetworkConfig};
use arcmint_core::network::NetworkStatus;

pub fn run_network(cfg: &AppConfig, vars: &EnvVars, active: Option<&str>) -> Result<()> {
    let network = cfg.effective_network(vars);
    println!("Network: {network}");

    let wallets: Vec<String> = network.wallets().iter().map(|w| w.to_string()).collect();
    println!("Wallets: {}", wallets.join(", "));

    match NetworkConfig::from_env(vars) {
        Ok(endpoints) => {
            println!("Algod: {}", endpoints.algod.endpoint());
            if let Some(indexer) = &endpoints.indexer {
                println!("Indexer: {}", indexer.endpoint());
            }
            if let Some(kmd) = &endpoints.kmd {
                println!("KMD: {}:{} (wallet {})", kmd.server, kmd.port, kmd.wallet);
            }
        }
        Err(err) => {
            tracing::warn!("endpoints not configured: {err}");
            println!("Endpoints: not configured ({err})");
        }
    }

    if let Some(active) = active {
        let status = NetworkStatus::compare(network.as_str(), active);
        if status.mismatch {
            println!(
                "ENV ≠ ACTIVE: env says {:?}, wallet manager is on {:?}",
                status.configured, status.active
            );
        }
    }
    Ok(())
}
