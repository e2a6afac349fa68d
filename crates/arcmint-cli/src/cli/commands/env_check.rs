//! `arcmint env-check` – validate endpoint variables for the deploy stage.

use anyhow::Result;
use arcmint_core::env::{self, DeployStage, EnvVars};

pub fn run_env_check(vars: &EnvVars) -> Result<()> {
    let stage = DeployStage::from_env(vars);
    println!("Stage: {stage}");

    if stage.logs_summary() {
        for (key, value) in env::summary(vars) {
            tracing::info!("{key}: {value}");
            println!("{key}: {value}");
        }
    }

    let missing = env::validate(vars, stage).inspect_err(|e| tracing::error!("{e}"))?;
    if missing.is_empty() {
        println!("Environment OK");
    } else {
        println!("Missing: {}", missing.join(", "));
    }
    Ok(())
}
