//! `arcmint preview <url>` – live form preview, never rejects.

use anyhow::Result;
use arcmint_core::metadata_url::{self, looks_like_ipfs_or_http, MAX_ASA_URL_BYTES};

pub fn run_preview(raw: &str) -> Result<()> {
    let Some(preview) = metadata_url::preview(raw) else {
        println!("Normalized: —");
        return Ok(());
    };

    println!("Normalized: {}", preview.value);
    let verdict = if preview.fits { "ok" } else { "too long" };
    println!(
        "Length: {}/{} bytes ({verdict})",
        preview.byte_len, MAX_ASA_URL_BYTES
    );
    if !looks_like_ipfs_or_http(raw.trim()) {
        println!("Warning: not an ipfs:// or http(s):// URL; mint would be rejected.");
    }
    Ok(())
}
