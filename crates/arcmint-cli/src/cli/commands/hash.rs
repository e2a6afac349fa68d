//! Hash command: SHA-512/256 of the metadata URL string.

use anyhow::Result;
use arcmint_core::metadata_hash::MetadataHash;

/// Print the metadata hash the mint request would carry for this input.
pub fn run_hash(raw: &str) -> Result<()> {
    let digest = MetadataHash::of_source(raw);
    println!("{}  {}", digest, raw.trim());
    Ok(())
}
