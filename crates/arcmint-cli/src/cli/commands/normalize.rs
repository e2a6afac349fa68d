//! `arcmint normalize <url>` – canonical ARC-3 URL within the ASA byte budget.

use anyhow::Result;
use arcmint_core::metadata_url::{self, MAX_ASA_URL_BYTES};

pub fn run_normalize(raw: &str) -> Result<()> {
    match metadata_url::normalize(raw) {
        Ok(url) => {
            println!("{url}");
            println!("Length: {}/{} bytes", url.byte_len(), MAX_ASA_URL_BYTES);
            Ok(())
        }
        Err(err) => anyhow::bail!("{err}. {}", err.hint()),
    }
}
