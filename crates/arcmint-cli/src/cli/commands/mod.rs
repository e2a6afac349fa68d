//! CLI command handlers. Each command is in its own file.

mod completions;
mod env_check;
mod hash;
mod mint;
mod network;
mod normalize;
mod preview;

pub use completions::run_completions;
pub use env_check::run_env_check;
pub use hash::run_hash;
pub use mint::run_mint;
pub use network::run_network;
pub use normalize::run_normalize;
pub use preview::run_preview;
