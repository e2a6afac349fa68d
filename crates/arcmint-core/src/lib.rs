pub mod config;
pub mod logging;

pub mod asset;
pub mod env;
pub mod metadata_hash;
pub mod metadata_url;
pub mod network;
