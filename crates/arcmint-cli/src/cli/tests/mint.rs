use super::*;
use clap_complete::Shell;

#[test]
fn cli_parse_mint() {
    match parse(&["arcmint", "mint", "--sender", "ADDR", "ipfs://QmX"]) {
        CliCommand::Mint { sender, url } => {
            assert_eq!(sender, "ADDR");
            assert_eq!(url, "ipfs://QmX");
        }
        _ => panic!("expected Mint"),
    }
}

#[test]
fn cli_mint_requires_sender() {
    assert!(Cli::try_parse_from(["arcmint", "mint", "ipfs://QmX"]).is_err());
}

#[test]
fn cli_parse_env_check() {
    match parse(&["arcmint", "env-check"]) {
        CliCommand::EnvCheck => {}
        _ => panic!("expected EnvCheck"),
    }
}

#[test]
fn cli_parse_network() {
    match parse(&["arcmint", "network"]) {
        CliCommand::Network { active } => assert!(active.is_none()),
        _ => panic!("expected Network"),
    }
}

#[test]
fn cli_parse_network_active() {
    match parse(&["arcmint", "network", "--active", "mainnet"]) {
        CliCommand::Network { active } => assert_eq!(active.as_deref(), Some("mainnet")),
        _ => panic!("expected Network with active"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["arcmint", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}
