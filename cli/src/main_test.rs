use clap::CommandFactory;

use super::*;

fn args(start: u32, end: u32) -> RefreshArgs {
    RefreshArgs {
        api_key: "key".to_owned(),
        chain: "ethereum".to_owned(),
        contract: "0xabc".to_owned(),
        start,
        end,
        delay_ms: 0,
    }
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn refresh_defaults_cover_whole_collection() {
    let cli = Cli::try_parse_from(["gods-cli", "refresh", "--api-key", "k"]).unwrap();
    let Command::Refresh(args) = cli.command else {
        panic!("expected refresh");
    };
    assert_eq!(args.ids().unwrap(), 0..=3332);
    assert_eq!(args.delay_ms, 300);
    assert_eq!(args.contract, "0x134590acb661da2b318bcde6b39ef5cf8208e372");
}

#[test]
fn refresh_url_shape() {
    assert_eq!(
        refresh_url("ethereum", "0xabc", 7),
        "https://api.opensea.io/api/v2/chain/ethereum/contract/0xabc/nfts/7/refresh"
    );
}

#[test]
fn reversed_range_is_rejected() {
    assert!(matches!(args(5, 2).ids(), Err(CliError::InvalidRange { start: 5, end: 2 })));
    assert_eq!(args(3, 3).ids().unwrap().count(), 1);
}

#[test]
fn summary_counts_outcomes() {
    let mut summary = RefreshSummary::default();
    for outcome in [
        RefreshOutcome::Refreshed(200),
        RefreshOutcome::Rejected(429),
        RefreshOutcome::Failed("timeout".to_owned()),
        RefreshOutcome::Refreshed(202),
    ] {
        summary.record(&outcome);
    }
    assert_eq!(summary, RefreshSummary { refreshed: 2, rejected: 1, failed: 1 });
    assert_eq!(summary.total(), 4);
    assert_eq!(summary.unsuccessful(), 2);
}
