use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_normalize_many() {
    match parse(&["urlcount", "normalize", "http://a", "HTTP://B:80"]) {
        CliCommand::Normalize { urls } => assert_eq!(urls, vec!["http://a", "HTTP://B:80"]),
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_normalize_requires_a_url() {
    assert!(Cli::try_parse_from(["urlcount", "normalize"]).is_err());
}

#[test]
fn cli_parse_root_domain() {
    match parse(&["urlcount", "root-domain", "https://mail.example.net"]) {
        CliCommand::RootDomain { urls } => assert_eq!(urls, vec!["https://mail.example.net"]),
        _ => panic!("expected RootDomain"),
    }
}

#[test]
fn cli_parse_inspect() {
    match parse(&["urlcount", "inspect", "example", "--json"]) {
        CliCommand::Inspect { url, json } => {
            assert_eq!(url, "example");
            assert!(json);
        }
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["urlcount", "download"]).is_err());
}
