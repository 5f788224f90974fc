//! Tests for slug, batch, config and config overrides.

use super::{config_file, parse, parse_cli, run_output};
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn cli_parse_slug() {
    match parse(&["talkurl", "slug", "Über Hacking"]) {
        CliCommand::Slug { title } => assert_eq!(title, "Über Hacking"),
        _ => panic!("expected Slug"),
    }
}

#[test]
fn cli_parse_batch() {
    match parse(&["talkurl", "batch", "/path/to/sessions.json"]) {
        CliCommand::Batch { path } => assert_eq!(path, Path::new("/path/to/sessions.json")),
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_config_with_path() {
    let cli = parse_cli(&["talkurl", "--config", "/etc/talkurl.toml", "config"]);
    assert!(matches!(cli.command, CliCommand::Config));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/talkurl.toml")));
}

#[test]
fn cli_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["talkurl"]).is_err());
}

#[test]
fn effective_config_applies_overrides() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(
        br#"
        session_url_template = "https://from-file.example/%s"
        server_backend_type = "FRAB"
        special_room_names = ["Foyer"]
    "#,
    )
    .unwrap();
    f.flush().unwrap();
    let path = f.path().to_str().unwrap();

    let cli = parse_cli(&["talkurl", "--config", path, "--backend", "PRETALXDGWK", "config"]);
    let cfg = cli.effective_config().unwrap();
    assert_eq!(cfg.server_backend_type, "PRETALXDGWK");
    assert_eq!(cfg.session_url_template, "https://from-file.example/%s");
    assert_eq!(cfg.special_room_names, ["Foyer"]);
}

#[test]
fn slug_prints_slug() {
    let out = run_output(&["talkurl", "slug", "Über Hacking: Teil 2 - Grundlagen"]);
    assert_eq!(out, "uber_hacking_teil_2_grundlagen\n");
}

#[test]
fn batch_prints_tab_separated_lines() {
    let cfg = config_file();
    let mut sessions = NamedTempFile::new().unwrap();
    sessions
        .write_all(
            br#"[
                { "sessionId": "1", "roomName": "Main Hall" },
                { "sessionId": "2", "roomName": "rC3 Lounge" },
                { "sessionId": "3", "roomName": "rC3 Lounge", "url": "https://talk.example/3" }
            ]"#,
        )
        .unwrap();
    sessions.flush().unwrap();

    let out = run_output(&[
        "talkurl",
        "--config",
        cfg.path().to_str().unwrap(),
        "batch",
        sessions.path().to_str().unwrap(),
    ]);
    assert_eq!(
        out,
        "1\thttps://example.org/talk/1\n2\t\n3\thttps://talk.example/3\n"
    );
}

#[test]
fn config_prints_path_header_and_toml() {
    let cfg = config_file();
    let path = cfg.path().to_str().unwrap();
    let out = run_output(&["talkurl", "--config", path, "config"]);

    let (header, body) = out.split_once('\n').unwrap();
    assert_eq!(header, format!("# {path}"));
    let parsed: talkurl_core::config::ComposerConfig = toml::from_str(body).unwrap();
    assert_eq!(parsed.server_backend_type, "FRAB");
    assert_eq!(parsed.session_url_template, "https://example.org/talk/%s");
    assert_eq!(parsed.special_room_names, ["rC3 Lounge"]);
}
