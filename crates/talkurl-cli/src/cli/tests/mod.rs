//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

pub(super) fn parse_cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn parse(args: &[&str]) -> CliCommand {
    parse_cli(args).command
}

/// Writes a config file for the default backend with "rC3 Lounge" as special room.
pub(super) fn config_file() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(
        br#"
        session_url_template = "https://example.org/talk/%s"
        server_backend_type = "FRAB"
        special_room_names = ["rC3 Lounge"]
    "#,
    )
    .unwrap();
    f.flush().unwrap();
    f
}

/// Runs the CLI with `args` and returns what it printed.
pub(super) fn run_output(args: &[&str]) -> String {
    let mut out = Vec::new();
    parse_cli(args).run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

mod rest;
