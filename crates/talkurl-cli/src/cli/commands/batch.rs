//! `talkurl batch` – URLs for every session in a JSON file.

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use talkurl_core::batch::{compose_all, read_sessions};
use talkurl_core::config::ComposerConfig;
use talkurl_core::SessionUrlComposer;

/// One `<session id>\t<url>` line per session, in file order.
pub fn run_batch(cfg: &ComposerConfig, path: &Path, out: &mut impl Write) -> Result<()> {
    let sessions = read_sessions(path)?;
    let composer = SessionUrlComposer::from_config(cfg);
    for (session_id, url) in compose_all(&composer, &sessions) {
        writeln!(out, "{}\t{}", session_id, url)?;
    }
    Ok(())
}
