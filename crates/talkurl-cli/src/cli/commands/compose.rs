//! `talkurl compose` – URL of a single session.

use anyhow::Result;
use std::io::Write;
use talkurl_core::config::ComposerConfig;
use talkurl_core::{Session, SessionUrlComposer, SessionUrlComposition};

/// Writes the session URL followed by a newline; a bare newline if there is none.
pub fn run_compose(cfg: &ComposerConfig, session: &Session, out: &mut impl Write) -> Result<()> {
    let composer = SessionUrlComposer::from_config(cfg);
    writeln!(out, "{}", composer.session_url(session))?;
    Ok(())
}
