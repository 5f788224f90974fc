//! `talkurl config` – show where configuration lives and what is in effect.

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use talkurl_core::config::{self, ComposerConfig};

pub fn run_config(
    cfg: &ComposerConfig,
    explicit_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let path = match explicit_path {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    writeln!(out, "# {}", path.display())?;
    write!(out, "{}", toml::to_string_pretty(cfg)?)?;
    Ok(())
}
