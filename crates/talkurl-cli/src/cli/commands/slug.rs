//! `talkurl slug` – slug derived from a title.

use anyhow::Result;
use std::io::Write;
use talkurl_core::slug::slugify_title;

pub fn run_slug(title: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", slugify_title(title))?;
    Ok(())
}
