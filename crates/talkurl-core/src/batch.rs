//! Batch composition over a JSON list of sessions.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::composer::SessionUrlComposition;
use crate::session::Session;

/// Reads a JSON array of sessions.
pub fn read_sessions(path: &Path) -> Result<Vec<Session>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading sessions {}", path.display()))?;
    parse_sessions(&data).with_context(|| format!("parsing sessions {}", path.display()))
}

pub fn parse_sessions(json: &str) -> Result<Vec<Session>> {
    Ok(serde_json::from_str(json)?)
}

/// Pairs each session id with its composed URL (empty if none), in input order.
pub fn compose_all<C>(composer: &C, sessions: &[Session]) -> Vec<(String, String)>
where
    C: SessionUrlComposition + ?Sized,
{
    let pairs: Vec<(String, String)> = sessions
        .iter()
        .map(|s| (s.session_id.clone(), composer.session_url(s)))
        .collect();
    let without_url = pairs.iter().filter(|(_, url)| url.is_empty()).count();
    tracing::info!(
        "composed {} session urls ({} without url)",
        pairs.len(),
        without_url
    );
    pairs
}
