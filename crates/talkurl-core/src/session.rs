//! Session record as delivered by the schedule repository.

use serde::{Deserialize, Serialize};

/// A scheduled talk. Only the fields needed for URL composition are modeled.
///
/// Empty strings mean "not provided"; in particular an empty `url` means the
/// backend did not ship a direct link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub slug: String,
    pub session_id: String,
    pub title: String,
    pub description: String,
    pub room_name: String,
    pub url: String,
}
