//! Session URL composition.
//!
//! Picks the public web page of a session. How the URL is obtained depends on
//! the backend the schedule came from:
//!
//! - Pentabarf: template + session slug.
//! - Winterkongress pretalx: template + slug derived from the title, but only
//!   for sessions with a description (the website has no page for the rest).
//! - Everything else: the URL shipped by the backend, falling back to
//!   template + session id unless the session is held in a special room.
//!
//! An empty string means "no URL".

use std::collections::HashSet;

use crate::backend::BackendType;
use crate::config::ComposerConfig;
use crate::session::Session;
use crate::slug::slugify_title;
use crate::template::UrlTemplate;

/// Room holding volunteer shifts; its entries have no talk page.
pub const ENGELSYSTEM_ROOM_NAME: &str = "Engelshifts";

/// Room names whose sessions have no per-session page by default.
pub const DEFAULT_SPECIAL_ROOM_NAMES: [&str; 3] = [
    ENGELSYSTEM_ROOM_NAME,
    // rC3 2020
    "ChaosTrawler",
    "rC3 Lounge",
];

const NO_URL: &str = "";

/// Anything that can produce the website URL of a session.
pub trait SessionUrlComposition {
    /// Returns the URL of `session`, or an empty string if there is none.
    fn session_url(&self, session: &Session) -> String;
}

impl<F> SessionUrlComposition for F
where
    F: Fn(&Session) -> String,
{
    fn session_url(&self, session: &Session) -> String {
        self(session)
    }
}

/// Backend-aware [`SessionUrlComposition`].
#[derive(Debug, Clone)]
pub struct SessionUrlComposer {
    template: UrlTemplate,
    backend: BackendType,
    special_room_names: HashSet<String>,
}

impl SessionUrlComposer {
    pub fn new<I, S>(
        template: impl Into<UrlTemplate>,
        backend: BackendType,
        special_room_names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template: template.into(),
            backend,
            special_room_names: special_room_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Composer with the default special room names.
    pub fn with_default_rooms(template: impl Into<UrlTemplate>, backend: BackendType) -> Self {
        Self::new(template, backend, DEFAULT_SPECIAL_ROOM_NAMES)
    }

    /// Builds a composer from loaded configuration.
    ///
    /// Suspicious settings are logged but not rejected; they only show up as
    /// odd URLs later.
    pub fn from_config(cfg: &ComposerConfig) -> Self {
        let backend = BackendType::from_name(&cfg.server_backend_type);
        if !backend.is_known() {
            tracing::warn!(
                "unknown server backend type {:?}, using default URL strategy",
                cfg.server_backend_type
            );
        }

        let template = UrlTemplate::new(cfg.session_url_template.clone());
        let placeholders = template.placeholder_count();
        if placeholders != 1 {
            tracing::warn!(
                "session URL template {:?} has {} placeholders, expected 1",
                template.as_str(),
                placeholders
            );
        }

        Self::new(template, backend, cfg.special_room_names.iter().cloned())
    }

    pub fn backend(&self) -> &BackendType {
        &self.backend
    }

    pub fn template(&self) -> &UrlTemplate {
        &self.template
    }

    pub fn is_special_room(&self, room_name: &str) -> bool {
        self.special_room_names.contains(room_name)
    }

    fn composed_url(&self, identifier: &str) -> String {
        self.template.compose(identifier)
    }

    fn winterkongress_url(&self, session: &Session) -> String {
        if session.description.is_empty() {
            tracing::trace!(session_id = %session.session_id, "no description, no website page");
            return NO_URL.to_string();
        }
        self.composed_url(&slugify_title(&session.title))
    }

    fn default_url(&self, session: &Session) -> String {
        if !session.url.is_empty() {
            return session.url.clone();
        }
        if self.is_special_room(&session.room_name) {
            tracing::trace!(
                session_id = %session.session_id,
                room = %session.room_name,
                "special room, no website page"
            );
            return NO_URL.to_string();
        }
        self.composed_url(&session.session_id)
    }
}

impl SessionUrlComposition for SessionUrlComposer {
    fn session_url(&self, session: &Session) -> String {
        let url = match &self.backend {
            BackendType::Pentabarf => self.composed_url(&session.slug),
            BackendType::PretalxDgwk => self.winterkongress_url(session),
            BackendType::Frab | BackendType::Pretalx | BackendType::Other(_) => {
                self.default_url(session)
            }
        };
        tracing::debug!(
            backend = %self.backend,
            session_id = %session.session_id,
            "session url: {:?}",
            url
        );
        url
    }
}
