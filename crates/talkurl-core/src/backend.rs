//! Backend (schedule system) type driving the URL strategy.

use std::fmt;
use std::str::FromStr;

/// Scheduling system that produced the session data.
///
/// Parsed from the upper-case names used in build configuration. Names that
/// match no known system are kept in [`BackendType::Other`] and use the
/// default strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BackendType {
    Pentabarf,
    Frab,
    Pretalx,
    /// Pretalx export of the Digitale Gesellschaft Winterkongress.
    PretalxDgwk,
    Other(String),
}

/// Returned by the strict [`FromStr`] impl for names outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown server backend type {0:?}")]
pub struct UnknownBackendType(pub String);

impl BackendType {
    /// Configuration name of this backend.
    pub fn name(&self) -> &str {
        match self {
            BackendType::Pentabarf => "PENTABARF",
            BackendType::Frab => "FRAB",
            BackendType::Pretalx => "PRETALX",
            BackendType::PretalxDgwk => "PRETALXDGWK",
            BackendType::Other(name) => name,
        }
    }

    /// Lenient parse: unknown names become [`BackendType::Other`].
    pub fn from_name(name: &str) -> Self {
        name.parse()
            .unwrap_or_else(|UnknownBackendType(name)| BackendType::Other(name))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BackendType::Other(_))
    }
}

impl FromStr for BackendType {
    type Err = UnknownBackendType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENTABARF" => Ok(BackendType::Pentabarf),
            "FRAB" => Ok(BackendType::Frab),
            "PRETALX" => Ok(BackendType::Pretalx),
            "PRETALXDGWK" => Ok(BackendType::PretalxDgwk),
            other => Err(UnknownBackendType(other.to_string())),
        }
    }
}

impl From<String> for BackendType {
    fn from(name: String) -> Self {
        BackendType::from_name(&name)
    }
}

impl From<BackendType> for String {
    fn from(backend: BackendType) -> Self {
        backend.name().to_string()
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("PENTABARF".parse(), Ok(BackendType::Pentabarf));
        assert_eq!("FRAB".parse(), Ok(BackendType::Frab));
        assert_eq!("PRETALX".parse(), Ok(BackendType::Pretalx));
        assert_eq!("PRETALXDGWK".parse(), Ok(BackendType::PretalxDgwk));
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        let err = "pentabarf".parse::<BackendType>().unwrap_err();
        assert_eq!(err, UnknownBackendType("pentabarf".to_string()));
        assert_eq!(err.to_string(), "unknown server backend type \"pentabarf\"");
    }

    #[test]
    fn lenient_parse_keeps_unknown_name() {
        let backend = BackendType::from_name("SOMETHING");
        assert_eq!(backend, BackendType::Other("SOMETHING".to_string()));
        assert!(!backend.is_known());
        assert_eq!(backend.to_string(), "SOMETHING");
        assert_eq!(String::from(backend), "SOMETHING");
    }

    #[test]
    fn from_owned_string() {
        assert_eq!(BackendType::from("PRETALXDGWK".to_string()), BackendType::PretalxDgwk);
    }

    #[test]
    fn name_matches_parse() {
        for backend in [
            BackendType::Pentabarf,
            BackendType::Frab,
            BackendType::Pretalx,
            BackendType::PretalxDgwk,
        ] {
            assert_eq!(BackendType::from_name(backend.name()), backend);
        }
    }
}
