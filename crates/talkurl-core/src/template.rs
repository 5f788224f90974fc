//! URL template with a single `%s` placeholder.

const PLACEHOLDER: &str = "%s";

/// Format string such as `https://example.org/talk/%s`.
///
/// `%%` is a literal percent sign. Only the first `%s` is substituted;
/// the identifier is inserted as-is, without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of `%s` placeholders (escaped `%%` not counted).
    pub fn placeholder_count(&self) -> usize {
        let mut count = 0;
        let mut chars = self.0.chars();
        while let Some(c) = chars.next() {
            if c == '%' && chars.next() == Some('s') {
                count += 1;
            }
        }
        count
    }

    /// Substitutes `identifier` for the placeholder.
    pub fn compose(&self, identifier: &str) -> String {
        let mut out = String::with_capacity(self.0.len() + identifier.len());
        let mut substituted = false;
        let mut rest = self.0.as_str();

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            if tail.starts_with("%%") {
                out.push('%');
                rest = &tail[2..];
            } else if tail.starts_with(PLACEHOLDER) && !substituted {
                out.push_str(identifier);
                substituted = true;
                rest = &tail[PLACEHOLDER.len()..];
            } else {
                out.push('%');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}

impl From<&str> for UrlTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for UrlTemplate {
    fn from(template: String) -> Self {
        Self(template)
    }
}
