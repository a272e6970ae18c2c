//! Domain to recipient email lookup

use std::collections::HashMap;

/// Read-only mapping from submitting domain to recipient email address,
/// with an optional default fallback.
///
/// Built once at startup and passed into the feedback service, so tests can
/// inject fixtures instead of touching the process environment.
#[derive(Clone, Debug, Default)]
pub struct RecipientDirectory {
    entries: HashMap<String, String>,
    default: Option<String>,
}

impl RecipientDirectory {
    /// Creates a directory from explicit entries
    pub fn new(entries: HashMap<String, String>, default: Option<String>) -> Self {
        Self { entries, default }
    }

    /// Snapshots the process environment as the lookup table.
    ///
    /// Entries are keyed by the literal domain string, e.g.
    /// `example.gov.yk.ca=feedback@example.gov.yk.ca`.
    pub fn from_env(default: Option<String>) -> Self {
        Self {
            entries: std::env::vars().collect(),
            default,
        }
    }

    /// Resolves the recipient for a normalized domain.
    ///
    /// Returns the mapped entry when both the domain and its entry are
    /// non-empty, otherwise the default, otherwise `None`.
    pub fn resolve(&self, site: &str) -> Option<&str> {
        if !site.is_empty() {
            if let Some(email) = self.entries.get(site).filter(|email| !email.is_empty()) {
                return Some(email);
            }
        }

        self.default.as_deref().filter(|email| !email.is_empty())
    }
}
