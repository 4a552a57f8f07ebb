//! Aggregated report of required settings keys that failed validation.

use std::fmt;

/// Every required key found absent or null, across both namespaces.
///
/// Validation never stops at the first violation; the point is to give the
/// operator the complete remediation list in one pass. Key names are carried
/// as structured data so callers can assert on them rather than parsing the
/// formatted message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingSettings {
    /// Required public keys that are absent or null.
    pub public: Vec<String>,
    /// Required secret keys that are absent or null.
    pub secret: Vec<String>,
}

impl MissingSettings {
    /// True when no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.secret.is_empty()
    }
}

impl fmt::Display for MissingSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut messages = Vec::with_capacity(2);
        if !self.public.is_empty() {
            messages.push(format!("Missing settings: {}.", self.public.join(", ")));
        }
        if !self.secret.is_empty() {
            messages.push(format!(
                "Missing secret settings: {}.",
                self.secret.join(", ")
            ));
        }
        f.write_str(&messages.join(" "))
    }
}

impl std::error::Error for MissingSettings {}
