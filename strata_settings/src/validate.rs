//! Presence validation for caller-declared required keys.

use serde_yaml::{Mapping, Value};

use crate::Settings;
use crate::error::MissingSettings;

/// Keys a caller requires to be present and non-null after resolution.
///
/// The two lists are independent: public keys are checked against the public
/// tree and secret keys against the secret tree. Required keys are supplied
/// by the caller; they are not part of the settings document itself.
#[derive(Debug, Clone, Default)]
pub struct RequiredKeys {
    /// Keys required in the public namespace.
    pub public: Vec<String>,
    /// Keys required in the secret namespace.
    pub secret: Vec<String>,
}

impl RequiredKeys {
    /// Build a required-key set from anything yielding string-likes.
    pub fn new<P, S>(public: P, secret: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            public: public.into_iter().map(Into::into).collect(),
            secret: secret.into_iter().map(Into::into).collect(),
        }
    }
}

impl Settings {
    /// Check that every required key is present and non-null.
    ///
    /// A key mapped to null counts as missing, exactly like an absent key.
    /// Violations from both namespaces are collected into one
    /// [`MissingSettings`] so a single run surfaces the full remediation
    /// list rather than failing on the first hit.
    ///
    /// # Errors
    ///
    /// Returns [`MissingSettings`] naming every absent or null key.
    pub fn validate_required(&self, required: &RequiredKeys) -> Result<(), MissingSettings> {
        let missing = MissingSettings {
            public: missing_keys(&self.public, &required.public),
            secret: missing_keys(&self.secret, &required.secret),
        };
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

/// Required keys that are absent from `mapping` or mapped to null.
fn missing_keys(mapping: &Mapping, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|key| matches!(mapping.get(key.as_str()), None | Some(Value::Null)))
        .cloned()
        .collect()
}
