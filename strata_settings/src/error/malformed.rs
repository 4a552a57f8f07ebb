//! Structural violations detected while parsing a settings source.

use std::fmt;

use thiserror::Error;

/// Which of the two YAML documents in a settings source is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot {
    /// The first document, holding public settings.
    Public,
    /// The second document, holding secret settings.
    Secret,
}

impl fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Positional names, because the on-disk format is defined in terms of
        // document order rather than sensitivity.
        let name = match self {
            Self::Public => "first document",
            Self::Secret => "second document",
        };
        f.write_str(name)
    }
}

/// A document whose root is not a YAML mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonMappingDocument {
    /// Slot the offending document occupied.
    pub slot: DocumentSlot,
    /// YAML type name actually found at the document root.
    pub found: &'static str,
}

impl fmt::Display for NonMappingDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has type '{}'", self.slot, self.found)
    }
}

/// Structural violations in a settings source.
///
/// Always fatal: a malformed settings file means the operator's environment
/// is not trustworthy for any further action.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MalformedSettingFile {
    /// The text is not valid YAML.
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The source holds more than the public and secret documents.
    #[error("the settings file has more than two documents (found {count})")]
    TooManyDocuments {
        /// Number of documents encountered.
        count: usize,
    },

    /// One or more documents has a non-mapping root.
    #[error(
        "one or more YAML documents in the settings file is not a mapping: {}",
        describe_offending(.offending)
    )]
    NonMappingDocuments {
        /// Every offending document alongside the type found at its root.
        offending: Vec<NonMappingDocument>,
    },
}

fn describe_offending(offending: &[NonMappingDocument]) -> String {
    offending
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
