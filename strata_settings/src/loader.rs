//! Parsing of raw multi-document settings text into [`Settings`].

use std::str::FromStr;

use camino::Utf8Path;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::Settings;
use crate::document::value_kind;
use crate::error::{DocumentSlot, MalformedSettingFile, NonMappingDocument, SettingsError};

impl Settings {
    /// Parse the text of a settings source.
    ///
    /// The first YAML document holds public settings and the optional second
    /// document holds secrets. A document that parses to null normalizes to
    /// an empty mapping, as does an absent document. Parsing performs no
    /// filesystem access.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedSettingFile`] when the text is not valid YAML,
    /// splits into more than two documents, or a document's root is not a
    /// mapping.
    pub fn parse(text: &str) -> Result<Self, MalformedSettingFile> {
        let mut documents = Vec::new();
        for deserializer in serde_yaml::Deserializer::from_str(text) {
            documents.push(Value::deserialize(deserializer)?);
        }
        if documents.len() > 2 {
            return Err(MalformedSettingFile::TooManyDocuments {
                count: documents.len(),
            });
        }

        let mut slots = documents.into_iter();
        let first = slots.next();
        let second = slots.next();

        // Offenders from both slots are collected into a single error so the
        // operator sees the complete picture in one pass.
        let mut offending = Vec::new();
        let public = coerce_mapping(DocumentSlot::Public, first, &mut offending);
        let secret = coerce_mapping(DocumentSlot::Secret, second, &mut offending);
        if !offending.is_empty() {
            return Err(MalformedSettingFile::NonMappingDocuments { offending });
        }

        Ok(Self::new(public, secret))
    }

    /// Read and parse a settings file, annotating failures with its path.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] when the file cannot be read and a
    /// path-annotated [`SettingsError::File`] when its contents are
    /// malformed.
    pub fn from_path(path: &Utf8Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::io(path.to_path_buf(), source))?;
        Self::parse(&raw).map_err(|source| SettingsError::in_file(path.to_path_buf(), source.into()))
    }
}

impl FromStr for Settings {
    type Err = MalformedSettingFile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Normalize one parsed document: absent or null means empty, a mapping
/// passes through, anything else is recorded as an offender.
fn coerce_mapping(
    slot: DocumentSlot,
    document: Option<Value>,
    offending: &mut Vec<NonMappingDocument>,
) -> Mapping {
    match document {
        None | Some(Value::Null) => Mapping::new(),
        Some(Value::Mapping(mapping)) => mapping,
        Some(other) => {
            offending.push(NonMappingDocument {
                slot,
                found: value_kind(&other),
            });
            Mapping::new()
        }
    }
}
