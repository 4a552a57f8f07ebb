//! Hierarchical override merging across ordered settings layers.

use serde_yaml::{Mapping, Value};

use crate::Settings;

impl Settings {
    /// Merge `overrides` into `self`, namespace by namespace.
    ///
    /// This is deliberately not a flat map update: keys mapping to mappings
    /// on both sides merge recursively, so sibling keys the override does not
    /// mention survive at every depth. `overrides` is never mutated, and the
    /// result shares no structure with it.
    pub fn merge(&mut self, overrides: &Self) {
        update_subkeys(&mut self.public, &overrides.public);
        update_subkeys(&mut self.secret, &overrides.secret);
    }

    /// Left-fold an ordered sequence of layers, lowest priority first.
    ///
    /// The output depends only on the left-to-right order of the input;
    /// later layers override earlier ones. Folding a single layer returns an
    /// equal document.
    #[must_use]
    pub fn merged<'a, I>(layers: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut folded = Self::default();
        for layer in layers {
            folded.merge(layer);
        }
        folded
    }
}

/// Apply `overrides` onto `destination` with hierarchical semantics.
///
/// New keys pass through, shared submaps recurse, and the base case replaces
/// the destination value with a deep copy of the override value. The base
/// case includes a type mismatch between a mapping and anything else: the
/// override wins with a full replacement rather than a merge error. That
/// rule mirrors the long-observed behaviour of the settings tooling and is
/// pinned by tests; see DESIGN.md before changing it.
pub fn update_subkeys(destination: &mut Mapping, overrides: &Mapping) {
    for (key, incoming) in overrides {
        match (destination.get_mut(key), incoming) {
            (Some(Value::Mapping(existing)), Value::Mapping(submap)) => {
                update_subkeys(existing, submap);
            }
            (Some(existing), _) => *existing = incoming.clone(),
            (None, _) => {
                destination.insert(key.clone(), incoming.clone());
            }
        }
    }
}
