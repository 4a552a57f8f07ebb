//! In-memory representation of one settings source.

use serde_yaml::{Mapping, Value};

/// One settings document pair: a public tree and a secret tree.
///
/// Both trees are always mapping-typed at the root, even when empty. A
/// source with no secrets document yields an empty `secret` mapping; absent
/// means empty, never missing. Two `Settings` are equal iff both trees are
/// deep-equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub(crate) public: Mapping,
    pub(crate) secret: Mapping,
}

impl Settings {
    /// Build a settings document from already-parsed trees.
    #[must_use]
    pub const fn new(public: Mapping, secret: Mapping) -> Self {
        Self { public, secret }
    }

    /// The public (non-sensitive) settings tree.
    #[must_use]
    pub const fn public(&self) -> &Mapping {
        &self.public
    }

    /// The secret settings tree. Never log its contents.
    #[must_use]
    pub const fn secret(&self) -> &Mapping {
        &self.secret
    }

    /// True when both trees are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.secret.is_empty()
    }
}

/// The type name of a YAML value, as YAML spells them.
pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
