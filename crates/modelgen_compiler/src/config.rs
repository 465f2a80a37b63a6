//! Configuration for a compilation pass.

use crate::identifiers::Identifiers;

/// Options shared by every synthesizer in a compilation pass.
///
/// Built once and passed by reference; never mutated during a pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Wrap link fields in the field-selection helper so callers can choose
    /// which references are expanded.
    pub field_selection: bool,

    /// Names of external modules, types, and generics.
    pub identifiers: Identifiers,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            field_selection: true,
            identifiers: Identifiers::default(),
        }
    }
}

impl CodegenConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration without field selection: links always resolve to the full target shape.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            field_selection: false,
            ..Self::default()
        }
    }

    /// Builder method to toggle field selection.
    #[must_use]
    pub fn with_field_selection(mut self, enabled: bool) -> Self {
        self.field_selection = enabled;
        self
    }

    /// Builder method to replace the identifier table.
    #[must_use]
    pub fn with_identifiers(mut self, identifiers: Identifiers) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Builder method to change the augmented module.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.identifiers.module = module.into();
        self
    }
}

/// Options for rendering a declaration tree to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}
