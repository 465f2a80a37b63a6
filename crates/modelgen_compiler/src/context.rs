//! Shared, read-only state of one compilation pass.

use modelgen_foundation::Model;

use crate::config::CodegenConfig;
use crate::identifiers::Identifiers;
use crate::naming::Naming;

/// Everything a synthesizer may consult: the full model set, the
/// configuration, and the identifier synthesizer.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Every model of the pass, in caller order.
    pub models: &'a [Model],
    /// Pass configuration.
    pub config: &'a CodegenConfig,
    /// Identifier synthesizer.
    pub naming: &'a dyn Naming,
}

impl<'a> Context<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(models: &'a [Model], config: &'a CodegenConfig, naming: &'a dyn Naming) -> Self {
        Self {
            models,
            config,
            naming,
        }
    }

    /// Shortcut to the identifier table.
    #[must_use]
    pub fn identifiers(&self) -> &'a Identifiers {
        &self.config.identifiers
    }
}
