//! Core domain: shared resources gating player control.

use bevy::prelude::*;
use std::collections::HashSet;

/// Resource tracking whether jumping is externally disabled.
/// Jumping is frozen while any source is active.
#[derive(Resource, Debug, Default)]
pub struct JumpFreeze {
    pub sources: HashSet<String>,
}

impl JumpFreeze {
    pub fn is_frozen(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn freeze(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unfreeze(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}
