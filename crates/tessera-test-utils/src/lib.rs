//! Test utilities for Tessera development.
//!
//! Provides the canonical fixture grids used across the workspace's
//! test suites plus a pair of utility restorations ([`ConstFill`],
//! [`FailingRestoration`]) for exercising pipeline behavior.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{sequential, unity_mural, victory_mural};

use tessera_core::Grid;
use tessera_ops::{Restoration, RestorationError};

/// Sets every cell to a constant value.
///
/// Useful for testing stage ordering: whatever ran before is erased,
/// so a snapshot holding the constant proves this stage ran after it.
pub struct ConstFill {
    name: String,
    value: i64,
}

impl ConstFill {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Restoration for ConstFill {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, grid: &mut Grid) -> Result<(), RestorationError> {
        grid.fill(self.value);
        Ok(())
    }
}

/// Fails deterministically on every application.
pub struct FailingRestoration {
    name: String,
}

impl FailingRestoration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Restoration for FailingRestoration {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, _grid: &mut Grid) -> Result<(), RestorationError> {
        Err(RestorationError::ExecutionFailed {
            reason: format!("'{}' always fails", self.name),
        })
    }
}
