//! Tessera: a square-grid restoration toolkit.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Tessera sub-crates. For most users, adding `tessera` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let mut grid = Grid::from_rows(&[
//!     vec![1, 2],
//!     vec![3, 0],
//! ]).unwrap();
//!
//! let pipeline = Pipeline::new(
//!     vec![Box::new(Transpose), Box::new(ZeroPropagation)],
//!     grid.side(),
//! ).unwrap();
//!
//! let report = pipeline.run(&mut grid).unwrap();
//! assert_eq!(report.len(), 2);
//!
//! // The zero moved to (1, 1) under the transpose, so its row and
//! // column were blanked.
//! assert_eq!(spiral_order(&grid), vec![1, 0, 0, 0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | The `Grid` container and `GridError` |
//! | [`ops`] | `tessera-ops` | The `Restoration` trait, operators, pipeline, spiral read-out |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core grid container and error taxonomy (`tessera-core`).
pub use tessera_core as types;

/// Restoration operators and the pipeline (`tessera-ops`).
///
/// The [`ops::Restoration`] trait is the extension point for
/// user-defined grid operators.
pub use tessera_ops as ops;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
///
/// This imports the grid container, the restoration trait and errors,
/// the reference operators, the pipeline, and the spiral read-out.
pub mod prelude {
    // Core container
    pub use tessera_core::{Grid, GridError};

    // Restoration trait and errors
    pub use tessera_ops::{Restoration, RestorationError};

    // Pipeline
    pub use tessera_ops::{Pipeline, PipelineError, RunReport};

    // Reference operators and the read-out
    pub use tessera_ops::{
        spiral_order, RotateClockwise, RowRotate, Transpose, ZeroPropagation,
    };
}
