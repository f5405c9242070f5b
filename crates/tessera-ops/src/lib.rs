//! Restoration operators for Tessera grids.
//!
//! Provides the [`Restoration`] trait (a modular, stateless operator
//! applied in sequence to a square grid), the reference operations, and
//! the [`Pipeline`] that validates a stage list once and then runs it.
//!
//! # Restoration order (the demo walkthrough)
//!
//! 1. [`Transpose`] — mirror across the main diagonal
//! 2. [`RotateClockwise`] — quarter turn
//! 3. [`ZeroPropagation`] — blank every row/column holding a zero
//! 4. [`RowRotate`] — cyclic shift of one row by k steps
//!
//! [`spiral_order`] is the read-out companion: it extracts the cells in
//! clockwise inward spiral order without mutating the grid.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod pipeline;
pub mod restoration;
pub mod rotate;
pub mod row_rotate;
pub mod spiral;
pub mod transpose;
pub mod zero_propagation;

pub use pipeline::{Pipeline, PipelineError, RunReport};
pub use restoration::{Restoration, RestorationError};
pub use rotate::RotateClockwise;
pub use row_rotate::RowRotate;
pub use spiral::spiral_order;
pub use transpose::Transpose;
pub use zero_propagation::ZeroPropagation;
