//! Service layer for grid logic.
//!
//! Pure coordinate helpers, the placement translator, the structural
//! mutator and document file I/O. The [`Grid`](crate::grid::Grid) facade
//! coordinates them; none of them own grid state.

pub mod constraint_translator;
pub mod coordinate_mapper;
pub mod document;
pub mod grid_mutator;

// Re-export commonly used types and functions
pub use document::DocumentService;
pub use grid_mutator::GridMutator;
