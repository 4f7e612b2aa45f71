//! Core page-cursor state shared by every folio front-end.

/// Clamped page-cursor state and navigation operations.
pub mod paginator;

pub use paginator::{Direction, Paginator, PaginatorError};
