//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on the global store or do I/O.

pub mod cosmic;
pub mod primitives;
