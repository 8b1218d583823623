//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Action → State Method → notify → UI Refresh
//!                    └──→ background save (preferences only)
//! ```

mod app;
mod i18n;
mod route;

pub use app::*;
pub use i18n::*;
pub use route::*;
