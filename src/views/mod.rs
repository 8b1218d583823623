//! View Components
//!
//! UI components for the Cloud Space application.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ Logo  Home Features About        ☀ 文 ⚙  Login  Sign Up     │  Navbar
//! ├─────────────────────────────────────────────────────────────┤
//! │ · ·  ·   ┼───┼───┼  ·                                        │
//! │    ·     │   Page (Landing / Features / About /            │
//! │  ·   ·   │         Login / SignUp)                          │  Content
//! │     ·    ┼───┼───┼     ·                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every page sits on a particle field and, on the marketing pages, a
//! neural grid.

mod about;
mod content;
mod features;
mod landing;
mod login;
mod navbar;
mod page;
mod signup;

pub use about::*;
pub use content::*;
pub use features::*;
pub use landing::*;
pub use login::*;
pub use navbar::*;
pub use signup::*;
