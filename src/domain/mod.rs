//! Domain - Pure Form State and Validation
//!
//! These types don't depend on GPUI and hold the logic behind the auth views.

pub mod login;
pub mod password;
pub mod signup;
