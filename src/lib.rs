//! Cloud Space Client Library
//!
//! This crate provides the application logic for Cloud Space, a desktop
//! front-end for a storage product: marketing pages on a decorated canvas,
//! a login form and a sign-up form with password strength feedback.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;
pub mod views;
