//! Theme - Brand Colors and Type Scale

pub mod colors;
pub mod typography;
