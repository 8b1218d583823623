//! Primitive Components
//!
//! Basic building blocks: buttons, fields and cards.

pub mod cosmic_button;
pub mod feature_card;
pub mod form_field;

pub use cosmic_button::{CosmicButton, CosmicSize, CosmicVariant};
pub use feature_card::{FeatureCard, card};
pub use form_field::FormField;
