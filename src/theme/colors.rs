//! Colors - Cosmic Theme Colors
//!
//! Brand colors that sit on top of the gpui-component theme. Semantic colors
//! (background, foreground, danger, ...) come from `cx.theme()` so they follow
//! light/dark mode; these are the fixed gradient and glow tones.

use gpui::{Background, Hsla, Rgba, linear_color_stop, linear_gradient, rgb, rgba};

/// Cosmic color palette - All colors are accessed via associated functions
pub struct CosmicColors;

impl CosmicColors {
    // Gradient stops
    /// Deep violet - gradient start
    pub fn violet() -> Rgba { rgb(0x7c3aed) }
    /// Electric blue - gradient middle
    pub fn electric_blue() -> Rgba { rgb(0x3b82f6) }
    /// Cyan - gradient end
    pub fn cyan() -> Rgba { rgb(0x22d3ee) }
    /// Magenta - hero accent
    pub fn magenta() -> Rgba { rgb(0xd946ef) }

    // Glow and decoration
    /// Particle core color
    pub fn particle() -> Rgba { rgb(0xa5b4fc) }
    /// Neural grid line color
    pub fn grid_line() -> Rgba { rgba(0x6366f133) }
    /// Neural grid node color
    pub fn grid_node() -> Rgba { rgb(0x818cf8) }
    /// Card surface tint (translucent)
    pub fn card_surface() -> Rgba { rgba(0x1e1b4b66) }
    /// Card border tint (translucent)
    pub fn card_border() -> Rgba { rgba(0x818cf84d) }

    /// Text on gradient surfaces
    pub fn on_gradient() -> Rgba { rgb(0xffffff) }
}

impl CosmicColors {
    /// Violet to cyan, used by the primary buttons and headline accents
    pub fn cosmic_gradient() -> Background {
        linear_gradient(
            90.,
            linear_color_stop(Self::violet(), 0.),
            linear_color_stop(Self::cyan(), 1.),
        )
    }

    /// Magenta to blue, used by the hero call-to-action
    pub fn hero_gradient() -> Background {
        linear_gradient(
            135.,
            linear_color_stop(Self::magenta(), 0.),
            linear_color_stop(Self::electric_blue(), 1.),
        )
    }

    /// Translucent blue to violet, used by secondary buttons
    pub fn neural_gradient() -> Background {
        linear_gradient(
            90.,
            linear_color_stop(Hsla::from(Self::electric_blue()).opacity(0.25), 0.),
            linear_color_stop(Hsla::from(Self::violet()).opacity(0.25), 1.),
        )
    }

    pub fn particle_hsla() -> Hsla {
        Hsla::from(Self::particle())
    }
}
