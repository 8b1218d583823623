//! Typography - Font Sizes for Marketing Copy

/// Typography constants
pub struct Typography;

impl Typography {
    // Body copy
    pub const TEXT_LG: f32 = 18.0;

    // Headline sizes
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_3XL: f32 = 30.0;
    pub const TEXT_4XL: f32 = 36.0;
    pub const TEXT_5XL: f32 = 48.0;
    pub const TEXT_6XL: f32 = 60.0;

    // Line heights
    pub const LEADING_TIGHT: f32 = 1.1;
    pub const LEADING_RELAXED: f32 = 1.625;
}
