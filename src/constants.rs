//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Maximum width of the centered page column
pub const PAGE_MAX_WIDTH: f32 = 1100.0;

/// Width of the sign-up / login card
pub const AUTH_CARD_WIDTH: f32 = 420.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Floating particle counts per view
pub const LANDING_PARTICLES: usize = 30;
pub const FEATURES_PARTICLES: usize = 25;
pub const ABOUT_PARTICLES: usize = 20;
pub const SIGNUP_PARTICLES: usize = 15;
pub const LOGIN_PARTICLES: usize = 15;
pub const LOGO_PARTICLES: usize = 3;

/// Neural grid line counts
pub const NEURAL_GRID_COLUMNS: usize = 16;
pub const NEURAL_GRID_ROWS: usize = 10;

/// Password rules
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_SUBMIT_SCORE: u8 = 3;

/// Preferences file name inside the config directory
pub const PREFERENCES_FILE: &str = "cloud-space.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "cloud-space.log";
