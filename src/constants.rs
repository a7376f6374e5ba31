//! UI Constants
//!
//! Centralized UI constants for consistent layout across the gallery.

/// Number of stars drawn in a testimonial rating row
pub const RATING_STAR_COUNT: usize = 5;

/// Rating star glyph size in pixels
pub const RATING_STAR_SIZE: f32 = 20.0;

/// Testimonial author avatar size in pixels
pub const AVATAR_SIZE: f32 = 56.0;

/// Decorative quotation glyph size in pixels
pub const QUOTE_GLYPH_SIZE: f32 = 48.0;

/// Gallery content column maximum width
pub const CONTENT_MAX_WIDTH: f32 = 760.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1000.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

/// Quiet period before changed window bounds are written to disk
pub const BOUNDS_SAVE_DELAY_MS: u64 = 500;
