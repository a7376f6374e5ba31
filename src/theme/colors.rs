//! Colors - Content Block Palette

use gpui::{rgb, Rgba};

/// Block color palette - All colors are accessed via associated functions
pub struct BlockColors;

impl BlockColors {
    // Primary scale
    /// Primary tint for hover fills
    pub fn primary_50() -> Rgba { rgb(0xeff6ff) }
    /// Primary accent
    pub fn primary_600() -> Rgba { rgb(0x2563eb) }
    /// Primary accent, pressed/hover
    pub fn primary_700() -> Rgba { rgb(0x1d4ed8) }

    // Neutral scale
    pub fn gray_50() -> Rgba { rgb(0xf9fafb) }
    pub fn gray_100() -> Rgba { rgb(0xf3f4f6) }
    pub fn gray_200() -> Rgba { rgb(0xe5e7eb) }
    pub fn gray_300() -> Rgba { rgb(0xd1d5db) }
    pub fn gray_600() -> Rgba { rgb(0x4b5563) }
    pub fn gray_700() -> Rgba { rgb(0x374151) }
    pub fn gray_900() -> Rgba { rgb(0x111827) }

    /// Plain white
    pub fn white() -> Rgba { rgb(0xffffff) }

    // Rating colors
    /// Active rating star
    pub fn star_active() -> Rgba { rgb(0xfacc15) }
    /// Inactive rating star
    pub fn star_inactive() -> Rgba { Self::gray_300() }

    // Gallery chrome
    /// Window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Section heading text
    pub fn text_heading() -> Rgba { Self::gray_900() }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Error banner text
    pub fn danger() -> Rgba { rgb(0xef4444) }
}
