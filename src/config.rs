//! Application configuration.
//!
//! Centralizes the constants used by the hover preview: asset paths,
//! idle backdrop text, tween timings and clip-path shapes. The preview
//! catalog is loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Preview catalog (records plus the ordered variant mapping).
pub const PREVIEW_CATALOG: &str = include_str!("../assets/data/previews.toml");

// =============================================================================
// Backdrop Assets
// =============================================================================

/// Backdrop asset configuration.
pub mod backdrop {
    /// Idle video shown when no item is hovered.
    pub const IDLE_VIDEO: &str = "./assets/bg.mp4";
    /// Title shown over the idle video.
    pub const IDLE_TITLE: &str = "Welcome to Our Lab";
    /// Tags shown over the idle video.
    pub const IDLE_TAGS: &str = "Explore | Discover | Enjoy";

    /// Background image for the item at `index` (0-based).
    pub fn item_image(index: usize) -> String {
        format!("./assets/bg-{}.jpg", index + 1)
    }
}

// =============================================================================
// Interaction Timing
// =============================================================================

/// Delay between pointer-leave and the idle revert check (milliseconds).
pub const REVERT_DEBOUNCE_MS: u32 = 10;

/// Tween durations and delays (seconds).
pub mod timing {
    /// Backdrop media fade-in.
    pub const BACKDROP_MEDIA_FADE: f64 = 1.0;
    /// Backdrop text fade-in.
    pub const BACKDROP_TEXT_FADE: f64 = 1.0;
    /// Backdrop text starts after the media.
    pub const BACKDROP_TEXT_DELAY: f64 = 0.5;

    /// Outgoing panel image wipe back to rest.
    pub const OUTGOING_CLIP: f64 = 0.75;
    /// Outgoing panel fade-out.
    pub const OUTGOING_FADE: f64 = 0.3;
    /// Outgoing panel fade-out delay.
    pub const OUTGOING_FADE_DELAY: f64 = 0.2;

    /// Incoming panel fade-in.
    pub const INCOMING_FADE: f64 = 0.1;
    /// Incoming panel text slide-in.
    pub const INCOMING_TEXT: f64 = 0.5;
    /// Incoming panel image reveal.
    pub const INCOMING_CLIP: f64 = 1.0;

    /// Panel cross-fade when reverting to idle.
    pub const REVERT_FADE: f64 = 0.1;
    /// Default panel image wipe when reverting to idle.
    pub const REVERT_CLIP: f64 = 1.0;
}

// =============================================================================
// Clip-path Shapes
// =============================================================================

/// Polygon clip-paths for panel images.
pub mod clip {
    /// Fully revealed image.
    pub const REVEAL: &str = "polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)";
    /// Rest shape for panels without a recognized variant.
    pub const FALLBACK_REST: &str = "polygon(100% 0%, 0% 0%, 0% 100%, 100% 100%)";
    /// Rest shape for `variant-1` (collapsed to the bottom edge).
    pub const VARIANT_1_REST: &str = "polygon(0% 100%, 100% 100%, 100% 100%, 0% 100%)";
    /// Rest shape for `variant-2` (collapsed to the right edge).
    pub const VARIANT_2_REST: &str = "polygon(100% 0%, 100% 0%, 100% 100%, 100% 100%)";
    /// Rest shape for `variant-3` (collapsed to the left edge).
    pub const VARIANT_3_REST: &str = "polygon(0% 0%, 0% 0%, 0% 100%, 0% 100%)";
}

/// Horizontal offset (px) used by the rest transforms.
pub const REST_OFFSET_PX: f64 = 75.0;

// =============================================================================
// DOM Class Names
// =============================================================================

/// Class names the controller addresses panels and backdrop nodes by.
pub mod classes {
    pub const PANEL: &str = "preview";
    pub const IMAGE: &str = "preview-img";
    pub const TITLE: &str = "preview-title";
    pub const TAGS: &str = "preview-tags";
    pub const OPACITY: &str = "preview-opacity";
    pub const DESCRIPTION: &str = "preview-description";
    pub const BACKDROP_TEXT: &str = "preview-text";
}

/// Media query used to detect reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Warn
};
