//! Data models for the hover preview.
//!
//! Contains plain types for:
//! - [`PreviewRecord`] - Catalog entry (image, title, tags, description)
//! - [`PreviewPanel`], [`PanelId`], [`Part`] - Constructed panels and their sub-elements
//! - [`VariantTag`], [`RestTransform`] - Variant presets and hidden poses
//! - [`Backdrop`], [`MediaKind`] - Full-screen background content

mod backdrop;
mod preview;
mod variant;

pub use backdrop::{Backdrop, MediaKind};
pub use preview::{PanelId, Part, PreviewPanel, PreviewRecord};
pub use variant::{RestTransform, VariantTag};
