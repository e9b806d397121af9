//! UI components built with Leptos.
//!
//! - [`hover`] - Hover preview (item list, panels, backdrop) and its DOM bindings

pub mod hover;

pub use hover::HoverPreview;
