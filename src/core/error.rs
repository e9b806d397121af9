//! Error types for the application.
//!
//! The hover interaction itself never fails; missing elements are skipped.
//! Errors only exist at the edges:
//!
//! - [`CatalogError`] - Loading and validating the preview catalog
//! - [`DomError`] - Building nodes through the browser DOM

use thiserror::Error;

/// Preview catalog loading errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Catalog document is not valid TOML or has the wrong shape.
    #[error("Failed to parse preview catalog: {0}")]
    Parse(String),
    /// Catalog has no previews.
    #[error("Preview catalog is empty")]
    Empty,
    /// `variants` and `previews` must pair up one to one.
    #[error("Catalog lists {previews} previews but {variants} variants")]
    VariantCountMismatch { previews: usize, variants: usize },
    /// No preview is tagged `default`.
    #[error("Preview catalog has no `default` variant")]
    MissingDefault,
}

/// Browser DOM errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    /// Browser window or document not available.
    #[error("Browser document not available")]
    NoDocument,
    /// `document.createElement` rejected the tag.
    #[error("Failed to create <{0}> element")]
    CreateFailed(&'static str),
    /// Appending or removing a child node failed.
    #[error("Failed to update DOM tree: {0}")]
    TreeUpdate(String),
}
