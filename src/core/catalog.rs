//! Preview catalog loading.
//!
//! The catalog is a TOML document with an ordered `variants` list and an
//! ordered `[[previews]]` array. Entry `i` of both lists describes the panel
//! `preview-<i+1>`.

use serde::Deserialize;

use super::error::CatalogError;
use crate::models::{PanelId, PreviewRecord, VariantTag};

#[derive(Deserialize)]
struct CatalogFile {
    variants: Vec<VariantTag>,
    #[serde(default)]
    previews: Vec<PreviewRecord>,
}

/// Validated preview catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    entries: Vec<(PreviewRecord, VariantTag)>,
    default_panel: PanelId,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| CatalogError::Parse(e.message().to_string()))?;
        Self::new(file.previews, file.variants)
    }

    /// Pair records with their variants positionally.
    pub fn new(
        previews: Vec<PreviewRecord>,
        variants: Vec<VariantTag>,
    ) -> Result<Self, CatalogError> {
        if previews.is_empty() {
            return Err(CatalogError::Empty);
        }
        if previews.len() != variants.len() {
            return Err(CatalogError::VariantCountMismatch {
                previews: previews.len(),
                variants: variants.len(),
            });
        }

        let default_panel = variants
            .iter()
            .position(VariantTag::is_default)
            .map(PanelId)
            .ok_or(CatalogError::MissingDefault)?;

        if variants.iter().filter(|v| v.is_default()).count() > 1 {
            log::warn!(
                "catalog has several `default` panels, using {}",
                default_panel.class_name()
            );
        }

        Ok(Self {
            entries: previews.into_iter().zip(variants).collect(),
            default_panel,
        })
    }

    /// The catalog bundled with the application.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml(crate::config::PREVIEW_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First panel tagged `default`.
    pub fn default_panel(&self) -> PanelId {
        self.default_panel
    }

    pub fn get(&self, id: PanelId) -> Option<&(PreviewRecord, VariantTag)> {
        self.entries.get(id.0)
    }

    /// Records in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (PanelId, &PreviewRecord, &VariantTag)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (record, variant))| (PanelId(i), record, variant))
    }
}
