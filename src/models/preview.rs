//! Preview records and the panels built from them.

use serde::Deserialize;

use crate::config::classes;

use super::VariantTag;

/// One entry of the preview catalog.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PreviewRecord {
    /// Panel image URL.
    pub image: String,
    pub title: String,
    pub tags: String,
    pub description: String,
}

/// Position of a panel in the catalog (0-based).
///
/// The DOM class uses the 1-based form, see [`PanelId::class_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub usize);

impl PanelId {
    /// 1-based panel number.
    pub fn number(self) -> usize {
        self.0 + 1
    }

    /// Class name unique to this panel (`preview-<n>`).
    pub fn class_name(self) -> String {
        format!("{}-{}", classes::PANEL, self.number())
    }
}

/// Sub-element of a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Image,
    Title,
    Tags,
    /// Optional fading layer; panels built from the catalog don't have one.
    Opacity,
    Description,
}

impl Part {
    /// Parts slid into place when a panel becomes active.
    pub const ANIMATED_TEXT: [Part; 3] = [Part::Title, Part::Tags, Part::Opacity];

    pub fn class_name(self) -> &'static str {
        match self {
            Part::Image => classes::IMAGE,
            Part::Title => classes::TITLE,
            Part::Tags => classes::TAGS,
            Part::Opacity => classes::OPACITY,
            Part::Description => classes::DESCRIPTION,
        }
    }
}

/// Runtime state of a constructed preview panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewPanel {
    pub id: PanelId,
    pub variant: VariantTag,
    /// Last requested opacity target.
    pub visible: bool,
    /// Last requested clip-path of the image, if any was issued.
    pub clip_path: Option<String>,
}

impl PreviewPanel {
    pub fn new(id: PanelId, variant: VariantTag) -> Self {
        Self {
            id,
            visible: variant.is_default(),
            variant,
            clip_path: None,
        }
    }

    /// Full class list written to the panel element.
    pub fn class_list(&self) -> String {
        format!(
            "{} {} {}",
            classes::PANEL,
            self.variant.class_name(),
            self.id.class_name()
        )
    }
}
