//! Panel variants and their rest poses.

use serde::Deserialize;

use crate::config::{REST_OFFSET_PX, clip};

use super::Part;

/// Layout/animation preset applied to a panel.
///
/// Parsed from the class name in the catalog's `variants` list. Class names
/// that are not one of the known presets are kept as [`VariantTag::Other`]
/// so the panel still renders; it simply has no rest transforms.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum VariantTag {
    /// The panel shown while nothing is hovered.
    Default,
    Variant1,
    Variant2,
    Variant3,
    /// Unrecognized class name.
    Other(String),
}

impl VariantTag {
    /// Parse a class name.
    pub fn from_class(class: &str) -> Self {
        match class {
            "default" => Self::Default,
            "variant-1" => Self::Variant1,
            "variant-2" => Self::Variant2,
            "variant-3" => Self::Variant3,
            other => Self::Other(other.to_string()),
        }
    }

    /// Class name written to the panel element.
    pub fn class_name(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Variant1 => "variant-1",
            Self::Variant2 => "variant-2",
            Self::Variant3 => "variant-3",
            Self::Other(class) => class,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Clip-path of the panel image while the panel is inactive.
    pub fn rest_clip_path(&self) -> &'static str {
        match self {
            Self::Variant1 => clip::VARIANT_1_REST,
            Self::Variant2 => clip::VARIANT_2_REST,
            Self::Variant3 => clip::VARIANT_3_REST,
            Self::Default | Self::Other(_) => clip::FALLBACK_REST,
        }
    }

    /// Rest offsets for the title, tags and opacity sub-elements.
    ///
    /// Returns an empty slice for variants without a transform table.
    pub fn rest_transforms(&self) -> &'static [RestTransform] {
        match self {
            Self::Variant1 => &VARIANT_1_TRANSFORMS,
            Self::Variant2 => &VARIANT_2_TRANSFORMS,
            Self::Variant3 => &VARIANT_3_TRANSFORMS,
            Self::Default | Self::Other(_) => &[],
        }
    }
}

impl From<String> for VariantTag {
    fn from(class: String) -> Self {
        Self::from_class(&class)
    }
}

/// Hidden pose of one panel sub-element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestTransform {
    pub part: Part,
    /// Horizontal offset in pixels.
    pub x: f64,
    pub opacity: f64,
}

impl RestTransform {
    const fn hidden(part: Part, x: f64) -> Self {
        Self {
            part,
            x,
            opacity: 0.0,
        }
    }
}

const VARIANT_1_TRANSFORMS: [RestTransform; 3] = [
    RestTransform::hidden(Part::Title, REST_OFFSET_PX),
    RestTransform::hidden(Part::Tags, -REST_OFFSET_PX),
    RestTransform::hidden(Part::Opacity, -REST_OFFSET_PX),
];

const VARIANT_2_TRANSFORMS: [RestTransform; 3] = [
    RestTransform::hidden(Part::Title, -REST_OFFSET_PX),
    RestTransform::hidden(Part::Tags, -REST_OFFSET_PX),
    RestTransform::hidden(Part::Opacity, REST_OFFSET_PX),
];

const VARIANT_3_TRANSFORMS: [RestTransform; 3] = [
    RestTransform::hidden(Part::Title, REST_OFFSET_PX),
    RestTransform::hidden(Part::Tags, REST_OFFSET_PX),
    RestTransform::hidden(Part::Opacity, REST_OFFSET_PX),
];
