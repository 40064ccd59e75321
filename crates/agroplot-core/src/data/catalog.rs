//! Catalog items - plants, terrain patches and structures
//!
//! Catalog entries are immutable reference data owned outside this crate.
//! Elements embed a copy of the entry they were placed from.

use serde::{Deserialize, Serialize};

use super::spacing::Spacing;
use crate::error::SpacingError;

/// A plant species or variety
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    /// Planting distance, e.g. `"30cm"` or `"0.5x0.8m"`
    pub spacing: String,
    pub category: String,
    /// `#RRGGBB`
    pub color: String,
}

impl Plant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        spacing: impl Into<String>,
        category: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            spacing: spacing.into(),
            category: category.into(),
            color: color.into(),
        }
    }

    /// Parse the spacing string
    pub fn parsed_spacing(&self) -> Result<Spacing, SpacingError> {
        self.spacing.parse()
    }
}

/// A terrain patch painted with a brush (soil, mulch, water...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terrain {
    pub id: String,
    pub name: String,
    pub category: String,
    pub color: String,
    /// Stroke width, integer-valued in `[1, 100]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brush_thickness: Option<f64>,
}

impl Terrain {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            color: color.into(),
            brush_thickness: None,
        }
    }

    pub fn with_brush_thickness(mut self, thickness: f64) -> Self {
        self.brush_thickness = Some(thickness);
        self
    }
}

/// Footprint of a structure in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructureSize {
    pub width: f64,
    pub height: f64,
}

/// A built structure (shed, water tank, greenhouse...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub id: String,
    pub name: String,
    pub category: String,
    pub color: String,
    pub size: StructureSize,
}

impl Structure {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        color: impl Into<String>,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            color: color.into(),
            size: StructureSize { width, height },
        }
    }
}
