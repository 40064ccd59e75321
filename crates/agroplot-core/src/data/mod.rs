//! Data models for design projects
//!
//! This module provides:
//! - Catalog items referenced by placed elements (plants, terrain, structures)
//! - Planting distance parsing
//! - Canvas elements and their geometry
//! - The project document that is the unit of save/load
//!
//! Field names are camelCase on the wire so stored projects stay compatible
//! with the browser canvas that produces them.

pub mod catalog;
pub mod spacing;

pub use catalog::{Plant, Structure, StructureSize, Terrain};
pub use spacing::{Spacing, SpacingUnit};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema version stamped on newly created projects
pub const PROJECT_SCHEMA_VERSION: &str = "1.0";

/// Display name used when a project has none
pub const UNTITLED_PROJECT_NAME: &str = "Untitled project";

/// Canvas dimensions in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Surface in square meters
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 30.0,
        }
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}m", self.width, self.height)
    }
}

/// A vertex of a freehand path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind of element placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Plant,
    Terrain,
    Structure,
    Rectangle,
    Circle,
}

impl ElementType {
    /// Get all element types
    pub fn all() -> &'static [ElementType] {
        &[
            ElementType::Plant,
            ElementType::Terrain,
            ElementType::Structure,
            ElementType::Rectangle,
            ElementType::Circle,
        ]
    }

    /// Freeform shapes (not backed by a catalog item)
    pub fn is_shape(&self) -> bool {
        matches!(self, ElementType::Rectangle | ElementType::Circle)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plant => write!(f, "plant"),
            Self::Terrain => write!(f, "terrain"),
            Self::Structure => write!(f, "structure"),
            Self::Rectangle => write!(f, "rectangle"),
            Self::Circle => write!(f, "circle"),
        }
    }
}

/// A single item placed on the canvas
///
/// Coordinates are canvas units; `real_world_width`/`real_world_height` carry
/// the size in meters for terrain patches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingElement {
    pub id: u64,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant: Option<Plant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Terrain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Structure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_world_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_world_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brush_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_points: Option<Vec<PathPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

impl DrawingElement {
    /// Create a bare element of the given type at `(x, y)`
    pub fn new(id: u64, element_type: ElementType, x: f64, y: f64) -> Self {
        Self {
            id,
            element_type,
            x,
            y,
            width: None,
            height: None,
            radius: None,
            rotation: None,
            plant: None,
            terrain: None,
            structure: None,
            real_world_width: None,
            real_world_height: None,
            brush_type: None,
            texture: None,
            path_points: None,
            selected: None,
        }
    }

    /// Create a plant element
    pub fn plant(id: u64, x: f64, y: f64, plant: Plant) -> Self {
        Self::new(id, ElementType::Plant, x, y).with_plant(plant)
    }

    /// Create a terrain element covering `width` x `height` meters
    pub fn terrain(id: u64, x: f64, y: f64, terrain: Terrain, width: f64, height: f64) -> Self {
        let mut element = Self::new(id, ElementType::Terrain, x, y).with_size(width, height);
        element.terrain = Some(terrain);
        element.real_world_width = Some(width);
        element.real_world_height = Some(height);
        element
    }

    /// Create a structure element sized from the structure definition
    pub fn structure(id: u64, x: f64, y: f64, structure: Structure) -> Self {
        let size = structure.size;
        let mut element =
            Self::new(id, ElementType::Structure, x, y).with_size(size.width, size.height);
        element.structure = Some(structure);
        element
    }

    pub fn with_plant(mut self, plant: Plant) -> Self {
        self.plant = Some(plant);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_path(mut self, points: Vec<PathPoint>) -> Self {
        self.path_points = Some(points);
        self
    }

    /// Whether the UI currently has this element selected
    pub fn is_selected(&self) -> bool {
        self.selected.unwrap_or(false)
    }
}

/// Descriptive information attached to a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Project metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    /// Number of elements; recomputed by the store on every save
    pub elements_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_info: Option<ProjectInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Complete design state; the unit of save/load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub version: String,
    /// Creation time, epoch milliseconds
    pub timestamp: i64,
    pub last_modified: DateTime<Utc>,
    pub canvas_size: CanvasSize,
    pub elements: Vec<DrawingElement>,
    pub selected_tool: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_plant: Option<Plant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_terrain: Option<Terrain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_structure: Option<Structure>,
    pub metadata: ProjectMetadata,
}

impl ProjectData {
    /// Create an empty project stamped with the current time
    pub fn new(canvas_size: CanvasSize) -> Self {
        let now = Utc::now();
        Self {
            version: PROJECT_SCHEMA_VERSION.to_string(),
            timestamp: now.timestamp_millis(),
            last_modified: now,
            canvas_size,
            elements: Vec::new(),
            selected_tool: "select".to_string(),
            selected_plant: None,
            selected_terrain: None,
            selected_structure: None,
            metadata: ProjectMetadata::default(),
        }
    }

    /// Project name from metadata, if one was given
    pub fn name(&self) -> Option<&str> {
        self.metadata
            .project_info
            .as_ref()
            .and_then(|info| info.name.as_deref())
    }

    /// Project name, falling back to [`UNTITLED_PROJECT_NAME`]
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(UNTITLED_PROJECT_NAME)
    }

    /// Set the project name, creating the info block if needed
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.metadata
            .project_info
            .get_or_insert_with(ProjectInfo::default)
            .name = Some(name.into());
    }
}

impl Default for ProjectData {
    fn default() -> Self {
        Self::new(CanvasSize::default())
    }
}
