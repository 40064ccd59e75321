//! Portable export/import of designs.
//!
//! The export document is the only format meant to cross a trust boundary.
//! It mirrors the project model, drops UI-only state such as selection, and
//! adds category counts and coordinate-system metadata so other tools can
//! read it without knowing the canvas.
//!
//! Import decodes into the strict typed schema first, then runs the same
//! validators used before every save. A document failing either step is
//! rejected as a whole; nothing partial is ever handed back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use agroplot_core::validation::{
    validate_canvas_size, validate_elements_array, CanvasSizeOptions, ElementsOptions,
    ValidationResult,
};
use agroplot_core::{
    CanvasSize, DrawingElement, ElementType, PathPoint, Plant, Structure, Terrain,
    UNTITLED_PROJECT_NAME,
};

use crate::error::{DesignResult, ImportError, ImportResult};

/// Export file format version
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// Major version this build can read
const SUPPORTED_MAJOR_VERSION: &str = "1";

/// Producer tag written into every export
pub const EXPORT_GENERATOR: &str = concat!("agroplot ", env!("CARGO_PKG_VERSION"));

/// Complete portable document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub version: String,
    pub project_info: ExportProjectInfo,
    pub canvas_size: CanvasSize,
    pub elements: Vec<ExportElement>,
    pub metadata: ExportMetadata,
}

/// Project summary carried by an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportProjectInfo {
    pub name: String,
    pub exported_at: DateTime<Utc>,
    pub total_elements: usize,
    pub categories: CategoryCounts,
}

/// Element counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub plants: usize,
    pub terrain: usize,
    pub structures: usize,
    /// Rectangles and circles
    pub shapes: usize,
}

impl CategoryCounts {
    /// Count element types
    pub fn tally(types: impl IntoIterator<Item = ElementType>) -> Self {
        let mut counts = Self::default();
        for element_type in types {
            counts.add(element_type);
        }
        counts
    }

    fn add(&mut self, element_type: ElementType) {
        match element_type {
            ElementType::Plant => self.plants += 1,
            ElementType::Terrain => self.terrain += 1,
            ElementType::Structure => self.structures += 1,
            ElementType::Rectangle | ElementType::Circle => self.shapes += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.plants + self.terrain + self.structures + self.shapes
    }
}

/// Export metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub generator: String,
    pub coordinates: CoordinateSystem,
}

/// How element coordinates are to be interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    pub system: String,
    pub origin: String,
    pub units: String,
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self {
            system: "cartesian".to_string(),
            origin: "top-left".to_string(),
            units: "meters".to_string(),
        }
    }
}

/// Serialized element data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportElement {
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
}

impl From<&DrawingElement> for ExportElement {
    fn from(element: &DrawingElement) -> Self {
        Self {
            id: element.id,
            element_type: element.element_type,
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            radius: element.radius,
            rotation: element.rotation,
            plant: element.plant.clone(),
            terrain: element.terrain.clone(),
            structure: element.structure.clone(),
            real_world_width: element.real_world_width,
            real_world_height: element.real_world_height,
            brush_type: element.brush_type.clone(),
            texture: element.texture.clone(),
            path_points: element.path_points.clone(),
        }
    }
}

impl ExportElement {
    /// Convert back into a canvas element (unselected)
    pub fn to_drawing_element(&self) -> DrawingElement {
        DrawingElement {
            id: self.id,
            element_type: self.element_type,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            radius: self.radius,
            rotation: self.rotation,
            plant: self.plant.clone(),
            terrain: self.terrain.clone(),
            structure: self.structure.clone(),
            real_world_width: self.real_world_width,
            real_world_height: self.real_world_height,
            brush_type: self.brush_type.clone(),
            texture: self.texture.clone(),
            path_points: self.path_points.clone(),
            selected: None,
        }
    }
}

impl ExportData {
    /// Elements ready to be adopted by a project
    pub fn to_drawing_elements(&self) -> Vec<DrawingElement> {
        self.elements
            .iter()
            .map(ExportElement::to_drawing_element)
            .collect()
    }
}

/// Build an export document stamped with the current time
pub fn create_export_data(
    elements: &[DrawingElement],
    canvas_size: CanvasSize,
    name: Option<&str>,
) -> ExportData {
    create_export_data_at(elements, canvas_size, name, Utc::now())
}

/// Build an export document stamped with `exported_at`
///
/// Deterministic: the same inputs always give the same document.
pub fn create_export_data_at(
    elements: &[DrawingElement],
    canvas_size: CanvasSize,
    name: Option<&str>,
    exported_at: DateTime<Utc>,
) -> ExportData {
    let categories = CategoryCounts::tally(elements.iter().map(|e| e.element_type));

    ExportData {
        version: EXPORT_FORMAT_VERSION.to_string(),
        project_info: ExportProjectInfo {
            name: name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(UNTITLED_PROJECT_NAME)
                .to_string(),
            exported_at,
            total_elements: elements.len(),
            categories,
        },
        canvas_size,
        elements: elements.iter().map(ExportElement::from).collect(),
        metadata: ExportMetadata {
            generator: EXPORT_GENERATOR.to_string(),
            coordinates: CoordinateSystem::default(),
        },
    }
}

/// Serialize a project as a pretty-printed JSON export document
pub fn export_project_as_json(
    elements: &[DrawingElement],
    canvas_size: CanvasSize,
    name: Option<&str>,
) -> DesignResult<String> {
    let data = create_export_data(elements, canvas_size, name);
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Write a project export to `path`
pub fn export_project_to_file(
    path: impl AsRef<Path>,
    elements: &[DrawingElement],
    canvas_size: CanvasSize,
    name: Option<&str>,
) -> DesignResult<()> {
    let json = export_project_as_json(elements, canvas_size, name)?;
    std::fs::write(path.as_ref(), json)?;
    tracing::info!(
        "Exported {} elements to {}",
        elements.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// File name offered for an export, e.g. `my-garden-2026-10-17.json`
pub fn suggested_file_name(name: Option<&str>, date: DateTime<Utc>) -> String {
    let mut slug = String::new();
    for c in name.unwrap_or_default().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "agroplot-project" } else { slug };
    format!("{}-{}.json", slug, date.format("%Y-%m-%d"))
}

/// Validate a decoded export document
///
/// Checks the format version, the canvas size, and every element. A
/// `totalElements` that disagrees with the element list is only a warning.
pub fn validate_export_data(data: &ExportData) -> ValidationResult {
    let version = data.version.trim();
    if version.is_empty() {
        return ValidationResult::invalid("Export version is required");
    }
    if version.split('.').next() != Some(SUPPORTED_MAJOR_VERSION) {
        return ValidationResult::invalid(format!(
            "Unsupported export version '{version}' (supported: {SUPPORTED_MAJOR_VERSION}.x)"
        ));
    }

    let canvas = validate_canvas_size(&data.canvas_size, &CanvasSizeOptions::default());
    if !canvas.is_valid() {
        return canvas;
    }

    let elements = validate_elements_array(&data.to_drawing_elements(), &ElementsOptions::default());
    if !elements.is_valid() {
        return elements;
    }

    if data.project_info.total_elements != data.elements.len() {
        return elements.with_warning(format!(
            "projectInfo.totalElements is {} but the document has {} elements",
            data.project_info.total_elements,
            data.elements.len()
        ));
    }
    elements
}

/// Parse and validate a portable document
pub fn import_project_from_json(text: &str) -> ImportResult<ExportData> {
    let data: ExportData = serde_json::from_str(text).map_err(|e| {
        let err = ImportError::from(e);
        tracing::warn!("Import rejected: {}", err);
        err
    })?;

    let result = validate_export_data(&data);
    if let Some(reason) = result.error {
        tracing::warn!("Import rejected: {}", reason);
        return Err(ImportError::Invalid(reason));
    }
    if let Some(warning) = result.warning {
        tracing::warn!("Import warning: {}", warning);
    }

    tracing::debug!(
        "Imported '{}' with {} elements",
        data.project_info.name,
        data.elements.len()
    );
    Ok(data)
}

/// Read a portable document from disk and import it
pub async fn import_project_from_file(path: impl AsRef<Path>) -> ImportResult<ExportData> {
    let text = tokio::fs::read_to_string(path.as_ref()).await?;
    import_project_from_json(&text)
}
