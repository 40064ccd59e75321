//! Canvas and project-level validators

use super::{
    nested, validate_elements_array, validate_plant, validate_structure, validate_terrain,
    ElementsOptions, ValidationResult,
};
use crate::data::{CanvasSize, DrawingElement, ProjectData};

/// Bounds for [`validate_canvas_size`], in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSizeOptions {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: f64,
    pub max_height: f64,
}

impl Default for CanvasSizeOptions {
    fn default() -> Self {
        Self {
            min_width: 1.0,
            min_height: 1.0,
            max_width: 200.0,
            max_height: 200.0,
        }
    }
}

/// Options for [`validate_canvas_state`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasStateOptions {
    pub canvas: CanvasSizeOptions,
    pub elements: ElementsOptions,
}

/// Validate canvas dimensions against min/max bounds
pub fn validate_canvas_size(size: &CanvasSize, options: &CanvasSizeOptions) -> ValidationResult {
    check_canvas_size(size, options).into()
}

fn check_canvas_size(size: &CanvasSize, options: &CanvasSizeOptions) -> Result<(), String> {
    for (field, value) in [("width", size.width), ("height", size.height)] {
        if !value.is_finite() {
            return Err(format!("Canvas {field} must be a finite number"));
        }
    }

    if size.width < options.min_width || size.width > options.max_width {
        return Err(format!(
            "Canvas width must be between {} and {} (got {})",
            options.min_width, options.max_width, size.width
        ));
    }
    if size.height < options.min_height || size.height > options.max_height {
        return Err(format!(
            "Canvas height must be between {} and {} (got {})",
            options.min_height, options.max_height, size.height
        ));
    }
    Ok(())
}

/// Validate a canvas size and its elements, size first
pub fn validate_canvas_state(
    size: &CanvasSize,
    elements: &[DrawingElement],
    options: &CanvasStateOptions,
) -> ValidationResult {
    let size_result = validate_canvas_size(size, &options.canvas);
    if !size_result.is_valid() {
        return size_result;
    }
    validate_elements_array(elements, &options.elements)
}

/// Structural check applied to a project before it is persisted or adopted
/// from storage
pub fn validate_project_data(project: &ProjectData) -> ValidationResult {
    if let Err(message) = check_project_header(project) {
        return ValidationResult::invalid(message);
    }
    validate_canvas_state(
        &project.canvas_size,
        &project.elements,
        &CanvasStateOptions::default(),
    )
}

fn check_project_header(project: &ProjectData) -> Result<(), String> {
    if project.version.trim().is_empty() {
        return Err("Project version is required".to_string());
    }
    if project.timestamp <= 0 {
        return Err(format!(
            "Project timestamp must be a positive epoch-millisecond value (got {})",
            project.timestamp
        ));
    }
    if let Some(plant) = &project.selected_plant {
        nested(validate_plant(plant))?;
    }
    if let Some(terrain) = &project.selected_terrain {
        nested(validate_terrain(terrain))?;
    }
    if let Some(structure) = &project.selected_structure {
        nested(validate_structure(structure))?;
    }
    Ok(())
}
