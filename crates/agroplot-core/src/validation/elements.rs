//! Canvas element validators

use super::{
    nested, validate_plant, validate_structure, validate_terrain, ValidationResult,
    DEFAULT_MAX_ELEMENTS, MAX_COORDINATE,
};
use crate::data::DrawingElement;

/// Options for [`validate_elements_array`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementsOptions {
    pub max_elements: usize,
}

impl Default for ElementsOptions {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

/// Validate a single element, including any embedded catalog item
pub fn validate_drawing_element(element: &DrawingElement) -> ValidationResult {
    check_element(element).into()
}

fn check_element(element: &DrawingElement) -> Result<(), String> {
    check_finite("x", element.x)?;
    check_finite("y", element.y)?;
    if let Some(rotation) = element.rotation {
        check_finite("rotation", rotation)?;
    }

    for (field, value) in [
        ("width", element.width),
        ("height", element.height),
        ("radius", element.radius),
        ("realWorldWidth", element.real_world_width),
        ("realWorldHeight", element.real_world_height),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "Element {field} must be a finite, non-negative number (got {value})"
                ));
            }
        }
    }

    check_bounds("x", element.x)?;
    check_bounds("y", element.y)?;

    if let Some(points) = &element.path_points {
        for (index, point) in points.iter().enumerate() {
            let in_bounds = point.x.is_finite()
                && point.y.is_finite()
                && point.x.abs() <= MAX_COORDINATE
                && point.y.abs() <= MAX_COORDINATE;
            if !in_bounds {
                return Err(format!(
                    "Element pathPoints[{index}] must be finite and within ±{MAX_COORDINATE}"
                ));
            }
        }
    }

    if let Some(plant) = &element.plant {
        nested(validate_plant(plant))?;
    }
    if let Some(terrain) = &element.terrain {
        nested(validate_terrain(terrain))?;
    }
    if let Some(structure) = &element.structure {
        nested(validate_structure(structure))?;
    }
    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("Element {field} must be a finite number"))
    }
}

fn check_bounds(field: &str, value: f64) -> Result<(), String> {
    if value.abs() > MAX_COORDINATE {
        Err(format!(
            "Element {field} is out of bounds: {value} (allowed range ±{MAX_COORDINATE})"
        ))
    } else {
        Ok(())
    }
}

/// Validate a list of elements against a maximum count
///
/// The first offending element is reported by index. A warning is attached
/// once the list reaches 90% of the allowed count.
pub fn validate_elements_array(
    elements: &[DrawingElement],
    options: &ElementsOptions,
) -> ValidationResult {
    if elements.len() > options.max_elements {
        return ValidationResult::invalid(format!(
            "Too many elements: {} (maximum {})",
            elements.len(),
            options.max_elements
        ));
    }

    for (index, element) in elements.iter().enumerate() {
        if let Err(message) = check_element(element) {
            return ValidationResult::invalid(format!("Element at index {index}: {message}"));
        }
    }

    let result = ValidationResult::valid();
    if options.max_elements > 0 && elements.len() * 10 >= options.max_elements * 9 {
        result.with_warning(format!(
            "Element count {} is approaching the limit of {}",
            elements.len(),
            options.max_elements
        ))
    } else {
        result
    }
}
