//! Catalog item validators

use super::{check_color, check_name_length, require, ValidationResult};
use crate::data::spacing::spacing_regex;
use crate::data::{Plant, Structure, Terrain};

const MIN_BRUSH_THICKNESS: f64 = 1.0;
const MAX_BRUSH_THICKNESS: f64 = 100.0;

/// Exclusive lower bound for structure dimensions, meters
pub const MIN_STRUCTURE_DIMENSION: f64 = 0.1;
/// Inclusive upper bound for structure dimensions, meters
pub const MAX_STRUCTURE_DIMENSION: f64 = 100.0;

/// Validate a plant
pub fn validate_plant(plant: &Plant) -> ValidationResult {
    check_plant(plant).into()
}

fn check_plant(plant: &Plant) -> Result<(), String> {
    require(&plant.id, "Plant id")?;
    require(&plant.name, "Plant name")?;
    require(&plant.spacing, "Plant spacing")?;
    require(&plant.category, "Plant category")?;
    require(&plant.color, "Plant color")?;

    check_name_length(&plant.name, "Plant name")?;

    if !spacing_regex().is_match(&plant.spacing) {
        return Err(format!(
            "Invalid plant spacing format: '{}' (expected e.g. '30cm', '1m', '0.5x0.8m')",
            plant.spacing
        ));
    }
    check_color(&plant.color, "plant color")
}

/// Validate a terrain
pub fn validate_terrain(terrain: &Terrain) -> ValidationResult {
    check_terrain(terrain).into()
}

fn check_terrain(terrain: &Terrain) -> Result<(), String> {
    require(&terrain.id, "Terrain id")?;
    require(&terrain.name, "Terrain name")?;
    require(&terrain.category, "Terrain category")?;
    require(&terrain.color, "Terrain color")?;

    check_name_length(&terrain.name, "Terrain name")?;
    check_color(&terrain.color, "terrain color")?;

    if let Some(thickness) = terrain.brush_thickness {
        let in_range = thickness.is_finite()
            && thickness.fract() == 0.0
            && (MIN_BRUSH_THICKNESS..=MAX_BRUSH_THICKNESS).contains(&thickness);
        if !in_range {
            return Err(format!(
                "Terrain brushThickness must be an integer between 1 and 100 (got {thickness})"
            ));
        }
    }
    Ok(())
}

/// Validate a structure
pub fn validate_structure(structure: &Structure) -> ValidationResult {
    check_structure(structure).into()
}

fn check_structure(structure: &Structure) -> Result<(), String> {
    require(&structure.id, "Structure id")?;
    require(&structure.name, "Structure name")?;
    require(&structure.category, "Structure category")?;
    require(&structure.color, "Structure color")?;

    check_name_length(&structure.name, "Structure name")?;
    check_color(&structure.color, "structure color")?;

    for (field, value) in [
        ("width", structure.size.width),
        ("height", structure.size.height),
    ] {
        if !value.is_finite() {
            return Err(format!("Structure size.{field} must be a finite number"));
        }
        if value <= MIN_STRUCTURE_DIMENSION || value > MAX_STRUCTURE_DIMENSION {
            return Err(format!(
                "Structure size.{field} must be greater than {MIN_STRUCTURE_DIMENSION} and at most {MAX_STRUCTURE_DIMENSION} meters (got {value})"
            ));
        }
    }
    Ok(())
}
