//! Aggregate figures for a design.
//!
//! Informational only; nothing here gates a save or an import.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use agroplot_core::{DrawingElement, ElementType};

use crate::serialization::CategoryCounts;

/// Summary of the elements on a canvas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatistics {
    pub total_elements: usize,
    pub plants: usize,
    pub terrain: usize,
    pub structures: usize,
    pub shapes: usize,
    /// Distinct plant catalog ids in use
    pub unique_plants: usize,
    /// Terrain surface in square meters
    pub total_area: f64,
    /// Mean in-row spacing in meters over plants with a readable spacing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_plant_spacing: Option<f64>,
}

impl ProjectStatistics {
    pub fn categories(&self) -> CategoryCounts {
        CategoryCounts {
            plants: self.plants,
            terrain: self.terrain,
            structures: self.structures,
            shapes: self.shapes,
        }
    }
}

impl fmt::Display for ProjectStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elements:        {}", self.total_elements)?;
        writeln!(
            f,
            "  plants {} ({} unique), terrain {}, structures {}, shapes {}",
            self.plants, self.unique_plants, self.terrain, self.structures, self.shapes
        )?;
        write!(f, "Terrain area:    {:.2} m²", self.total_area)?;
        if let Some(spacing) = self.average_plant_spacing {
            write!(f, "\nAverage spacing: {:.2} m", spacing)?;
        }
        Ok(())
    }
}

/// Derive counts, terrain area and average plant spacing from `elements`
pub fn calculate_project_statistics(elements: &[DrawingElement]) -> ProjectStatistics {
    let categories = CategoryCounts::tally(elements.iter().map(|e| e.element_type));

    let mut plant_ids = HashSet::new();
    let mut spacing_sum = 0.0;
    let mut spacing_count = 0usize;
    let mut total_area = 0.0;

    for element in elements {
        match element.element_type {
            ElementType::Plant => {
                let Some(plant) = &element.plant else {
                    continue;
                };
                plant_ids.insert(plant.id.as_str());
                match plant.parsed_spacing() {
                    Ok(spacing) => {
                        spacing_sum += spacing.in_row_meters();
                        spacing_count += 1;
                    }
                    Err(e) => tracing::debug!("Skipping plant {} in spacing average: {}", plant.id, e),
                }
            }
            ElementType::Terrain => {
                if let (Some(w), Some(h)) = (element.real_world_width, element.real_world_height) {
                    total_area += w * h;
                }
            }
            _ => {}
        }
    }

    ProjectStatistics {
        total_elements: elements.len(),
        plants: categories.plants,
        terrain: categories.terrain,
        structures: categories.structures,
        shapes: categories.shapes,
        unique_plants: plant_ids.len(),
        total_area,
        average_plant_spacing: (spacing_count > 0).then(|| spacing_sum / spacing_count as f64),
    }
}
