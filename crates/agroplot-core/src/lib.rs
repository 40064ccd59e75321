//! # AgroPlot Core
//!
//! Core types, validation rules, and utilities for AgroPlot.
//! Provides the data model of a design project (plants, terrain patches,
//! structures and freeform shapes placed on a canvas) and the pure validators
//! every write path runs before data is persisted or adopted.

pub mod data;
pub mod error;
pub mod types;
pub mod validation;

pub use data::{
    CanvasSize, DrawingElement, ElementType, PathPoint, Plant, ProjectData, ProjectInfo,
    ProjectMetadata, Spacing, SpacingUnit, Structure, StructureSize, Terrain,
    PROJECT_SCHEMA_VERSION, UNTITLED_PROJECT_NAME,
};

pub use error::{Error, Result, SpacingError, ValidationError};

pub use types::{thread_safe_none, thread_safe_rw_map, ThreadSafeOption, ThreadSafeRwMap};

pub use validation::{
    validate_canvas_size, validate_canvas_state, validate_drawing_element,
    validate_elements_array, validate_plant, validate_project_data, validate_structure,
    validate_terrain, CanvasSizeOptions, CanvasStateOptions, ElementsOptions, ValidationResult,
};
