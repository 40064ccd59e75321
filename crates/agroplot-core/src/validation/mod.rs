//! Validation rules for project data
//!
//! Every validator is a pure function returning a [`ValidationResult`]. Rules
//! short-circuit in a fixed order, cheapest first:
//!
//! 1. Presence of required fields
//! 2. String length bounds (names are at most 100 characters)
//! 3. Format patterns (spacing, hex color)
//! 4. Numeric ranges (structure dimensions, brush thickness, canvas bounds,
//!    element coordinates)
//! 5. Nested items (an element's embedded plant/terrain/structure), whose
//!    error is surfaced unchanged
//!
//! Validators never panic and never mutate their input. Checks are written as
//! `Result<(), String>` internally so `?` gives the short-circuit, then
//! converted into a [`ValidationResult`] at the public boundary.

mod canvas;
mod elements;
mod items;

pub use canvas::{
    validate_canvas_size, validate_canvas_state, validate_project_data, CanvasSizeOptions,
    CanvasStateOptions,
};
pub use elements::{validate_drawing_element, validate_elements_array, ElementsOptions};
pub use items::{
    validate_plant, validate_structure, validate_terrain, MAX_STRUCTURE_DIMENSION,
    MIN_STRUCTURE_DIMENSION,
};

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::error::ValidationError;

/// Maximum length of any catalog item name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Largest absolute coordinate accepted on the canvas
pub const MAX_COORDINATE: f64 = 100_000.0;

/// Default cap on the number of elements in a project
pub const DEFAULT_MAX_ELEMENTS: usize = 1000;

/// Pattern every color must match
pub const COLOR_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";

pub(crate) fn color_regex() -> &'static Regex {
    static COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    COLOR_REGEX.get_or_init(|| Regex::new(COLOR_PATTERN).expect("invalid regex pattern"))
}

/// Outcome of a validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ValidationResult {
    /// A passing result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            warning: None,
        }
    }

    /// A failing result with a reason
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            warning: None,
        }
    }

    /// Attach a non-fatal warning
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Error message, if the result failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Convert into a `Result` so callers can propagate with `?`
    ///
    /// The passing result is returned so any warning is kept.
    pub fn into_result(self) -> Result<Self, ValidationError> {
        if self.is_valid {
            Ok(self)
        } else {
            Err(ValidationError::new(
                self.error.unwrap_or_else(|| "Unknown validation error".to_string()),
            ))
        }
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(check: Result<(), String>) -> Self {
        match check {
            Ok(()) => Self::valid(),
            Err(message) => Self::invalid(message),
        }
    }
}

/// Turn a failed nested result back into an `Err` carrying its exact message
pub(crate) fn nested(result: ValidationResult) -> Result<(), String> {
    if result.is_valid {
        Ok(())
    } else {
        Err(result
            .error
            .unwrap_or_else(|| "Unknown validation error".to_string()))
    }
}

pub(crate) fn require(value: &str, what: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{what} is required"))
    } else {
        Ok(())
    }
}

/// Names are measured in UTF-16 code units, the length browsers report
pub(crate) fn check_name_length(name: &str, what: &str) -> Result<(), String> {
    if name.encode_utf16().count() > MAX_NAME_LENGTH {
        Err(format!(
            "{what} must be {MAX_NAME_LENGTH} characters or less"
        ))
    } else {
        Ok(())
    }
}

pub(crate) fn check_color(color: &str, what: &str) -> Result<(), String> {
    if color_regex().is_match(color) {
        Ok(())
    } else {
        Err(format!(
            "Invalid {what} format: '{color}' (expected a hex color like #4CAF50)"
        ))
    }
}
