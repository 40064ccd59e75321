//! Planting distance parsing
//!
//! Spacing strings come in four shapes: `"<n>m"`, `"<n>cm"`, `"<n>x<n>m"` and
//! `"<n>x<n>cm"`. The first number is the in-row distance, the optional second
//! number the distance between rows.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::SpacingError;

/// Pattern every plant spacing must match
///
/// Digits are ASCII only; the `regex` crate's `\d` would also admit other
/// Unicode decimal digits that `f64::from_str` cannot read.
pub const SPACING_PATTERN: &str = r"^([0-9]+(\.[0-9]+)?)(x([0-9]+(\.[0-9]+)?))?(cm|m)$";

/// Compiled [`SPACING_PATTERN`]
pub fn spacing_regex() -> &'static Regex {
    static SPACING_REGEX: OnceLock<Regex> = OnceLock::new();
    SPACING_REGEX.get_or_init(|| Regex::new(SPACING_PATTERN).expect("invalid regex pattern"))
}

/// Unit of a spacing string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingUnit {
    /// Centimeters
    Cm,
    /// Meters
    M,
}

impl SpacingUnit {
    /// Factor converting a value in this unit to meters
    pub fn to_meters_factor(&self) -> f64 {
        match self {
            SpacingUnit::Cm => 0.01,
            SpacingUnit::M => 1.0,
        }
    }
}

impl fmt::Display for SpacingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cm => write!(f, "cm"),
            Self::M => write!(f, "m"),
        }
    }
}

/// A parsed planting distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Distance between plants in a row
    pub row: f64,
    /// Distance between rows, when given as `<row>x<column>`
    pub column: Option<f64>,
    pub unit: SpacingUnit,
}

impl Spacing {
    /// In-row distance in meters
    pub fn in_row_meters(&self) -> f64 {
        self.row * self.unit.to_meters_factor()
    }

    /// Between-row distance in meters, falling back to the in-row distance
    pub fn between_rows_meters(&self) -> f64 {
        self.column.unwrap_or(self.row) * self.unit.to_meters_factor()
    }

    /// Ground area claimed by one plant, in square meters
    pub fn area_per_plant(&self) -> f64 {
        self.in_row_meters() * self.between_rows_meters()
    }
}

impl FromStr for Spacing {
    type Err = SpacingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(SpacingError::Empty);
        }

        let caps = spacing_regex()
            .captures(value)
            .ok_or_else(|| SpacingError::InvalidFormat {
                value: value.to_string(),
            })?;

        let parse_number = |text: &str| {
            text.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| SpacingError::InvalidNumber {
                    value: value.to_string(),
                    number: text.to_string(),
                })
        };

        let row = parse_number(&caps[1])?;
        let column = caps.get(4).map(|m| parse_number(m.as_str())).transpose()?;
        let unit = match &caps[6] {
            "cm" => SpacingUnit::Cm,
            _ => SpacingUnit::M,
        };

        Ok(Spacing { row, column, unit })
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}x{}{}", self.row, column, self.unit),
            None => write!(f, "{}{}", self.row, self.unit),
        }
    }
}
