//! # AgroPlot Designer
//!
//! Portable export/import of designs and aggregate project statistics.
//!
//! ## Components
//!
//! - **Serialization**: builds the versioned export document from a canvas,
//!   writes it to disk, and imports documents back after strict decoding and
//!   validation
//! - **Statistics**: element counts per category, terrain area and average
//!   plant spacing
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agroplot_designer::{export_project_as_json, import_project_from_json};
//!
//! let json = export_project_as_json(&elements, canvas_size, Some("Backyard"))?;
//! let data = import_project_from_json(&json)?;
//! assert_eq!(data.project_info.total_elements, elements.len());
//! ```

pub mod error;
pub mod serialization;
pub mod statistics;

pub use error::{DesignResult, ExportError, ImportError, ImportResult};
pub use serialization::{
    create_export_data, create_export_data_at, export_project_as_json, export_project_to_file,
    import_project_from_file, import_project_from_json, suggested_file_name,
    validate_export_data, CategoryCounts, CoordinateSystem, ExportData, ExportElement,
    ExportMetadata, ExportProjectInfo, EXPORT_FORMAT_VERSION, EXPORT_GENERATOR,
};
pub use statistics::{calculate_project_statistics, ProjectStatistics};
