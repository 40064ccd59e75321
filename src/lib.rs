//! # AgroPlot
//!
//! Project data core for an agroecological plot designer: plants, terrain
//! patches and structures laid out on a canvas, saved locally with a bounded
//! history, auto-saved on a timer, and exchanged as portable JSON documents.
//!
//! ## Architecture
//!
//! AgroPlot is organized as a workspace with multiple crates:
//!
//! 1. **agroplot-core** - Data model, spacing parser, validation rules
//! 2. **agroplot-designer** - Export/import of portable documents, statistics
//! 3. **agroplot-settings** - User preferences
//! 4. **agroplot-projectdb** - Key/value storage, project store, auto-save
//! 5. **agroplot** - This crate: re-exports, logging setup and a small CLI
//!
//! Every write to persisted state goes through the validators in
//! `agroplot-core`; imported documents are decoded into a strict schema and
//! validated before anything is handed back.

pub use agroplot_core::{
    validate_canvas_size, validate_canvas_state, validate_drawing_element,
    validate_elements_array, validate_plant, validate_project_data, validate_structure,
    validate_terrain, CanvasSize, CanvasSizeOptions, CanvasStateOptions, DrawingElement,
    ElementType, ElementsOptions, Error, PathPoint, Plant, ProjectData, ProjectInfo,
    ProjectMetadata, Result, Spacing, SpacingUnit, Structure, StructureSize, Terrain,
    ValidationError, ValidationResult,
};

pub use agroplot_designer::{
    calculate_project_statistics, create_export_data, export_project_as_json,
    export_project_to_file, import_project_from_file, import_project_from_json,
    suggested_file_name, validate_export_data, ExportData, ImportError, ProjectStatistics,
};

pub use agroplot_settings::{PreferencesUpdate, Theme, UserPreferences};

pub use agroplot_projectdb::{
    AutoSaveConfig, AutoSaveScheduler, FileStorage, KeyValueStorage, MemoryStorage,
    ProjectHistoryEntry, ProjectStore, StorageInfo, StoreError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support (default level INFO)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
