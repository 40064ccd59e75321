use agroplot_core::{CanvasSize, ProjectData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key holding the current project
pub const CURRENT_PROJECT_KEY: &str = "current-project";
/// Key holding the project history
pub const PROJECT_HISTORY_KEY: &str = "project-history";
/// Key holding user preferences
pub const USER_PREFERENCES_KEY: &str = "user-preferences";
/// Key holding the last save time (epoch milliseconds)
pub const LAST_SAVE_KEY: &str = "last-save";

/// Every key the store owns
pub const STORE_KEYS: [&str; 4] = [
    CURRENT_PROJECT_KEY,
    PROJECT_HISTORY_KEY,
    USER_PREFERENCES_KEY,
    LAST_SAVE_KEY,
];

/// Maximum number of history entries kept
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Budget reported by [`StorageInfo`], in bytes
pub const STORAGE_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Summary of a saved project, for listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHistoryEntry {
    pub id: String,
    pub name: String,
    /// Creation time of the project, epoch milliseconds
    pub timestamp: i64,
    pub last_modified: DateTime<Utc>,
    pub canvas_size: CanvasSize,
    pub elements_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ProjectHistoryEntry {
    /// Derive the entry for a project as it is saved
    ///
    /// Every call yields a fresh id, so each save gets its own entry even
    /// when two projects share a creation time.
    pub fn from_project(project: &ProjectData) -> Self {
        Self {
            id: format!("project-{}-{}", project.timestamp, Uuid::new_v4().simple()),
            name: project.display_name().to_string(),
            timestamp: project.timestamp,
            last_modified: project.last_modified,
            canvas_size: project.canvas_size,
            elements_count: project.elements.len(),
            thumbnail: None,
            tags: project.metadata.tags.clone(),
        }
    }

    /// Whether this entry records the save that produced `project`
    pub fn describes(&self, project: &ProjectData) -> bool {
        self.timestamp == project.timestamp && self.last_modified == project.last_modified
    }
}

/// Space used by the store's keys
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    pub used: usize,
    pub available: usize,
    pub total: usize,
    pub usage_percentage: f64,
}

impl StorageInfo {
    pub fn from_used(used: usize) -> Self {
        Self::with_total(used, STORAGE_QUOTA_BYTES)
    }

    pub fn with_total(used: usize, total: usize) -> Self {
        let usage_percentage = if total == 0 {
            100.0
        } else {
            used as f64 / total as f64 * 100.0
        };
        Self {
            used,
            available: total.saturating_sub(used),
            total,
            usage_percentage,
        }
    }
}
