//! Project store
//!
//! The only write path to persisted project state. Every save is validated
//! first; nothing is written when validation fails. Reads are lenient: a
//! missing or damaged value reads as absent (or as defaults, for
//! preferences) and the reason goes to the log.

use chrono::Utc;
use std::fmt;
use std::sync::Arc;

use agroplot_core::{validate_project_data, ProjectData};
use agroplot_settings::{PreferencesUpdate, UserPreferences};

use crate::error::{StorageResult, StoreError, StoreResult};
use crate::model::{
    ProjectHistoryEntry, StorageInfo, CURRENT_PROJECT_KEY, LAST_SAVE_KEY,
    MAX_HISTORY_ENTRIES, PROJECT_HISTORY_KEY, STORE_KEYS, USER_PREFERENCES_KEY,
};
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};

/// Repository for the current project, its history and user preferences
pub struct ProjectStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("storage", &self.storage.name())
            .finish()
    }
}

impl ProjectStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// Share a substrate with other owners
    pub fn with_storage(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by process memory
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Store backed by the platform data directory
    pub fn open_default() -> StoreResult<Self> {
        Ok(Self::new(FileStorage::open_default()?))
    }

    pub fn storage(&self) -> &Arc<dyn KeyValueStorage> {
        &self.storage
    }

    /// Read the current project, reporting why it could not be used
    ///
    /// `Ok(None)` means nothing was ever saved.
    pub fn try_current_project(&self) -> StoreResult<Option<ProjectData>> {
        let Some(raw) = self.storage.get(CURRENT_PROJECT_KEY)? else {
            return Ok(None);
        };
        let project: ProjectData = serde_json::from_str(&raw)?;
        validate_project_data(&project).into_result()?;
        Ok(Some(project))
    }

    /// Read the current project; damaged data reads as absent
    pub fn current_project(&self) -> Option<ProjectData> {
        self.try_current_project().unwrap_or_else(|e| {
            tracing::warn!("Ignoring stored project: {}", e);
            None
        })
    }

    /// Validate and persist `project` as the current project
    ///
    /// Stamps `lastModified`, recomputes `metadata.elementsCount`, then
    /// records the save time and a history entry. Only the project write
    /// decides the outcome; the two follow-up writes are logged on failure.
    /// Returns the copy that was written.
    pub fn save_current_project(&self, project: &ProjectData) -> StoreResult<ProjectData> {
        if let Err(e) = validate_project_data(project).into_result() {
            tracing::warn!("Refusing to save project: {}", e.message);
            return Err(e.into());
        }

        let mut saved = project.clone();
        saved.last_modified = Utc::now();
        saved.metadata.elements_count = saved.elements.len();

        let json = serde_json::to_string(&saved)?;
        if let Err(e) = self.storage.set(CURRENT_PROJECT_KEY, &json) {
            tracing::error!("Failed to save current project: {}", e);
            return Err(e.into());
        }

        let saved_at = saved.last_modified.timestamp_millis().to_string();
        if let Err(e) = self.storage.set(LAST_SAVE_KEY, &saved_at) {
            tracing::warn!("Failed to record save time: {}", e);
        }
        if let Err(e) = self.add_to_history(&saved) {
            tracing::warn!("Failed to update project history: {}", e);
        }

        tracing::debug!(
            "Saved project '{}' with {} elements",
            saved.display_name(),
            saved.metadata.elements_count
        );
        Ok(saved)
    }

    /// Epoch milliseconds of the last successful save
    pub fn last_save_timestamp(&self) -> Option<i64> {
        match self.storage.get(LAST_SAVE_KEY) {
            Ok(raw) => raw.and_then(|value| value.trim().parse().ok()),
            Err(e) => {
                tracing::warn!("Failed to read save time: {}", e);
                None
            }
        }
    }

    /// Saved project summaries, newest first; empty when missing or damaged
    pub fn project_history(&self) -> Vec<ProjectHistoryEntry> {
        let raw = match self.storage.get(PROJECT_HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read project history: {}", e);
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed project history: {}", e);
            Vec::new()
        })
    }

    fn add_to_history(&self, project: &ProjectData) -> StoreResult<()> {
        let mut history = self.project_history();
        history.insert(0, ProjectHistoryEntry::from_project(project));
        history.truncate(MAX_HISTORY_ENTRIES);

        self.write_history(&history)
    }

    fn write_history(&self, history: &[ProjectHistoryEntry]) -> StoreResult<()> {
        let json = serde_json::to_string(history)?;
        self.storage.set(PROJECT_HISTORY_KEY, &json)?;
        Ok(())
    }

    /// Remove one entry from the history
    pub fn delete_project_from_history(&self, id: &str) -> StoreResult<()> {
        let mut history = self.project_history();
        let Some(index) = history.iter().position(|entry| entry.id == id) else {
            return Err(StoreError::HistoryEntryNotFound(id.to_string()));
        };
        history.remove(index);
        self.write_history(&history)?;
        tracing::debug!("Removed history entry {}", id);
        Ok(())
    }

    /// Recall a project listed in the history
    ///
    /// Only the current project is stored in full, so this succeeds only when
    /// `id` names the entry recorded by the save that produced it.
    pub fn load_project_from_history(&self, id: &str) -> Option<ProjectData> {
        let project = self.current_project()?;
        let history = self.project_history();
        let entry = history.iter().find(|entry| entry.id == id)?;
        if entry.describes(&project) {
            Some(project)
        } else {
            tracing::debug!("History entry {} is not the current project", id);
            None
        }
    }

    /// Current preferences, created with defaults on first read
    pub fn user_preferences(&self) -> UserPreferences {
        match self.storage.get(USER_PREFERENCES_KEY) {
            Ok(Some(raw)) => UserPreferences::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!("Using default preferences: {}", e);
                UserPreferences::default()
            }),
            Ok(None) => {
                let defaults = UserPreferences::default();
                if let Err(e) = self.write_preferences(&defaults) {
                    tracing::warn!("Failed to store default preferences: {}", e);
                }
                defaults
            }
            Err(e) => {
                tracing::warn!("Failed to read preferences: {}", e);
                UserPreferences::default()
            }
        }
    }

    /// Merge `update` into the stored preferences and persist the result
    pub fn save_user_preferences(&self, update: PreferencesUpdate) -> StoreResult<UserPreferences> {
        let merged = self.user_preferences().merge(update);
        merged.validate()?;
        self.write_preferences(&merged)?;
        tracing::debug!("Saved user preferences");
        Ok(merged)
    }

    fn write_preferences(&self, preferences: &UserPreferences) -> StoreResult<()> {
        let json = serde_json::to_string(preferences)?;
        self.storage.set(USER_PREFERENCES_KEY, &json)?;
        Ok(())
    }

    /// Remove every key the store owns
    ///
    /// All keys are attempted; the first failure is reported.
    pub fn clear_all_data(&self) -> StoreResult<()> {
        let mut first_error = None;
        for key in STORE_KEYS {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!("Failed to clear '{}': {}", key, e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e.into()),
            None => {
                tracing::info!("Cleared all stored project data");
                Ok(())
            }
        }
    }

    /// Space used by the store's keys against the storage quota
    pub fn storage_info(&self) -> StorageInfo {
        match self.used_bytes() {
            Ok(used) => StorageInfo::from_used(used),
            Err(e) => {
                tracing::warn!("Failed to measure storage: {}", e);
                StorageInfo::from_used(0)
            }
        }
    }

    fn used_bytes(&self) -> StorageResult<usize> {
        let mut used = 0;
        for key in STORE_KEYS {
            if let Some(value) = self.storage.get(key)? {
                used += key.len() + value.len();
            }
        }
        Ok(used)
    }
}
