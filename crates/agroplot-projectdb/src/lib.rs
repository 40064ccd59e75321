//! # AgroPlot Project Database
//!
//! Persistence for the project being designed: the current project, a
//! bounded history of saves, user preferences and periodic auto-save, all
//! kept in a string key/value substrate.

pub mod autosave;
pub mod error;
pub mod manager;
pub mod model;
pub mod storage;

pub use autosave::{AutoSaveConfig, AutoSaveScheduler};
pub use error::{StorageError, StorageResult, StoreError, StoreResult};
pub use manager::ProjectStore;
pub use model::{
    ProjectHistoryEntry, StorageInfo, CURRENT_PROJECT_KEY, LAST_SAVE_KEY,
    MAX_HISTORY_ENTRIES, PROJECT_HISTORY_KEY, STORAGE_QUOTA_BYTES, STORE_KEYS,
    USER_PREFERENCES_KEY,
};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
