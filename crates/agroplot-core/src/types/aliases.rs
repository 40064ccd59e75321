//! Type aliases for thread-safe shared state.
//!
//! Storage substrates and the auto-save task are shared between the caller and
//! a tokio task, so shared state is `Arc`-wrapped and guarded by `parking_lot`
//! locks, which never poison.
//!
//! ```rust,ignore
//! use agroplot_core::types::*;
//!
//! let project: ThreadSafeOption<ProjectData> = thread_safe_none();
//! *project.lock() = Some(ProjectData::default());
//! ```

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

/// A thread-safe slot that may be empty.
pub type ThreadSafeOption<T> = Arc<Mutex<Option<T>>>;

/// A thread-safe map with many readers and one writer.
pub type ThreadSafeRwMap<K, V> = Arc<RwLock<HashMap<K, V>>>;

/// Create an empty [`ThreadSafeOption`].
pub fn thread_safe_none<T>() -> ThreadSafeOption<T> {
    Arc::new(Mutex::new(None))
}

/// Create an empty [`ThreadSafeRwMap`].
pub fn thread_safe_rw_map<K, V>() -> ThreadSafeRwMap<K, V> {
    Arc::new(RwLock::new(HashMap::new()))
}
