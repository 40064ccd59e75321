//! Periodic auto-save
//!
//! The scheduler owns a copy of the project being edited and saves it
//! through [`ProjectStore::save_current_project`] on a fixed interval, the
//! same path a manual save takes. The editor hands over new versions with
//! [`AutoSaveScheduler::update_project`].
//!
//! Each run is a tokio task tagged with a session id. Starting again aborts
//! the previous task before the new one is stored, and dropping the
//! scheduler aborts whatever is running.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

use agroplot_core::{thread_safe_none, ProjectData, ThreadSafeOption};
use agroplot_settings::{UserPreferences, DEFAULT_AUTO_SAVE_INTERVAL};

use crate::error::StoreResult;
use crate::manager::ProjectStore;

/// Auto-save settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSaveConfig {
    pub enabled: bool,
    pub interval: Duration,
}

impl AutoSaveConfig {
    /// Enabled, saving every `minutes` minutes
    pub fn interval_minutes(minutes: u32) -> Self {
        Self {
            enabled: true,
            interval: Duration::from_secs(u64::from(minutes) * 60),
        }
    }

    pub fn from_preferences(preferences: &UserPreferences) -> Self {
        Self {
            enabled: preferences.auto_save,
            ..Self::interval_minutes(preferences.auto_save_interval)
        }
    }

    fn is_active(&self) -> bool {
        self.enabled && !self.interval.is_zero()
    }
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self::interval_minutes(DEFAULT_AUTO_SAVE_INTERVAL)
    }
}

struct Session {
    id: Uuid,
    handle: JoinHandle<()>,
}

/// Saves the tracked project on a timer
pub struct AutoSaveScheduler {
    store: Arc<ProjectStore>,
    config: AutoSaveConfig,
    project: ThreadSafeOption<ProjectData>,
    session: RwLock<Option<Session>>,
    save_count: Arc<AtomicUsize>,
}

impl AutoSaveScheduler {
    pub fn new(store: Arc<ProjectStore>, config: AutoSaveConfig) -> Self {
        Self {
            store,
            config,
            project: thread_safe_none(),
            session: RwLock::new(None),
            save_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn config(&self) -> AutoSaveConfig {
        self.config
    }

    /// Track `project` and start saving it every interval
    ///
    /// The first save happens one interval after this call. Any running
    /// session is cancelled first. Returns the new session id, or `None`
    /// when auto-save is disabled or no tokio runtime is available.
    pub fn start(&self, project: ProjectData) -> Option<Uuid> {
        *self.project.lock() = Some(project);

        let mut session = self.session.write();
        if let Some(previous) = session.take() {
            previous.handle.abort();
            tracing::debug!("Auto-save session {} superseded", previous.id);
        }

        if !self.config.is_active() {
            tracing::debug!("Auto-save disabled; not starting");
            return None;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Cannot start auto-save outside a tokio runtime: {}", e);
                return None;
            }
        };

        let id = Uuid::new_v4();
        let period = self.config.interval;
        let store = self.store.clone();
        let project = self.project.clone();
        let save_count = self.save_count.clone();

        let handle = runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let snapshot = project.lock().clone();
                let Some(snapshot) = snapshot else {
                    continue;
                };
                match store.save_current_project(&snapshot) {
                    Ok(_) => {
                        save_count.fetch_add(1, Ordering::SeqCst);
                        tracing::debug!("Auto-save session {} saved project", id);
                    }
                    Err(e) => tracing::warn!("Auto-save session {} failed: {}", id, e),
                }
            }
        });

        tracing::info!(
            "Auto-save session {} started (every {}s)",
            id,
            period.as_secs()
        );
        *session = Some(Session { id, handle });
        Some(id)
    }

    /// Cancel the running session, if any
    ///
    /// Returns whether a session was cancelled; calling it again is harmless.
    pub fn stop(&self) -> bool {
        match self.session.write().take() {
            Some(session) => {
                session.handle.abort();
                tracing::info!("Auto-save session {} stopped", session.id);
                true
            }
            None => false,
        }
    }

    /// Replace the tracked project; the timer keeps its schedule
    pub fn update_project(&self, project: ProjectData) {
        *self.project.lock() = Some(project);
    }

    pub fn is_running(&self) -> bool {
        self.session
            .read()
            .as_ref()
            .is_some_and(|session| !session.handle.is_finished())
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session.read().as_ref().map(|session| session.id)
    }

    /// Copy of the tracked project
    pub fn current_project(&self) -> Option<ProjectData> {
        self.project.lock().clone()
    }

    /// Successful saves made by this scheduler
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Save the tracked project now, outside the timer
    ///
    /// `Ok(None)` when no project is tracked.
    pub fn save_now(&self) -> StoreResult<Option<ProjectData>> {
        let Some(snapshot) = self.current_project() else {
            return Ok(None);
        };
        let saved = self.store.save_current_project(&snapshot)?;
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(Some(saved))
    }
}

impl Drop for AutoSaveScheduler {
    fn drop(&mut self) {
        if let Some(session) = self.session.get_mut().take() {
            session.handle.abort();
        }
    }
}
