use std::sync::Arc;
use std::time::Duration;

use agroplot_projectdb::{AutoSaveConfig, AutoSaveScheduler, ProjectStore};
use agroplot_settings::UserPreferences;

use super::common::project;

fn scheduler(minutes: u32) -> (Arc<ProjectStore>, AutoSaveScheduler) {
    let store = Arc::new(ProjectStore::in_memory());
    let scheduler = AutoSaveScheduler::new(store.clone(), AutoSaveConfig::interval_minutes(minutes));
    (store, scheduler)
}

#[tokio::test(start_paused = true)]
async fn test_three_ticks_save_latest_project() {
    let (store, scheduler) = scheduler(1);
    scheduler.start(project(1)).unwrap();
    assert!(scheduler.is_running());

    tokio::time::sleep(Duration::from_secs(30)).await;
    scheduler.update_project(project(2));

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(scheduler.save_count(), 1);
    scheduler.update_project(project(3));

    tokio::time::sleep(Duration::from_secs(91)).await;
    assert_eq!(scheduler.save_count(), 3);

    let current = store.current_project().unwrap();
    assert_eq!(current.timestamp, project(3).timestamp);

    let names: Vec<_> = store.project_history().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Plot 3", "Plot 3", "Plot 2"]);
}

#[tokio::test(start_paused = true)]
async fn test_no_save_before_first_interval() {
    let (store, scheduler) = scheduler(1);
    scheduler.start(project(1));

    tokio::time::sleep(Duration::from_secs(59)).await;
    assert_eq!(scheduler.save_count(), 0);
    assert!(store.current_project().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_stop_cancels_timer() {
    let (_store, scheduler) = scheduler(1);
    scheduler.start(project(1));

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(scheduler.save_count(), 1);

    assert!(scheduler.stop());
    assert!(!scheduler.stop());
    assert!(!scheduler.is_running());

    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(scheduler.save_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_restart_supersedes_previous_session() {
    let (_store, scheduler) = scheduler(1);
    let first = scheduler.start(project(1)).unwrap();

    tokio::time::sleep(Duration::from_secs(30)).await;
    let second = scheduler.start(project(2)).unwrap();
    assert_ne!(first, second);
    assert_eq!(scheduler.session_id(), Some(second));

    // The first session would have fired at 60s; the second fires at 90s
    tokio::time::sleep(Duration::from_secs(45)).await;
    assert_eq!(scheduler.save_count(), 0);

    tokio::time::sleep(Duration::from_secs(20)).await;
    assert_eq!(scheduler.save_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_config_does_not_start() {
    let store = Arc::new(ProjectStore::in_memory());
    let prefs = UserPreferences {
        auto_save: false,
        ..Default::default()
    };
    let scheduler = AutoSaveScheduler::new(store.clone(), AutoSaveConfig::from_preferences(&prefs));

    assert!(scheduler.start(project(1)).is_none());
    assert!(!scheduler.is_running());

    tokio::time::sleep(Duration::from_secs(3600)).await;
    assert!(store.current_project().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_tick_saves_snapshot_without_touching_tracked_copy() {
    let (store, scheduler) = scheduler(1);
    let mut tracked = project(1);
    tracked.metadata.elements_count = 0;
    scheduler.start(tracked);

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(store.current_project().unwrap().metadata.elements_count, 2);
    assert_eq!(scheduler.current_project().unwrap().metadata.elements_count, 0);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_project_is_skipped() {
    let (store, scheduler) = scheduler(1);
    let mut broken = project(1);
    broken.version = String::new();
    scheduler.start(broken);

    tokio::time::sleep(Duration::from_secs(121)).await;
    assert_eq!(scheduler.save_count(), 0);
    assert!(scheduler.is_running());
    assert!(store.current_project().is_none());
}

#[tokio::test]
async fn test_save_now() {
    let (store, scheduler) = scheduler(5);
    assert!(scheduler.save_now().unwrap().is_none());

    scheduler.update_project(project(4));
    let saved = scheduler.save_now().unwrap().unwrap();
    assert_eq!(store.current_project(), Some(saved));
    assert_eq!(scheduler.save_count(), 1);
}

#[tokio::test]
async fn test_drop_aborts_session() {
    let (_store, scheduler) = scheduler(1);
    scheduler.start(project(1));
    drop(scheduler);
}
