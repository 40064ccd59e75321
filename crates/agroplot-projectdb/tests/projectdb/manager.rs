use agroplot_core::{CanvasSize, ProjectData};
use agroplot_designer::import_project_from_json;
use agroplot_projectdb::{
    MemoryStorage, ProjectStore, StorageError, StoreError, CURRENT_PROJECT_KEY, LAST_SAVE_KEY,
    PROJECT_HISTORY_KEY, STORE_KEYS,
};

use super::common::{project, FailingKeys};

#[test]
fn test_save_and_read_back() {
    let store = ProjectStore::in_memory();
    let original = project(1);

    let saved = store.save_current_project(&original).unwrap();
    assert!(saved.last_modified >= original.last_modified);

    let current = store.current_project().unwrap();
    assert_eq!(current, saved);
    assert_eq!(current.name(), Some("Plot 1"));
}

#[test]
fn test_save_rewrites_elements_count() {
    let store = ProjectStore::in_memory();
    let mut stale = project(1);
    stale.metadata.elements_count = 99;

    let saved = store.save_current_project(&stale).unwrap();
    assert_eq!(saved.metadata.elements_count, 2);
    assert_eq!(store.current_project().unwrap().metadata.elements_count, 2);

    // The caller's copy is left alone
    assert_eq!(stale.metadata.elements_count, 99);
}

#[test]
fn test_save_records_timestamp() {
    let store = ProjectStore::in_memory();
    let saved = store.save_current_project(&project(1)).unwrap();
    assert_eq!(
        store.last_save_timestamp(),
        Some(saved.last_modified.timestamp_millis())
    );
}

#[test]
fn test_invalid_project_keeps_previous_save() {
    let store = ProjectStore::in_memory();
    store.save_current_project(&project(1)).unwrap();

    let mut broken = project(2);
    broken.elements[0].x = 1e7;
    let err = store.save_current_project(&broken).unwrap_err();
    match err {
        StoreError::Validation(e) => assert!(e.message.contains("Element x"), "{}", e.message),
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(store.current_project().unwrap().timestamp, project(1).timestamp);
    assert_eq!(store.project_history().len(), 1);
}

#[test]
fn test_zero_timestamp_is_rejected() {
    let store = ProjectStore::in_memory();
    let mut project = ProjectData::default();
    project.timestamp = 0;
    assert!(store.save_current_project(&project).is_err());
}

#[test]
fn test_malformed_stored_project_reads_as_absent() {
    let store = ProjectStore::in_memory();
    store.storage().set(CURRENT_PROJECT_KEY, "{not json").unwrap();

    assert!(store.current_project().is_none());
    assert!(matches!(
        store.try_current_project(),
        Err(StoreError::SerializationError(_))
    ));
}

#[test]
fn test_stored_project_failing_validation_reads_as_absent() {
    let store = ProjectStore::in_memory();
    let mut project = project(1);
    project.canvas_size = CanvasSize::new(0.0, 10.0);
    store
        .storage()
        .set(CURRENT_PROJECT_KEY, &serde_json::to_string(&project).unwrap())
        .unwrap();

    assert!(store.current_project().is_none());
    assert!(matches!(
        store.try_current_project(),
        Err(StoreError::Validation(_))
    ));
}

#[test]
fn test_rejected_import_leaves_store_untouched() {
    let store = ProjectStore::in_memory();
    let saved = store.save_current_project(&project(1)).unwrap();

    assert!(import_project_from_json(r#"{"foo": "bar"}"#).is_err());
    assert_eq!(store.current_project(), Some(saved));
}

#[test]
fn test_quota_failure_is_reported() {
    let store = ProjectStore::new(MemoryStorage::with_quota(64));
    let err = store.save_current_project(&project(1)).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Storage(StorageError::QuotaExceeded { .. })
    ));
    assert!(store.current_project().is_none());
    assert!(store.project_history().is_empty());
}

#[test]
fn test_secondary_write_failures_do_not_fail_save() {
    let store = ProjectStore::new(FailingKeys::new(vec![LAST_SAVE_KEY, PROJECT_HISTORY_KEY]));

    let saved = store.save_current_project(&project(1)).unwrap();
    assert_eq!(store.current_project(), Some(saved));
    assert!(store.last_save_timestamp().is_none());
    assert!(store.project_history().is_empty());
}

#[test]
fn test_primary_write_failure_fails_save() {
    let store = ProjectStore::new(FailingKeys::new(vec![CURRENT_PROJECT_KEY]));

    assert!(matches!(
        store.save_current_project(&project(1)),
        Err(StoreError::Storage(_))
    ));
    assert!(store.project_history().is_empty());
}

#[test]
fn test_clear_all_data() {
    let store = ProjectStore::in_memory();
    store.save_current_project(&project(1)).unwrap();
    store.user_preferences();
    assert!(store.storage_info().used > 0);

    store.clear_all_data().unwrap();
    for key in STORE_KEYS {
        assert!(store.storage().get(key).unwrap().is_none(), "{key} not cleared");
    }
    assert_eq!(store.storage_info().used, 0);
}

#[test]
fn test_clear_all_data_attempts_every_key() {
    let store = ProjectStore::new(FailingKeys::new(vec![CURRENT_PROJECT_KEY]));
    store.user_preferences();

    assert!(store.clear_all_data().is_err());
    assert!(store.storage().get(agroplot_projectdb::USER_PREFERENCES_KEY).unwrap().is_none());
}

#[test]
fn test_storage_info_counts_keys_and_values() {
    let store = ProjectStore::in_memory();
    store.save_current_project(&project(1)).unwrap();

    let expected: usize = STORE_KEYS
        .iter()
        .filter_map(|key| {
            store
                .storage()
                .get(key)
                .unwrap()
                .map(|value| key.len() + value.len())
        })
        .sum();

    let info = store.storage_info();
    assert_eq!(info.used, expected);
    assert_eq!(info.total, 5 * 1024 * 1024);
    assert_eq!(info.available, info.total - info.used);
    assert!(info.usage_percentage > 0.0 && info.usage_percentage < 1.0);
}
