use agroplot_core::CanvasSize;
use agroplot_projectdb::{ProjectStore, StoreError, USER_PREFERENCES_KEY};
use agroplot_settings::{PreferencesUpdate, Theme, UserPreferences};

#[test]
fn test_first_read_creates_defaults() {
    let store = ProjectStore::in_memory();
    assert!(store.storage().get(USER_PREFERENCES_KEY).unwrap().is_none());

    let prefs = store.user_preferences();
    assert_eq!(prefs, UserPreferences::default());
    assert!(store.storage().get(USER_PREFERENCES_KEY).unwrap().is_some());
}

#[test]
fn test_reads_are_idempotent() {
    let store = ProjectStore::in_memory();
    assert_eq!(store.user_preferences(), store.user_preferences());

    store
        .save_user_preferences(PreferencesUpdate {
            theme: Some(Theme::Dark),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.user_preferences(), store.user_preferences());
}

#[test]
fn test_partial_update_merges() {
    let store = ProjectStore::in_memory();
    store
        .save_user_preferences(PreferencesUpdate {
            language: Some("es".to_string()),
            ..Default::default()
        })
        .unwrap();

    let merged = store
        .save_user_preferences(PreferencesUpdate {
            auto_save_interval: Some(1),
            default_canvas_size: Some(CanvasSize::new(100.0, 60.0)),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(merged.language, "es");
    assert_eq!(merged.auto_save_interval, 1);
    assert_eq!(merged.default_canvas_size, CanvasSize::new(100.0, 60.0));
    assert_eq!(store.user_preferences(), merged);
}

#[test]
fn test_invalid_update_is_not_stored() {
    let store = ProjectStore::in_memory();
    let before = store.user_preferences();

    let err = store
        .save_user_preferences(PreferencesUpdate {
            auto_save_interval: Some(0),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Settings(_)));
    assert_eq!(store.user_preferences(), before);
}

#[test]
fn test_stored_preferences_missing_keys_use_defaults() {
    let store = ProjectStore::in_memory();
    store
        .storage()
        .set(USER_PREFERENCES_KEY, r#"{"theme":"system","enableSounds":true}"#)
        .unwrap();

    let prefs = store.user_preferences();
    assert_eq!(prefs.theme, Theme::System);
    assert!(prefs.enable_sounds);
    assert_eq!(prefs.auto_save_interval, 5);
}

#[test]
fn test_malformed_preferences_fall_back_to_defaults() {
    let store = ProjectStore::in_memory();
    store.storage().set(USER_PREFERENCES_KEY, "][").unwrap();
    assert_eq!(store.user_preferences(), UserPreferences::default());
}
