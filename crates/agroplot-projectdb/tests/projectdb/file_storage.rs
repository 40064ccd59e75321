use agroplot_projectdb::{
    FileStorage, KeyValueStorage, ProjectStore, StorageError, CURRENT_PROJECT_KEY,
};
use tempfile::TempDir;

use super::common::project;

#[test]
fn test_set_get_remove() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());

    assert_eq!(storage.get("last-save").unwrap(), None);
    storage.set("last-save", "1760000000000").unwrap();
    assert_eq!(
        storage.get("last-save").unwrap().as_deref(),
        Some("1760000000000")
    );
    assert!(dir.path().join("last-save.json").exists());
    assert!(!dir.path().join("last-save.json.tmp").exists());

    storage.remove("last-save").unwrap();
    storage.remove("last-save").unwrap();
    assert_eq!(storage.get("last-save").unwrap(), None);
}

#[test]
fn test_values_survive_reopening() {
    let dir = TempDir::new().unwrap();
    let saved = ProjectStore::new(FileStorage::new(dir.path()))
        .save_current_project(&project(1))
        .unwrap();

    let reopened = ProjectStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.current_project(), Some(saved));
    assert_eq!(reopened.project_history().len(), 1);
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("absent"));

    let err = storage.set("current-project", "{}").unwrap_err();
    assert!(matches!(err, StorageError::IoError(_)));
}

#[test]
fn test_failed_write_keeps_previous_value() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.set(CURRENT_PROJECT_KEY, "first").unwrap();

    // Occupy the temporary path so the next write cannot create it
    std::fs::create_dir(dir.path().join("current-project.json.tmp")).unwrap();

    assert!(storage.set(CURRENT_PROJECT_KEY, "second").is_err());
    assert_eq!(
        storage.get(CURRENT_PROJECT_KEY).unwrap().as_deref(),
        Some("first")
    );
}

#[test]
fn test_rejects_unsafe_keys() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());

    for key in ["", "../outside", "a/b", "with space"] {
        assert!(
            matches!(storage.set(key, "x"), Err(StorageError::Unavailable(_))),
            "{key:?} accepted"
        );
    }
}
