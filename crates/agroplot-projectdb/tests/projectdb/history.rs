use agroplot_core::{CanvasSize, ProjectData};
use agroplot_projectdb::{ProjectStore, StoreError, PROJECT_HISTORY_KEY};

use super::common::project;

fn names(store: &ProjectStore) -> Vec<String> {
    store.project_history().into_iter().map(|e| e.name).collect()
}

#[test]
fn test_history_entry_summarizes_save() {
    let store = ProjectStore::in_memory();
    let saved = store.save_current_project(&project(7)).unwrap();

    let history = store.project_history();
    assert_eq!(history.len(), 1);
    let entry = &history[0];
    assert!(entry.id.starts_with(&format!("project-{}-", saved.timestamp)));
    assert_eq!(entry.name, "Plot 7");
    assert_eq!(entry.timestamp, saved.timestamp);
    assert_eq!(entry.last_modified, saved.last_modified);
    assert_eq!(entry.canvas_size, saved.canvas_size);
    assert_eq!(entry.elements_count, 2);
}

#[test]
fn test_history_is_bounded_newest_first() {
    let store = ProjectStore::in_memory();
    for n in 1..=51 {
        store.save_current_project(&project(n)).unwrap();
    }

    let history = store.project_history();
    assert_eq!(history.len(), 50);
    assert_eq!(history[0].name, "Plot 51");
    assert_eq!(history[49].name, "Plot 2");
    assert!(history.iter().all(|e| e.name != "Plot 1"));
}

#[test]
fn test_every_save_adds_an_entry() {
    let store = ProjectStore::in_memory();
    store.save_current_project(&project(1)).unwrap();
    store.save_current_project(&project(2)).unwrap();
    store.save_current_project(&project(1)).unwrap();

    assert_eq!(names(&store), vec!["Plot 1", "Plot 2", "Plot 1"]);

    let history = store.project_history();
    assert_ne!(history[0].id, history[2].id);
}

#[test]
fn test_projects_created_in_same_millisecond_keep_separate_entries() {
    let store = ProjectStore::in_memory();
    let mut garden = ProjectData::new(CanvasSize::new(20.0, 20.0));
    garden.timestamp = 1_760_000_000_000;
    garden.set_name("Herb garden");
    let mut bed = garden.clone();
    bed.set_name("Vegetable bed");

    store.save_current_project(&garden).unwrap();
    store.save_current_project(&bed).unwrap();

    assert_eq!(names(&store), vec!["Vegetable bed", "Herb garden"]);
}

#[test]
fn test_delete_from_history() {
    let store = ProjectStore::in_memory();
    store.save_current_project(&project(1)).unwrap();
    store.save_current_project(&project(2)).unwrap();

    let id = store.project_history()[1].id.clone();
    store.delete_project_from_history(&id).unwrap();
    assert_eq!(names(&store), vec!["Plot 2"]);

    assert!(matches!(
        store.delete_project_from_history(&id),
        Err(StoreError::HistoryEntryNotFound(missing)) if missing == id
    ));
}

#[test]
fn test_delete_removes_exactly_one_save() {
    let store = ProjectStore::in_memory();
    for _ in 0..3 {
        store.save_current_project(&project(1)).unwrap();
    }

    let id = store.project_history()[1].id.clone();
    store.delete_project_from_history(&id).unwrap();

    let history = store.project_history();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|e| e.id != id));
}

#[test]
fn test_load_from_history_only_recalls_current_project() {
    let store = ProjectStore::in_memory();
    store.save_current_project(&project(1)).unwrap();
    let current = store.save_current_project(&project(2)).unwrap();

    let history = store.project_history();
    assert_eq!(
        store.load_project_from_history(&history[0].id),
        Some(current)
    );
    assert!(store.load_project_from_history(&history[1].id).is_none());
    assert!(store.load_project_from_history("project-0").is_none());
}

#[test]
fn test_load_from_history_ignores_older_saves_of_current_project() {
    let store = ProjectStore::in_memory();
    store.save_current_project(&project(1)).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(2));
    store.save_current_project(&project(1)).unwrap();

    let history = store.project_history();
    assert!(store.load_project_from_history(&history[0].id).is_some());
    assert!(store.load_project_from_history(&history[1].id).is_none());
}

#[test]
fn test_malformed_history_reads_as_empty() {
    let store = ProjectStore::in_memory();
    store.storage().set(PROJECT_HISTORY_KEY, "[{\"id\":").unwrap();
    assert!(store.project_history().is_empty());

    store.save_current_project(&project(1)).unwrap();
    assert_eq!(store.project_history().len(), 1);
}
