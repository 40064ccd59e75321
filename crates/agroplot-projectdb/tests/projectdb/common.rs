use agroplot_core::{CanvasSize, DrawingElement, ElementType, Plant, ProjectData};
use agroplot_projectdb::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};

const BASE_TIMESTAMP: i64 = 1_760_000_000_000;

/// A named project with one plant and one shape, created at a distinct time
pub fn project(n: i64) -> ProjectData {
    let mut project = ProjectData::new(CanvasSize::new(50.0, 30.0));
    project.timestamp = BASE_TIMESTAMP + n;
    project.set_name(format!("Plot {n}"));
    project.elements = vec![
        DrawingElement::plant(
            1,
            5.0,
            5.0,
            Plant::new("kale", "Kale", "40x60cm", "vegetable", "#2E7D32"),
        ),
        DrawingElement::new(2, ElementType::Rectangle, 10.0, 10.0).with_size(2.0, 1.0),
    ];
    project
}

/// Memory storage whose writes to the listed keys fail
pub struct FailingKeys {
    inner: MemoryStorage,
    failing: Vec<&'static str>,
}

impl FailingKeys {
    pub fn new(failing: Vec<&'static str>) -> Self {
        Self {
            inner: MemoryStorage::new(),
            failing,
        }
    }
}

impl KeyValueStorage for FailingKeys {
    fn name(&self) -> &str {
        "FailingKeys"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.failing.contains(&key) {
            return Err(StorageError::Unavailable(format!("{key} is read-only")));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if self.failing.contains(&key) {
            return Err(StorageError::Unavailable(format!("{key} is read-only")));
        }
        self.inner.remove(key)
    }
}
