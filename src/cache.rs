//! Last successfully built board view.
//!
//! When a fetch or build fails, the CLI shows this saved view (with a
//! warning) instead of a broken or partial board.

use crate::error::Result;
use crate::storage::Storage;
use crate::view::BoardView;

pub struct ViewCache {
    storage: Storage,
}

impl ViewCache {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Result<Option<BoardView>> {
        let path = self.storage.last_board_file();
        match self.storage.read_json(&path) {
            Ok(view) => Ok(view),
            // A damaged cache is the same as no cache.
            Err(crate::error::Error::Json(err)) => {
                tracing::warn!(path = %path.display(), error = %err, "discarding unreadable board cache");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub fn store(&self, view: &BoardView) -> Result<()> {
        self.storage.write_json(&self.storage.last_board_file(), view)
    }

    pub fn clear(&self) -> Result<bool> {
        self.storage.remove(&self.storage.last_board_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::GroupingKey;
    use crate::sorting::SortingKey;
    use chrono::Utc;
    use std::fs;
    use tempfile::TempDir;

    fn empty_view() -> BoardView {
        BoardView {
            grouping: GroupingKey::Priority,
            sorting: SortingKey::Title,
            generated_at: Utc::now(),
            total: 0,
            columns: Vec::new(),
        }
    }

    #[test]
    fn store_then_load() {
        let dir = TempDir::new().unwrap();
        let cache = ViewCache::new(Storage::new(dir.path()));
        assert!(cache.load().unwrap().is_none());

        let view = empty_view();
        cache.store(&view).unwrap();
        assert_eq!(cache.load().unwrap(), Some(view));
    }

    #[test]
    fn corrupt_cache_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        fs::write(storage.last_board_file(), "{ not json").unwrap();

        let cache = ViewCache::new(storage);
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn clear_removes_saved_view() {
        let dir = TempDir::new().unwrap();
        let cache = ViewCache::new(Storage::new(dir.path()));
        cache.store(&empty_view()).unwrap();
        assert!(cache.clear().unwrap());
        assert!(cache.load().unwrap().is_none());
    }
}
