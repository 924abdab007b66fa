//! The user's grouping and ordering selection, persisted across restarts.
//!
//! The persisted record is two string keys, `grouping` and `sorting`. A
//! missing record, a missing key, or a value this version does not recognise
//! all read back as the default for that key.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grouping::GroupingKey;
use crate::sorting::SortingKey;
use crate::storage::Storage;

/// Current board selection. Defaults to grouping by status, ordering by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preference {
    pub grouping: GroupingKey,
    pub sorting: SortingKey,
}

impl Preference {
    pub fn new(grouping: GroupingKey, sorting: SortingKey) -> Self {
        Self { grouping, sorting }
    }

    /// Copy with either key replaced when given
    pub fn with_overrides(self, grouping: Option<GroupingKey>, sorting: Option<SortingKey>) -> Self {
        Self {
            grouping: grouping.unwrap_or(self.grouping),
            sorting: sorting.unwrap_or(self.sorting),
        }
    }
}

/// Backing store for [`Preference`].
pub trait PreferenceStore {
    /// Persisted preference, or defaults when nothing is persisted
    fn get(&self) -> Result<Preference>;

    /// Persist `pref`; visible to every later `get`
    fn set(&self, pref: Preference) -> Result<()>;

    /// Forget the persisted preference
    fn reset(&self) -> Result<()>;
}

/// In-process store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: RefCell<Option<Preference>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(pref: Preference) -> Self {
        Self {
            value: RefCell::new(Some(pref)),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self) -> Result<Preference> {
        Ok(self.value.borrow().unwrap_or_default())
    }

    fn set(&self, pref: Preference) -> Result<()> {
        *self.value.borrow_mut() = Some(pref);
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        *self.value.borrow_mut() = None;
        Ok(())
    }
}

/// On-disk shape. Raw strings so unknown values degrade per key.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedPreference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grouping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sorting: Option<String>,
}

/// TOML-file store under the kanboard state directory.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    storage: Storage,
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(storage: Storage) -> Self {
        let path = storage.preferences_file();
        Self { storage, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Preference {
        let persisted: PersistedPreference = match toml::from_str(content) {
            Ok(persisted) => persisted,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "unreadable preferences, using defaults");
                return Preference::default();
            }
        };

        Preference {
            grouping: parse_or_default(persisted.grouping.as_deref(), "grouping", &self.path),
            sorting: parse_or_default(persisted.sorting.as_deref(), "sorting", &self.path),
        }
    }
}

fn parse_or_default<T>(raw: Option<&str>, key: &str, path: &Path) -> T
where
    T: std::str::FromStr + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(path = %path.display(), key, value = raw, "unrecognised preference value, using default");
            T::default()
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self) -> Result<Preference> {
        let pref = match self.storage.read_text(&self.path)? {
            Some(content) => self.parse(&content),
            None => Preference::default(),
        };
        tracing::debug!(grouping = %pref.grouping, sorting = %pref.sorting, "loaded preference");
        Ok(pref)
    }

    fn set(&self, pref: Preference) -> Result<()> {
        let persisted = PersistedPreference {
            grouping: Some(pref.grouping.as_str().to_string()),
            sorting: Some(pref.sorting.as_str().to_string()),
        };
        let content = toml::to_string(&persisted)?;
        self.storage.write_text(&self.path, &content)?;
        tracing::debug!(grouping = %pref.grouping, sorting = %pref.sorting, "saved preference");
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        self.storage.remove(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_store(dir: &TempDir) -> FilePreferenceStore {
        FilePreferenceStore::new(Storage::new(dir.path()))
    }

    #[test]
    fn defaults_are_status_and_priority() {
        let pref = Preference::default();
        assert_eq!(pref.grouping, GroupingKey::Status);
        assert_eq!(pref.sorting, SortingKey::Priority);
    }

    #[test]
    fn memory_store_roundtrip_and_reset() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get().unwrap(), Preference::default());

        let pref = Preference::new(GroupingKey::User, SortingKey::Title);
        store.set(pref).unwrap();
        assert_eq!(store.get().unwrap(), pref);

        store.reset().unwrap();
        assert_eq!(store.get().unwrap(), Preference::default());
    }

    #[test]
    fn file_store_survives_new_instance() {
        let dir = TempDir::new().unwrap();
        let pref = Preference::new(GroupingKey::User, SortingKey::Title);
        file_store(&dir).set(pref).unwrap();

        assert_eq!(file_store(&dir).get().unwrap(), pref);
    }

    #[test]
    fn file_store_writes_string_keys() {
        let dir = TempDir::new().unwrap();
        let store = file_store(&dir);
        store
            .set(Preference::new(GroupingKey::Priority, SortingKey::Title))
            .unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("grouping = \"priority\""));
        assert!(written.contains("sorting = \"title\""));
    }

    #[test]
    fn missing_key_falls_back_per_key() {
        let dir = TempDir::new().unwrap();
        let store = file_store(&dir);
        fs::write(store.path(), "sorting = \"title\"\n").unwrap();

        let pref = store.get().unwrap();
        assert_eq!(pref.grouping, GroupingKey::Status);
        assert_eq!(pref.sorting, SortingKey::Title);
    }

    #[test]
    fn unknown_value_and_garbage_fall_back() {
        let dir = TempDir::new().unwrap();
        let store = file_store(&dir);

        fs::write(store.path(), "grouping = \"owner\"\nsorting = \"title\"\n").unwrap();
        let pref = store.get().unwrap();
        assert_eq!(pref.grouping, GroupingKey::Status);
        assert_eq!(pref.sorting, SortingKey::Title);

        fs::write(store.path(), "this is [not toml").unwrap();
        assert_eq!(store.get().unwrap(), Preference::default());
    }

    #[test]
    fn last_write_wins() {
        let dir = TempDir::new().unwrap();
        let first = file_store(&dir);
        let second = file_store(&dir);

        first
            .set(Preference::new(GroupingKey::User, SortingKey::Priority))
            .unwrap();
        second
            .set(Preference::new(GroupingKey::Priority, SortingKey::Title))
            .unwrap();

        assert_eq!(
            first.get().unwrap(),
            Preference::new(GroupingKey::Priority, SortingKey::Title)
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let dir = TempDir::new().unwrap();
        let store = file_store(&dir);
        store
            .set(Preference::new(GroupingKey::User, SortingKey::Title))
            .unwrap();
        store.reset().unwrap();
        assert_eq!(store.get().unwrap(), Preference::default());
    }
}
