//! kanboard prefs command implementation

use std::path::PathBuf;

use serde::Serialize;

use crate::cache::ViewCache;
use crate::cli::Context;
use crate::error::{Error, Result};
use crate::grouping::GroupingKey;
use crate::output::{emit_success, HumanOutput};
use crate::preference::{FilePreferenceStore, Preference, PreferenceStore};
use crate::sorting::SortingKey;

pub struct SetOptions {
    pub grouping: Option<GroupingKey>,
    pub sorting: Option<SortingKey>,
}

#[derive(Serialize)]
struct PrefsReport {
    grouping: GroupingKey,
    sorting: SortingKey,
    path: PathBuf,
}

pub fn run_get(ctx: &Context) -> Result<()> {
    let store = FilePreferenceStore::new(ctx.storage()?);
    let pref = store.get()?;
    emit(ctx, "prefs get", "kanboard prefs", &store, pref)
}

pub fn run_set(ctx: &Context, options: SetOptions) -> Result<()> {
    if options.grouping.is_none() && options.sorting.is_none() {
        return Err(Error::InvalidArgument(
            "nothing to set: pass --grouping and/or --sorting".to_string(),
        ));
    }

    let store = FilePreferenceStore::new(ctx.storage()?);
    let pref = store.get()?.with_overrides(options.grouping, options.sorting);
    store.set(pref)?;
    emit(ctx, "prefs set", "kanboard prefs: saved", &store, pref)
}

pub fn run_reset(ctx: &Context, clear_cache: bool) -> Result<()> {
    let storage = ctx.storage()?;
    let store = FilePreferenceStore::new(storage.clone());
    store.reset()?;

    if clear_cache {
        let removed = ViewCache::new(storage).clear()?;
        tracing::debug!(removed, "cleared board cache");
        let header = if removed {
            "kanboard prefs: reset to defaults, saved board deleted"
        } else {
            "kanboard prefs: reset to defaults, no saved board"
        };
        return emit(ctx, "prefs reset", header, &store, Preference::default());
    }

    emit(ctx, "prefs reset", "kanboard prefs: reset to defaults", &store, Preference::default())
}

fn emit(
    ctx: &Context,
    command: &str,
    header: &str,
    store: &FilePreferenceStore,
    pref: Preference,
) -> Result<()> {
    let report = PrefsReport {
        grouping: pref.grouping,
        sorting: pref.sorting,
        path: store.path().to_path_buf(),
    };

    let mut human = HumanOutput::new(header);
    human.push_summary("grouping", pref.grouping.as_str());
    human.push_summary("sorting", pref.sorting.as_str());
    human.push_summary("file", store.path().display().to_string());

    emit_success(ctx.output, command, &report, Some(&human))
}
