//! kanboard show command implementation
//!
//! Fetch, build and render the board. A failed fetch or build falls back to
//! the last board that built successfully.

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;

use crate::board::build;
use crate::cache::ViewCache;
use crate::cli::Context;
use crate::error::Result;
use crate::grouping::GroupingKey;
use crate::output::{emit_success, HumanOutput};
use crate::preference::{FilePreferenceStore, Preference, PreferenceStore};
use crate::render::format_board;
use crate::sorting::SortingKey;
use crate::source::{self, TicketSource};
use crate::view::BoardView;

pub struct ShowOptions {
    pub group_by: Option<GroupingKey>,
    pub order_by: Option<SortingKey>,
    pub file: Option<PathBuf>,
    pub url: Option<String>,
}

#[derive(Serialize)]
struct ShowReport<'a> {
    source: String,
    stale: bool,
    board: &'a BoardView,
}

pub fn run(ctx: &Context, options: ShowOptions) -> Result<()> {
    let storage = ctx.storage()?;
    let store = FilePreferenceStore::new(storage.clone());

    let saved = store.get()?;
    let pref = saved.with_overrides(options.group_by, options.order_by);
    if pref != saved {
        store.set(pref)?;
    }

    let mut source_config = ctx.config.source.clone();
    if let Some(file) = options.file {
        source_config.file = Some(file);
    }
    if let Some(url) = options.url {
        source_config.url = url;
        source_config.file = None;
    }
    let source = source::from_config(&source_config);
    let cache = ViewCache::new(storage);

    let mut human_warnings = Vec::new();
    let (view, stale) = match fresh_view(source.as_ref(), &pref) {
        Ok(view) => {
            if let Err(err) = cache.store(&view) {
                tracing::warn!(error = %err, "could not save board cache");
                human_warnings.push(format!("could not save board for offline use: {err}"));
            }
            (view, false)
        }
        Err(err) => {
            let cached = match cache.load() {
                Ok(cached) => cached,
                Err(cache_err) => {
                    tracing::warn!(error = %cache_err, "could not read board cache");
                    None
                }
            };
            let Some(view) = cached else {
                return Err(err);
            };
            tracing::warn!(error = %err, "showing last good board");
            human_warnings.push(format!(
                "{err}; showing last board built at {}",
                view.generated_at.to_rfc3339()
            ));
            (view, true)
        }
    };

    let mut human = HumanOutput::new(format_board(&view, ctx.config.display.column_width));
    for warning in human_warnings {
        human.push_warning(warning);
    }
    if stale && (view.grouping != pref.grouping || view.sorting != pref.sorting) {
        human.push_warning(format!(
            "saved board is grouped by {}, ordered by {}",
            view.grouping, view.sorting
        ));
    }

    let report = ShowReport {
        source: source.describe(),
        stale,
        board: &view,
    };
    emit_success(ctx.output, "show", &report, Some(&human))
}

fn fresh_view(source: &dyn TicketSource, pref: &Preference) -> Result<BoardView> {
    let snapshot = source.fetch()?;
    let board = build(&snapshot.tickets, &snapshot.users, pref)?;
    Ok(BoardView::from_board(&board, &snapshot.users, Utc::now()))
}
