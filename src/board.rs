//! Board view-model: columns of tickets ready for display.
//!
//! A board is rebuilt from scratch for every change to tickets, users or
//! preference. Nothing is cached between builds.

use serde::Serialize;

use crate::error::Result;
use crate::grouping::{group_tickets, GroupingKey};
use crate::model::{Ticket, User};
use crate::preference::{Preference, PreferenceStore};
use crate::sorting::{sort_tickets, SortingKey};

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column<'a> {
    pub label: String,
    pub tickets: Vec<&'a Ticket>,
    pub count: usize,
}

/// Columns in first-seen order, each sorted per the preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board<'a> {
    pub grouping: GroupingKey,
    pub sorting: SortingKey,
    pub columns: Vec<Column<'a>>,
}

impl<'a> Board<'a> {
    pub fn total_tickets(&self) -> usize {
        self.columns.iter().map(|column| column.count).sum()
    }

    pub fn column(&self, label: &str) -> Option<&Column<'a>> {
        self.columns.iter().find(|column| column.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.label.as_str()).collect()
    }
}

/// Group `tickets` by `pref.grouping` and order each column by `pref.sorting`.
///
/// Grouping errors (an invalid priority under priority grouping) are returned
/// as is; no partial board is produced.
pub fn build<'a>(tickets: &'a [Ticket], users: &[User], pref: &Preference) -> Result<Board<'a>> {
    let groups = group_tickets(tickets, users, pref.grouping)?;

    let columns: Vec<Column<'a>> = groups
        .into_iter()
        .map(|group| {
            let sorted = sort_tickets(&group.tickets, pref.sorting);
            Column {
                label: group.label,
                count: sorted.len(),
                tickets: sorted,
            }
        })
        .collect();

    tracing::debug!(
        grouping = %pref.grouping,
        sorting = %pref.sorting,
        columns = columns.len(),
        "built board"
    );

    Ok(Board {
        grouping: pref.grouping,
        sorting: pref.sorting,
        columns,
    })
}

/// [`build`] with the preference read from `store`.
pub fn build_with_store<'a>(
    tickets: &'a [Ticket],
    users: &[User],
    store: &dyn PreferenceStore,
) -> Result<Board<'a>> {
    let pref = store.get()?;
    build(tickets, users, &pref)
}
