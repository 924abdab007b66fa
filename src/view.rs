//! Presentation records derived from a [`Board`].
//!
//! A `BoardView` owns everything needed to draw the board (labels, icon keys,
//! avatars) so it can be rendered, emitted as JSON, or cached on disk and
//! shown again later without the original tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Column};
use crate::catalog::{PriorityCatalog, StatusCatalog};
use crate::grouping::{GroupingKey, UserIndex};
use crate::identity::Avatar;
use crate::model::{Ticket, User};
use crate::sorting::SortingKey;

/// Decoration drawn next to a column label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderBadge {
    Status {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    Priority {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    User {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        avatar: Option<Avatar>,
    },
}

/// One ticket card. Fields that would repeat the column label are left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Avatar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    pub label: String,
    pub count: usize,
    pub badge: HeaderBadge,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub grouping: GroupingKey,
    pub sorting: SortingKey,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    pub fn from_board(board: &Board<'_>, users: &[User], generated_at: DateTime<Utc>) -> Self {
        let index = UserIndex::new(users);
        let columns = board
            .columns
            .iter()
            .map(|column| ColumnView {
                label: column.label.clone(),
                count: column.count,
                badge: header_badge(column, board.grouping, users),
                cards: column
                    .tickets
                    .iter()
                    .map(|ticket| card_view(ticket, board.grouping, &index))
                    .collect(),
            })
            .collect();

        Self {
            grouping: board.grouping,
            sorting: board.sorting,
            generated_at,
            total: board.total_tickets(),
            columns,
        }
    }
}

fn header_badge(column: &Column<'_>, grouping: GroupingKey, users: &[User]) -> HeaderBadge {
    match grouping {
        GroupingKey::Status => HeaderBadge::Status {
            icon: StatusCatalog::icon_for(&column.label).map(str::to_string),
        },
        GroupingKey::Priority => {
            let level = PriorityCatalog::value_of(&column.label).ok();
            HeaderBadge::Priority {
                level,
                icon: level
                    .and_then(|value| PriorityCatalog::icon_of(value).ok())
                    .map(str::to_string),
            }
        }
        // Columns are labeled by name, so the header looks the user up by name.
        GroupingKey::User => HeaderBadge::User {
            avatar: users
                .iter()
                .find(|user| user.name == column.label)
                .and_then(avatar_for),
        },
    }
}

fn card_view(ticket: &Ticket, grouping: GroupingKey, users: &UserIndex<'_>) -> CardView {
    let status_icon = match grouping {
        GroupingKey::Status => None,
        _ => StatusCatalog::icon_for(&ticket.status).map(str::to_string),
    };
    let priority_icon = match grouping {
        GroupingKey::Priority => None,
        _ => PriorityCatalog::icon_of(ticket.priority)
            .ok()
            .map(str::to_string),
    };
    let assignee = match grouping {
        GroupingKey::User => None,
        _ => users.assignee(ticket).and_then(avatar_for),
    };

    CardView {
        id: ticket.id.clone(),
        title: ticket.title.clone(),
        status: ticket.status.clone(),
        priority: ticket.priority,
        tag: ticket.primary_tag().map(str::to_string),
        status_icon,
        priority_icon,
        assignee,
    }
}

/// Avatars require a non-blank name; nameless users get none.
fn avatar_for(user: &User) -> Option<Avatar> {
    if user.name.trim().is_empty() {
        tracing::warn!(user_id = %user.id, "user has no name, skipping avatar");
        return None;
    }
    Avatar::for_user(user).ok()
}
