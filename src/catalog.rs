//! Static lookup tables for priorities and statuses.
//!
//! The presentation layer reads these to pick labels and icons; the grouping
//! engine uses the priority table to label priority columns.

use serde::Serialize;

use crate::error::{Error, Result};

/// One row of the priority table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityLevel {
    pub value: i64,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Highest level first.
const PRIORITY_LEVELS: [PriorityLevel; 5] = [
    PriorityLevel {
        value: 4,
        label: "Urgent",
        icon: "urgent-priority-grey",
    },
    PriorityLevel {
        value: 3,
        label: "High",
        icon: "high-priority",
    },
    PriorityLevel {
        value: 2,
        label: "Medium",
        icon: "medium-priority",
    },
    PriorityLevel {
        value: 1,
        label: "Low",
        icon: "low-priority",
    },
    PriorityLevel {
        value: 0,
        label: "No priority",
        icon: "no-priority",
    },
];

/// Bidirectional mapping between priority values 0..=4 and their labels.
pub struct PriorityCatalog;

impl PriorityCatalog {
    /// All levels, highest first
    pub fn levels() -> &'static [PriorityLevel] {
        &PRIORITY_LEVELS
    }

    pub fn level(priority: i64) -> Result<&'static PriorityLevel> {
        PRIORITY_LEVELS
            .iter()
            .find(|level| level.value == priority)
            .ok_or(Error::InvalidPriority(priority))
    }

    pub fn label_of(priority: i64) -> Result<&'static str> {
        Self::level(priority).map(|level| level.label)
    }

    pub fn value_of(label: &str) -> Result<i64> {
        PRIORITY_LEVELS
            .iter()
            .find(|level| level.label == label)
            .map(|level| level.value)
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }

    pub fn icon_of(priority: i64) -> Result<&'static str> {
        Self::level(priority).map(|level| level.icon)
    }
}

/// One of the statuses the board knows how to decorate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub label: &'static str,
    pub icon: &'static str,
}

/// Workflow order.
const STATUSES: [StatusEntry; 5] = [
    StatusEntry {
        label: "Backlog",
        icon: "backlog",
    },
    StatusEntry {
        label: "Todo",
        icon: "to-do",
    },
    StatusEntry {
        label: "In progress",
        icon: "in-progress",
    },
    StatusEntry {
        label: "Done",
        icon: "done",
    },
    StatusEntry {
        label: "Canceled",
        icon: "cancelled",
    },
];

/// The fixed set of known ticket statuses.
///
/// Statuses outside this set are still valid board columns; they simply have
/// no icon.
pub struct StatusCatalog;

impl StatusCatalog {
    pub fn entries() -> &'static [StatusEntry] {
        &STATUSES
    }

    pub fn is_known(status: &str) -> bool {
        STATUSES.iter().any(|entry| entry.label == status)
    }

    pub fn icon_for(status: &str) -> Option<&'static str> {
        STATUSES
            .iter()
            .find(|entry| entry.label == status)
            .map(|entry| entry.icon)
    }
}
