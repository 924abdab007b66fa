//! Partition tickets into labeled board columns.
//!
//! Groups come back in first-seen order: a label's position is where the
//! first ticket carrying it appears in the input, not alphabetical.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::PriorityCatalog;
use crate::error::{Error, Result};
use crate::model::{Ticket, User};

/// Column label for tickets whose assignee is absent or unknown.
pub const UNASSIGNED: &str = "Unassigned";

/// Dimension used to split tickets into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingKey {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupingKey {
    pub const ALL: [GroupingKey; 3] = [GroupingKey::Status, GroupingKey::User, GroupingKey::Priority];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingKey::Status => "status",
            GroupingKey::User => "user",
            GroupingKey::Priority => "priority",
        }
    }
}

impl fmt::Display for GroupingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupingKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "status" => Ok(GroupingKey::Status),
            "user" => Ok(GroupingKey::User),
            "priority" => Ok(GroupingKey::Priority),
            other => Err(Error::InvalidArgument(format!(
                "unknown grouping '{other}' (expected status|user|priority)"
            ))),
        }
    }
}

/// One column's worth of tickets, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub label: String,
    pub tickets: Vec<&'a Ticket>,
}

/// Id -> user lookup built once per grouping pass.
pub struct UserIndex<'a> {
    by_id: HashMap<&'a str, &'a User>,
}

impl<'a> UserIndex<'a> {
    pub fn new(users: &'a [User]) -> Self {
        let mut by_id = HashMap::with_capacity(users.len());
        for user in users {
            // First occurrence wins, as a linear scan would.
            by_id.entry(user.id.as_str()).or_insert(user);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a User> {
        self.by_id.get(id).copied()
    }

    pub fn assignee(&self, ticket: &Ticket) -> Option<&'a User> {
        ticket.user_id.as_deref().and_then(|id| self.get(id))
    }
}

/// Column label for a single ticket under `key`.
pub fn label_for(ticket: &Ticket, users: &UserIndex<'_>, key: GroupingKey) -> Result<String> {
    match key {
        GroupingKey::Status => Ok(ticket.status.clone()),
        GroupingKey::User => Ok(users
            .assignee(ticket)
            .map(|user| user.name.clone())
            .unwrap_or_else(|| UNASSIGNED.to_string())),
        GroupingKey::Priority => PriorityCatalog::label_of(ticket.priority).map(str::to_string),
    }
}

/// Partition `tickets` by `key`.
///
/// Every ticket lands in exactly one group. An invalid priority fails the
/// whole pass when grouping by priority; unknown statuses form their own group.
pub fn group_tickets<'a>(
    tickets: &'a [Ticket],
    users: &[User],
    key: GroupingKey,
) -> Result<Vec<Group<'a>>> {
    let index = UserIndex::new(users);
    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut position_by_label: HashMap<String, usize> = HashMap::new();

    for ticket in tickets {
        let label = label_for(ticket, &index, key)?;
        match position_by_label.get(&label) {
            Some(&pos) => groups[pos].tickets.push(ticket),
            None => {
                position_by_label.insert(label.clone(), groups.len());
                groups.push(Group {
                    label,
                    tickets: vec![ticket],
                });
            }
        }
    }

    tracing::debug!(
        grouping = %key,
        tickets = tickets.len(),
        groups = groups.len(),
        "grouped tickets"
    );
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(group: &'a Group<'a>) -> Vec<&'a str> {
        group.tickets.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn status_groups_follow_first_seen_order() {
        let tickets = vec![
            Ticket::new("1", "a", "Todo", 1),
            Ticket::new("2", "b", "Done", 1),
            Ticket::new("3", "c", "Todo", 1),
        ];
        let groups = group_tickets(&tickets, &[], GroupingKey::Status).unwrap();
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Todo", "Done"]);
        assert_eq!(ids(&groups[0]), vec!["1", "3"]);
        assert_eq!(ids(&groups[1]), vec!["2"]);
    }

    #[test]
    fn unknown_status_forms_its_own_group() {
        let tickets = vec![
            Ticket::new("1", "a", "Blocked", 1),
            Ticket::new("2", "b", "Todo", 1),
        ];
        let groups = group_tickets(&tickets, &[], GroupingKey::Status).unwrap();
        assert_eq!(groups[0].label, "Blocked");
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn user_grouping_uses_names_and_unassigned() {
        let users = vec![User::new("usr-1", "Anoop Sharma"), User::new("usr-2", "Yogesh")];
        let tickets = vec![
            Ticket::new("1", "a", "Todo", 1).with_user("usr-2"),
            Ticket::new("2", "b", "Todo", 1).with_user("usr-9"),
            Ticket::new("3", "c", "Todo", 1),
            Ticket::new("4", "d", "Todo", 1).with_user("usr-1"),
        ];
        let groups = group_tickets(&tickets, &users, GroupingKey::User).unwrap();
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Yogesh", UNASSIGNED, "Anoop Sharma"]);
        assert_eq!(ids(&groups[1]), vec!["2", "3"]);
    }

    #[test]
    fn priority_grouping_uses_catalog_labels() {
        let tickets = vec![
            Ticket::new("1", "a", "Todo", 0),
            Ticket::new("2", "b", "Todo", 4),
            Ticket::new("3", "c", "Todo", 0),
        ];
        let groups = group_tickets(&tickets, &[], GroupingKey::Priority).unwrap();
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["No priority", "Urgent"]);
    }

    #[test]
    fn invalid_priority_fails_priority_grouping_only() {
        let tickets = vec![
            Ticket::new("1", "a", "Todo", 2),
            Ticket::new("2", "b", "Todo", 7),
        ];
        match group_tickets(&tickets, &[], GroupingKey::Priority) {
            Err(Error::InvalidPriority(7)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(group_tickets(&tickets, &[], GroupingKey::Status).is_ok());
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_tickets(&[], &[], GroupingKey::User).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn parses_keys() {
        assert_eq!("User".parse::<GroupingKey>().unwrap(), GroupingKey::User);
        assert!("owner".parse::<GroupingKey>().is_err());
        for key in GroupingKey::ALL {
            assert_eq!(key.as_str().parse::<GroupingKey>().unwrap(), key);
        }
    }
}
