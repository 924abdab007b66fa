//! Tickets and users as delivered by the data source.
//!
//! Both are immutable inputs to the board engines. Identifiers arrive either
//! as strings (`"CAM-1"`, `"usr-1"`) or as integers depending on the source;
//! they are normalized to strings on the way in.

use serde::{Deserialize, Deserializer, Serialize};

/// A work item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: i64,
    #[serde(default)]
    pub tag: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
}

impl Ticket {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: impl Into<String>,
        priority: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: status.into(),
            priority,
            tag: Vec::new(),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag.push(tag.into());
        self
    }

    /// First tag, which is the one shown on a card
    pub fn primary_tag(&self) -> Option<&str> {
        self.tag.first().map(String::as_str)
    }
}

/// A person tickets can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub available: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            photo_url: None,
            available: false,
        }
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

/// One complete response from the data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Snapshot {
    pub fn new(tickets: Vec<Ticket>, users: Vec<User>) -> Self {
        Self { tickets, users }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(value) => value,
            RawId::Int(value) => value.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}
