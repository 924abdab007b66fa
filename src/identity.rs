//! Visual identity for users: initials and a stable avatar color.
//!
//! Both are pure functions of the user's name, so every viewer of the same
//! board sees the same avatar for the same person across reloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::model::User;

/// Fixed avatar palette. Order matters: the color index is derived from it.
pub const PALETTE: [Color; 10] = [
    Color("#E84A5F"),
    Color("#FF847C"),
    Color("#FECEA8"),
    Color("#2A363B"),
    Color("#99B898"),
    Color("#547980"),
    Color("#45B7D1"),
    Color("#FF8C42"),
    Color("#844685"),
    Color("#4CA1AF"),
];

/// A hex color from [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub fn hex(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PALETTE
            .iter()
            .find(|color| color.0.eq_ignore_ascii_case(&raw))
            .copied()
            .ok_or_else(|| serde::de::Error::custom(format!("color {raw} is not in the palette")))
    }
}

/// Initials from the first character of each space-separated word, upper-cased.
///
/// The name must contain at least one non-whitespace word.
pub fn initials_of(name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }

    let initials: String = name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect();
    Ok(initials.to_uppercase())
}

/// Palette color chosen by the sum of the name's code points.
pub fn color_of(name: &str) -> Color {
    let sum: u64 = name.chars().map(|ch| u64::from(u32::from(ch))).sum();
    // PALETTE.len() is 10, so the index always fits.
    PALETTE[(sum % PALETTE.len() as u64) as usize]
}

/// Everything the presentation layer needs to draw a user's avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub user_id: String,
    pub name: String,
    pub initials: String,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub available: bool,
}

impl Avatar {
    pub fn for_user(user: &User) -> Result<Self> {
        Ok(Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            initials: initials_of(&user.name)?,
            color: color_of(&user.name),
            photo_url: user.photo_url.clone(),
            available: user.available,
        })
    }
}
