//! kanboard - Kanban Board Library
//!
//! This library turns a flat snapshot of tickets and users into an ordered
//! board of columns, the way a kanban front end would display it.
//!
//! # Core Concepts
//!
//! - **Grouping**: tickets are bucketed into columns by status, assignee or priority
//! - **Ordering**: each column is ordered by priority (highest first) or title
//! - **Preference**: the chosen grouping and ordering survive restarts
//! - **Identity**: users get deterministic initials and a palette color
//!
//! # Module Organization
//!
//! - `model`: tickets, users and the fetched snapshot
//! - `catalog`: priority levels and status labels with their icons
//! - `identity`: avatar initials and colors
//! - `grouping`: bucketing tickets into labeled groups
//! - `sorting`: ordering tickets within a group
//! - `preference`: persisted grouping/ordering choice
//! - `board`: composing grouping, ordering and preference into columns
//! - `view`: presentation records (badges, card decorations)
//! - `render`: plain-text board rendering
//! - `cache`: last successfully built board
//! - `source`: fetching snapshots over HTTP or from a file
//! - `config`: configuration loading from `kanboard.toml`
//! - `storage`: state directory layout
//! - `lock`: file locking and atomic writes
//! - `output`: human and JSON command output
//! - `error`: error types and result aliases
//! - `cli`: command-line interface using clap

pub mod board;
pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod grouping;
pub mod identity;
pub mod lock;
pub mod model;
pub mod output;
pub mod preference;
pub mod render;
pub mod sorting;
pub mod source;
pub mod storage;
pub mod view;

pub use error::{Error, Result};
