#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use kanboard::model::{Snapshot, Ticket, User};
use tempfile::TempDir;

/// Tickets across three statuses, two users and one unassigned ticket.
pub fn sample_snapshot() -> Snapshot {
    Snapshot::new(
        vec![
            Ticket::new("CAM-1", "Update User Profile Page UI", "Todo", 4)
                .with_user("usr-1")
                .with_tag("Feature request"),
            Ticket::new("CAM-2", "Add Multi-Language Support", "In progress", 3)
                .with_user("usr-2")
                .with_tag("Feature request"),
            Ticket::new("CAM-3", "Optimize Database Queries", "In progress", 1)
                .with_user("usr-1")
                .with_tag("Feature request"),
            Ticket::new("CAM-4", "Implement Email Notification System", "Todo", 3)
                .with_tag("Feature request"),
            Ticket::new("CAM-5", "Enhance Search Functionality", "Backlog", 0)
                .with_user("usr-2")
                .with_tag("Feature request"),
        ],
        vec![
            User::new("usr-1", "Anoop sharma").available(false),
            User::new("usr-2", "Yogesh").available(true),
        ],
    )
}

/// Scratch area holding a config file, a state dir and snapshot files.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ws = Self { dir };
        ws.write("kanboard.toml", "[display]\ncolumn_width = 80\n");
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("kanboard.toml")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn write_snapshot(&self, name: &str, snapshot: &Snapshot) -> PathBuf {
        let json = serde_json::to_string_pretty(snapshot).expect("serialize snapshot");
        self.write(name, &json)
    }

    /// `kanboard` command isolated to this workspace
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("kanboard").expect("binary");
        cmd.env("KANBOARD_CONFIG", self.config_path())
            .env("KANBOARD_STATE_DIR", self.state_dir())
            .env_remove("RUST_LOG");
        cmd
    }
}
