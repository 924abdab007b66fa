//! Where tickets and users come from.
//!
//! Each fetch returns a complete snapshot. Retrying is left to the caller.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::SourceConfig;
use crate::error::{Error, Result};
use crate::model::Snapshot;

/// Default board endpoint.
pub const DEFAULT_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// A provider of `{tickets, users}` snapshots.
pub trait TicketSource {
    fn fetch(&self) -> Result<Snapshot>;

    /// Human-readable origin, used in errors and warnings
    fn describe(&self) -> String;
}

/// Snapshot served over HTTP(S) as JSON.
pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("kanboard/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            url: url.into(),
            agent,
        }
    }

    fn fetch_error(&self, message: impl Into<String>) -> Error {
        Error::Fetch {
            origin: self.url.clone(),
            message: message.into(),
        }
    }
}

impl TicketSource for HttpSource {
    fn fetch(&self) -> Result<Snapshot> {
        tracing::debug!(url = %self.url, "fetching snapshot");
        let response = self
            .agent
            .get(&self.url)
            .set("Accept", "application/json")
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => self.fetch_error(format!("HTTP status {code}")),
                ureq::Error::Transport(transport) => self.fetch_error(transport.to_string()),
            })?;

        let snapshot: Snapshot = response
            .into_json()
            .map_err(|err| self.fetch_error(format!("invalid response body: {err}")))?;
        tracing::debug!(
            tickets = snapshot.tickets.len(),
            users = snapshot.users.len(),
            "fetched snapshot"
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Snapshot read from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TicketSource for FileSource {
    fn fetch(&self) -> Result<Snapshot> {
        let fetch_error = |message: String| Error::Fetch {
            origin: self.path.display().to_string(),
            message,
        };
        let content = std::fs::read_to_string(&self.path).map_err(|err| fetch_error(err.to_string()))?;
        serde_json::from_str(&content).map_err(|err| fetch_error(format!("invalid snapshot: {err}")))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source: a file wins over a URL.
pub fn from_config(config: &SourceConfig) -> Box<dyn TicketSource> {
    match &config.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(
            config.url.clone(),
            Duration::from_secs(config.timeout_secs),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_source_reads_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(
            &path,
            r#"{"tickets":[{"id":"CAM-1","title":"t","status":"Todo","priority":2,"tag":[]}],"users":[]}"#,
        )
        .unwrap();

        let snapshot = FileSource::new(&path).fetch().unwrap();
        assert_eq!(snapshot.tickets.len(), 1);
        assert!(snapshot.users.is_empty());
    }

    #[test]
    fn missing_file_is_a_fetch_error() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        match source.fetch() {
            Err(Error::Fetch { origin, .. }) => assert!(origin.ends_with("absent.json")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_file_is_a_fetch_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(FileSource::new(&path).fetch(), Err(Error::Fetch { .. })));
    }

    #[test]
    fn config_file_takes_precedence() {
        let config = SourceConfig {
            url: DEFAULT_URL.to_string(),
            file: Some(PathBuf::from("snapshot.json")),
            timeout_secs: 5,
        };
        assert_eq!(from_config(&config).describe(), "snapshot.json");

        let config = SourceConfig {
            file: None,
            ..config
        };
        assert_eq!(from_config(&config).describe(), DEFAULT_URL);
    }
}
