//! Append-only structured log of pipeline runs.
//!
//! Every stage of a run appends one JSONL record to
//! `runlog/events.jsonl` in the workspace, so failed or partial runs can
//! be reconstructed after the fact.

use crate::workspace::Workspace;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

pub const EVENTS_FILE_NAME: &str = "events.jsonl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    DumpLoaded,
    ProfilesExtracted,
    CurationCompleted,
    PromptsWritten,
    ResponsesSaved,
    ProviderError,
    RunFailed,
}

/// One structured record in the run log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub event_id: Uuid,
    pub run_id: Uuid,
    pub at: DateTime<Utc>,
    pub kind: EventKind,
    pub payload: serde_json::Value,
}

pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn for_workspace(workspace: &Workspace) -> Self {
        Self {
            path: workspace.paths.runlog_dir.join(EVENTS_FILE_NAME),
        }
    }

    pub fn append(&self, event: &RunEvent) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open run log {:?}", self.path))?;
        let line = serde_json::to_string(event)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// Reads back every event, skipping unparseable lines.
    pub fn read_all(&self) -> Result<Vec<RunEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read run log {:?}", self.path))?;
        Ok(data
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect())
    }
}

/// Appends one event to the workspace run log and returns its id.
pub fn log_event(
    workspace: &Workspace,
    run_id: Uuid,
    kind: EventKind,
    payload: serde_json::Value,
) -> Result<Uuid> {
    let event = RunEvent {
        event_id: Uuid::new_v4(),
        run_id,
        at: Utc::now(),
        kind,
        payload,
    };
    RunLog::for_workspace(workspace).append(&event)?;
    Ok(event.event_id)
}
