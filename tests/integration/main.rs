use personalens::workspace::Workspace;
use std::env;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;

static WORKSPACE_ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Points the whole crate at a throwaway workspace via `PERSONALENS_HOME`.
/// The env var is process-global, so harness construction serializes tests.
pub struct IntegrationHarness {
    workspace_dir: TempDir,
    _guard: MutexGuard<'static, ()>,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let guard = WORKSPACE_ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let workspace_dir = TempDir::new().expect("failed to create temp workspace");
        env::set_var("PERSONALENS_HOME", workspace_dir.path());
        Self {
            workspace_dir,
            _guard: guard,
        }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace_dir.path()
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new().expect("failed to initialize workspace for tests")
    }
}

mod config_roundtrip;
mod curation_policy;
mod ingestion_fragments;
mod pipeline_mock;
mod profile_aggregation;
mod prompt_render;
pub mod support;
