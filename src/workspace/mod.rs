mod config;

pub use config::{
    config_dir, config_file_path, ensure_workspace_structure, load_or_default, save,
    workspace_root, AppConfig, CurationSettings, IngestionSettings, ModelSettings, WorkspacePaths,
    CONFIG_FILE_NAME,
};

use anyhow::Result;

/// Owns the resolved workspace paths and the loaded configuration.
///
/// Every pipeline stage takes a `&Workspace` so tests can point the whole
/// crate at a temp directory through `PERSONALENS_HOME`.
pub struct Workspace {
    pub config: AppConfig,
    pub paths: WorkspacePaths,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        let paths = ensure_workspace_structure()?;
        let config = load_or_default()?;
        Ok(Self { config, paths })
    }
}
