pub mod curation;
pub mod ingestion;
pub mod models;
pub mod pipeline;
pub mod profiles;
pub mod prompts;
pub mod runlog;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use curation::{curate, CuratedSet};
pub use pipeline::{run_pipeline, PipelineOptions, PipelineReport};
pub use profiles::{extract_profiles, Profile};
pub use workspace::{AppConfig, Workspace};
