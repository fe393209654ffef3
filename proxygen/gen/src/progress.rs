//! Progress reporting.
//!
//! The pipeline reports what it is doing through an injected [`ProgressSink`]
//! instead of logging from deep inside the core, so callers decide whether
//! progress goes to `tracing`, nowhere, or into a test recorder.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::output::FileKind;

/// Something the pipeline did that a user may want to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The schema document is being requested.
    FetchingSchema { url: String },
    /// The requested module was found.
    ModuleSelected { module: String, controllers: usize },
    /// Emission for a controller started.
    ControllerStarted { controller: String },
    /// A file was rendered and staged in memory.
    FileGenerated {
        controller: String,
        kind: FileKind,
        path: PathBuf,
    },
    /// A staged file replaced one staged earlier for the same path.
    PathCollision {
        path: PathBuf,
        previous: String,
        controller: String,
    },
    /// A staged file was persisted.
    FileWritten { path: PathBuf },
    /// The run finished.
    Completed { module: String, files: usize },
}

/// Receives [`ProgressEvent`]s from the pipeline.
pub trait ProgressSink: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// Forwards progress to `tracing`; collisions are logged at `warn`, the rest at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingSchema { url } => {
                info!(%url, "Downloading API definition");
            }
            ProgressEvent::ModuleSelected {
                module,
                controllers,
            } => {
                info!(%module, controllers, "Generating proxies for module");
            }
            ProgressEvent::ControllerStarted { controller } => {
                info!(%controller, "Generating controller");
            }
            ProgressEvent::FileGenerated {
                controller,
                kind,
                path,
            } => {
                info!(%controller, %kind, path = %path.display(), "Generated script");
            }
            ProgressEvent::PathCollision {
                path,
                previous,
                controller,
            } => {
                warn!(
                    path = %path.display(),
                    %previous,
                    %controller,
                    "Output path already generated by another controller; overwriting"
                );
            }
            ProgressEvent::FileWritten { path } => {
                info!(path = %path.display(), "Wrote file");
            }
            ProgressEvent::Completed { module, files } => {
                info!(%module, files, "Generation completed");
            }
        }
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn report(&self, _event: ProgressEvent) {}
}
