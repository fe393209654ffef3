//! Staged output and file writing.
//!
//! Generation never touches the filesystem directly. Rendered files are
//! staged in a [`GeneratedOutput`] and only handed to an [`OutputWriter`] once
//! every controller of the run has rendered successfully.
//!
//! ## Safety Guarantees
//!
//! - **All or nothing**: an error in any controller aborts the run before the first write
//! - **Atomic writes**: [`FsWriter`] uses the temp file + rename pattern, so a
//!   crash never leaves a truncated target
//! - **Overwrite**: existing files are replaced, never merged

use std::future::Future;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use strum::Display;
use tokio::fs;

use crate::errors::GeneratorError;
use crate::progress::{ProgressEvent, ProgressSink};

/// Which of a controller's two files a [`GeneratedFile`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FileKind {
    /// Data shape declarations.
    Model,
    /// Callable endpoint wrappers.
    Api,
}

/// One rendered file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
    pub kind: FileKind,
    /// Name of the controller that produced the file.
    pub controller: String,
}

/// Files staged during a run, keyed by path.
///
/// Staging a second file for a path already present replaces the earlier one
/// in place, so the later controller wins while output order stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedOutput {
    files: IndexMap<PathBuf, GeneratedFile>,
}

impl GeneratedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a file, returning the file it replaced, if any.
    pub fn stage(&mut self, file: GeneratedFile) -> Option<GeneratedFile> {
        self.files.insert(file.path.clone(), file)
    }

    pub fn get(&self, path: &Path) -> Option<&GeneratedFile> {
        self.files.get(path)
    }

    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.values()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Renders every staged file for `--dry-run` output.
    pub fn render_listing(&self) -> String {
        self.files()
            .map(|file| format!("=== {} ===\n{}\n", file.path.display(), file.content))
            .collect()
    }
}

/// Persists one generated file.
pub trait OutputWriter: Send + Sync {
    /// Writes `content` to `path`, replacing any existing file.
    fn write(
        &self,
        path: &Path,
        content: &str,
    ) -> impl Future<Output = Result<(), GeneratorError>> + Send;
}

/// Writes files to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWriter;

impl OutputWriter for FsWriter {
    fn write(
        &self,
        path: &Path,
        content: &str,
    ) -> impl Future<Output = Result<(), GeneratorError>> + Send {
        write_atomic(path.to_path_buf(), content.to_string())
    }
}

/// Writes content to a file atomically using a temp file and rename.
///
/// Parent directories are created as needed.
///
/// ## Errors
///
/// Returns [`GeneratorError::WriteError`] if a directory cannot be created or
/// the file cannot be written or renamed.
pub async fn write_atomic(path: PathBuf, content: String) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| GeneratorError::WriteError {
                path: parent.display().to_string(),
                source: e,
            })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)
        .await
        .map_err(|e| GeneratorError::WriteError {
            path: temp_path.display().to_string(),
            source: e,
        })?;

    fs::rename(&temp_path, &path)
        .await
        .map_err(|e| GeneratorError::WriteError {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(())
}

/// Writes every staged file in staging order.
///
/// Stops at the first failed write.
pub async fn write_output<W: OutputWriter>(
    output: &GeneratedOutput,
    writer: &W,
    progress: &dyn ProgressSink,
) -> Result<Vec<PathBuf>, GeneratorError> {
    let mut written = Vec::with_capacity(output.len());

    for file in output.files() {
        writer.write(&file.path, &file.content).await?;
        progress.report(ProgressEvent::FileWritten {
            path: file.path.clone(),
        });
        written.push(file.path.clone());
    }

    Ok(written)
}
