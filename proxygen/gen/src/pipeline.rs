//! The generation pipeline.
//!
//! ```text
//! fetch ─▶ select ─▶ for each controller: resolve ─▶ render model ─▶ render api ─▶ plan paths
//!                                                                                   │
//!                                                             staged GeneratedOutput ◀┘
//!                                                                       │
//!                                                                   write phase
//! ```
//!
//! Nothing is written until every controller has rendered, so a failing
//! controller leaves the output directory exactly as it was.

use std::path::{Path, PathBuf};

use proxygen_define::ControllerDescription;

use crate::config::GeneratorConfig;
use crate::emitter::{ProxyEmitter, emitter_for};
use crate::errors::GeneratorError;
use crate::fetch::{RemoteSchemaSource, SchemaSource};
use crate::output::{FileKind, FsWriter, GeneratedFile, GeneratedOutput, OutputWriter, write_output};
use crate::paths::plan_paths;
use crate::progress::{ProgressEvent, ProgressSink};
use crate::resolve::resolve_controller_types;
use crate::select::{FilteredModel, select_module};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Module key as stored in the schema.
    pub module: String,
    /// Number of controllers generated.
    pub controllers: usize,
    /// Paths written, in write order. Empty for dry runs.
    pub files: Vec<PathBuf>,
    /// Every staged file, written or not.
    pub output: GeneratedOutput,
}

/// Renders every controller of the selected module into staged files.
///
/// Controllers are processed in declaration order. When two controllers map
/// to the same path the later one replaces the earlier one and a
/// [`ProgressEvent::PathCollision`] is reported.
///
/// ## Errors
///
/// Stops at the first controller that fails to resolve, render or plan.
pub fn generate(
    model: &FilteredModel<'_>,
    emitter: &dyn ProxyEmitter,
    output_root: &Path,
    progress: &dyn ProgressSink,
) -> Result<GeneratedOutput, GeneratorError> {
    let mut output = GeneratedOutput::new();

    for controller in model.module.controllers.values() {
        progress.report(ProgressEvent::ControllerStarted {
            controller: controller.controller_name.clone(),
        });

        let types = resolve_controller_types(model, controller)?;
        let model_source = emitter.render_model_file(model, controller, &types)?;
        let api_source = emitter.render_api_file(model, controller, &types)?;
        let paths = plan_paths(output_root, model.module, controller, emitter.extension())?;

        stage(&mut output, controller, FileKind::Model, paths.model_path, model_source, progress);
        stage(&mut output, controller, FileKind::Api, paths.api_path, api_source, progress);
    }

    Ok(output)
}

fn stage(
    output: &mut GeneratedOutput,
    controller: &ControllerDescription,
    kind: FileKind,
    path: PathBuf,
    content: String,
    progress: &dyn ProgressSink,
) {
    progress.report(ProgressEvent::FileGenerated {
        controller: controller.controller_name.clone(),
        kind,
        path: path.clone(),
    });

    let replaced = output.stage(GeneratedFile {
        path: path.clone(),
        content,
        kind,
        controller: controller.controller_name.clone(),
    });

    if let Some(previous) = replaced {
        progress.report(ProgressEvent::PathCollision {
            path,
            previous: previous.controller,
            controller: controller.controller_name.clone(),
        });
    }
}

/// Runs a complete generation: fetch, select, generate, write.
///
/// The module is selected before any rendering starts, and writing starts
/// only after every controller rendered. With `dry_run` set the write phase
/// is skipped and the staged files are only returned.
///
/// ## Errors
///
/// Propagates the first error of any stage; see [`GeneratorError`].
pub async fn run<S, W>(
    config: &GeneratorConfig,
    source: &S,
    writer: &W,
    progress: &dyn ProgressSink,
) -> Result<RunSummary, GeneratorError>
where
    S: SchemaSource,
    W: OutputWriter,
{
    progress.report(ProgressEvent::FetchingSchema {
        url: source.location(),
    });
    let schema = source.fetch().await?;

    let model = select_module(&schema, &config.module)?;
    progress.report(ProgressEvent::ModuleSelected {
        module: model.module_key.to_string(),
        controllers: model.module.controllers.len(),
    });

    let emitter = emitter_for(config.target, &config.emitter);
    let output = generate(&model, emitter.as_ref(), &config.output, progress)?;

    let files = if config.dry_run {
        Vec::new()
    } else {
        write_output(&output, writer, progress).await?
    };

    progress.report(ProgressEvent::Completed {
        module: model.module_key.to_string(),
        files: output.len(),
    });

    Ok(RunSummary {
        module: model.module_key.to_string(),
        controllers: model.module.controllers.len(),
        files,
        output,
    })
}

/// Runs against the configured remote service, writing to the local filesystem.
pub async fn run_remote(
    config: &GeneratorConfig,
    progress: &dyn ProgressSink,
) -> Result<RunSummary, GeneratorError> {
    let source = RemoteSchemaSource::new(&config.url)?.timeout(config.timeout);
    run(config, &source, &FsWriter, progress).await
}
