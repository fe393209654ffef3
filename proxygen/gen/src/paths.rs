//! Output path planning.
//!
//! Every controller produces two files under the output root:
//!
//! ```text
//! <root>/
//! └── <kebab(remoteServiceName)>/
//!     └── <kebab(controllerGroupName)>/
//!         ├── index.<ext>        # API wrappers
//!         └── model/
//!             └── index.<ext>    # Data shapes
//! ```
//!
//! Paths depend only on the two names, never on the controller's actions.

use std::path::{Path, PathBuf};

use proxygen_define::{ControllerDescription, ModuleDescription};

use crate::errors::GeneratorError;
use crate::naming::to_kebab_case;

/// File stem shared by both generated files.
const INDEX_STEM: &str = "index";

/// Subdirectory holding the model file.
const MODEL_DIR: &str = "model";

/// The two output paths of one controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlannedPaths {
    pub model_path: PathBuf,
    pub api_path: PathBuf,
}

/// Derives the output paths of a controller.
///
/// ## Examples
///
/// ```
/// use std::path::Path;
/// use indexmap::IndexMap;
/// use proxygen_define::{ControllerDescription, ModuleDescription};
/// use proxygen_gen::paths::plan_paths;
///
/// let module = ModuleDescription {
///     remote_service_name: "AbpIdentity".to_string(),
///     controllers: IndexMap::new(),
/// };
/// let controller = ControllerDescription {
///     controller_name: "IdentityUser".to_string(),
///     controller_group_name: "IdentityUser".to_string(),
///     actions: vec![],
/// };
///
/// let paths = plan_paths(Path::new("output"), &module, &controller, "ts").unwrap();
/// assert_eq!(paths.api_path, Path::new("output/abp-identity/identity-user/index.ts"));
/// assert_eq!(paths.model_path, Path::new("output/abp-identity/identity-user/model/index.ts"));
/// ```
///
/// ## Errors
///
/// Returns [`GeneratorError::EmptyPathSegment`] when either name has no
/// alphanumeric content.
pub fn plan_paths(
    output_root: &Path,
    module: &ModuleDescription,
    controller: &ControllerDescription,
    extension: &str,
) -> Result<PlannedPaths, GeneratorError> {
    let service = path_segment("remoteServiceName", &module.remote_service_name)?;
    let group = path_segment("controllerGroupName", &controller.controller_group_name)?;
    let file_name = format!("{INDEX_STEM}.{extension}");

    let dir = output_root.join(service).join(group);

    Ok(PlannedPaths {
        model_path: dir.join(MODEL_DIR).join(&file_name),
        api_path: dir.join(file_name),
    })
}

fn path_segment(field: &'static str, value: &str) -> Result<String, GeneratorError> {
    let segment = to_kebab_case(value);
    if segment.is_empty() {
        return Err(GeneratorError::EmptyPathSegment {
            field,
            value: value.to_string(),
        });
    }
    Ok(segment)
}
