//! TypeScript emitter.
//!
//! Produces two ES modules per controller:
//!
//! - `model/index.ts` - `export interface` / `export enum` declarations
//! - `index.ts` - one `export function` per action, calling a configurable
//!   HTTP helper (`request` from `@/utils/request` by default)
//!
//! Both files start with a banner naming the module and controller they were
//! generated from. Output contains no timestamps, so regenerating from an
//! unchanged schema reproduces identical bytes.

pub mod api;
pub mod model;
pub mod types;

use proxygen_define::ControllerDescription;
use serde::Deserialize;

use self::types::TypeNames;
use super::ProxyEmitter;
use crate::errors::GeneratorError;
use crate::resolve::ResolvedType;
use crate::select::FilteredModel;

/// Default module the generated API file imports its HTTP helper from.
pub const DEFAULT_HTTP_CLIENT_MODULE: &str = "@/utils/request";

/// Default name of the HTTP helper function.
pub const DEFAULT_HTTP_CLIENT_FUNCTION: &str = "request";

/// TypeScript settings, read from the `[typescript]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeScriptOptions {
    /// Module specifier the HTTP helper is imported from.
    pub http_client_module: String,
    /// Name of the HTTP helper function.
    ///
    /// It is called as `fn<T>({ method, url, data })` and must return `Promise<T>`.
    pub http_client_function: String,
}

impl Default for TypeScriptOptions {
    fn default() -> Self {
        Self {
            http_client_module: DEFAULT_HTTP_CLIENT_MODULE.to_string(),
            http_client_function: DEFAULT_HTTP_CLIENT_FUNCTION.to_string(),
        }
    }
}

/// Emits TypeScript model and API files.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptEmitter {
    options: TypeScriptOptions,
}

impl TypeScriptEmitter {
    pub fn new(options: TypeScriptOptions) -> Self {
        Self { options }
    }

    /// Both files of a controller must agree on these names.
    fn type_names(&self, types: &[ResolvedType<'_>]) -> TypeNames {
        TypeNames::assign(types, &[self.options.http_client_function.as_str()])
    }
}

impl ProxyEmitter for TypeScriptEmitter {
    fn name(&self) -> &'static str {
        "TypeScript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn render_model_file(
        &self,
        model: &FilteredModel<'_>,
        controller: &ControllerDescription,
        types: &[ResolvedType<'_>],
    ) -> Result<String, GeneratorError> {
        let declarations = model::render_declarations(model, types, &self.type_names(types))?;
        Ok(format!("{}\n{declarations}", banner(model, controller)))
    }

    fn render_api_file(
        &self,
        model: &FilteredModel<'_>,
        controller: &ControllerDescription,
        types: &[ResolvedType<'_>],
    ) -> Result<String, GeneratorError> {
        let names = self.type_names(types);
        let rendered = api::render_functions(model, controller, &names, &self.options)?;
        Ok(format!("{}\n{}", banner(model, controller), rendered.source))
    }
}

fn banner(model: &FilteredModel<'_>, controller: &ControllerDescription) -> String {
    format!(
        "/* eslint-disable */\n\
         // This file was generated by proxygen. Do not edit it by hand.\n\
         // Module: {}, controller: {}\n",
        model.module_key, controller.controller_name
    )
}
