//! Module selection.
//!
//! Narrows a fetched [`SchemaModel`] to the one module a run generates for.
//! The type map is never filtered: types are shared across modules and any
//! of them may be reachable from the selected controllers.

use indexmap::IndexMap;
use proxygen_define::{ModuleDescription, SchemaModel, TypeDescription};

use crate::errors::GeneratorError;

/// One module plus the complete type map, derived once per run.
#[derive(Debug, Clone, Copy)]
pub struct FilteredModel<'a> {
    /// Module key as stored in the schema (original casing).
    pub module_key: &'a str,
    /// The selected module.
    pub module: &'a ModuleDescription,
    /// Every type definition of the schema.
    pub types: &'a IndexMap<String, TypeDescription>,
}

impl<'a> FilteredModel<'a> {
    /// Looks up a type definition by identifier.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::UnknownType`] when the identifier is not defined.
    pub fn type_description(&self, type_id: &str) -> Result<&'a TypeDescription, GeneratorError> {
        self.types
            .get(type_id)
            .ok_or_else(|| GeneratorError::UnknownType {
                type_id: type_id.to_string(),
            })
    }
}

/// Selects the module named `module_key`, ignoring ASCII case.
///
/// Matching is exact apart from case: `"default"` selects `"Default"`,
/// `"defaul"` selects nothing.
///
/// ## Errors
///
/// Returns [`GeneratorError::InvalidModule`] listing the available module keys
/// when nothing matches.
pub fn select_module<'a>(
    schema: &'a SchemaModel,
    module_key: &str,
) -> Result<FilteredModel<'a>, GeneratorError> {
    let (key, module) =
        schema
            .find_module(module_key)
            .ok_or_else(|| GeneratorError::InvalidModule {
                module: module_key.to_string(),
                available: schema.modules.keys().cloned().collect(),
            })?;

    Ok(FilteredModel {
        module_key: key,
        module,
        types: &schema.types,
    })
}
