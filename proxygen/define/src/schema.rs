//! The top-level schema document.
//!
//! A [`SchemaModel`] is fetched once per generation run and never mutated
//! afterwards. Modules own controllers, controllers own actions, and every
//! type reference points into the flat, shared [`SchemaModel::types`] map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::ActionDescription;
use crate::types::TypeDescription;

/// Errors raised by schema lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A type identifier is referenced but not present in the type map.
    #[error("Type '{type_id}' is referenced but not defined in the schema")]
    UnknownType {
        /// The missing identifier.
        type_id: String,
    },
}

/// The complete API description of a remote application.
///
/// Maps keep the order in which the document declared their entries.
///
/// ## Examples
///
/// ```
/// use proxygen_define::SchemaModel;
///
/// let json = r#"{
///     "modules": {
///         "Default": { "remoteServiceName": "app", "controllers": {} }
///     },
///     "types": {}
/// }"#;
///
/// let schema: SchemaModel = serde_json::from_str(json).unwrap();
/// let (key, module) = schema.find_module("default").unwrap();
/// assert_eq!(key, "Default");
/// assert_eq!(module.remote_service_name, "app");
/// assert!(schema.find_module("defaul").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    /// Modules keyed by module name (stored with its original casing).
    #[serde(default)]
    pub modules: IndexMap<String, ModuleDescription>,
    /// Every type definition, keyed by type identifier.
    #[serde(default)]
    pub types: IndexMap<String, TypeDescription>,
}

impl SchemaModel {
    /// Finds a module by key, ignoring ASCII case but otherwise exact.
    ///
    /// Returns the stored key together with the module.
    pub fn find_module(&self, key: &str) -> Option<(&str, &ModuleDescription)> {
        self.modules
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(candidate, module)| (candidate.as_str(), module))
    }

    /// Looks up a type definition by identifier.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaError::UnknownType`] when the identifier is not defined.
    pub fn type_description(&self, type_id: &str) -> Result<&TypeDescription, SchemaError> {
        self.types
            .get(type_id)
            .ok_or_else(|| SchemaError::UnknownType {
                type_id: type_id.to_string(),
            })
    }
}

/// A named group of controllers served by one remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescription {
    /// Name of the remote service; the first output path segment derives from it.
    pub remote_service_name: String,
    /// Controllers keyed by controller key, in declaration order.
    #[serde(default)]
    pub controllers: IndexMap<String, ControllerDescription>,
}

impl ModuleDescription {
    /// Looks up a controller by its exact key.
    pub fn controller(&self, key: &str) -> Option<&ControllerDescription> {
        self.controllers.get(key)
    }
}

/// A named group of actions; one generated file pair per controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerDescription {
    /// Controller name, used in progress output and file banners.
    pub controller_name: String,
    /// Group name; the second output path segment derives from it.
    pub controller_group_name: String,
    /// Actions in declaration order.
    #[serde(default)]
    pub actions: Vec<ActionDescription>,
}
