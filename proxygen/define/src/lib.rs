//! Proxygen Schema Model
//!
//! This crate provides the in-memory representation of a remote API
//! description: modules, controllers, actions and a flat map of named type
//! definitions. The `proxygen-gen` crate consumes these types to emit client
//! source files.
//!
//! ## Core Types
//!
//! - [`SchemaModel`] - The whole document: modules plus the shared type map
//! - [`ModuleDescription`] - A named group of controllers served by one remote service
//! - [`ControllerDescription`] - A named group of actions, one generated file pair each
//! - [`ActionDescription`] - One endpoint: verb, URL template, parameters, return type
//! - [`ParameterDescription`] / [`BindingKind`] - Parameters and where they bind
//! - [`HttpMethod`] - HTTP verbs (GET, POST, PUT, ...)
//! - [`TypeDescription`] - Tagged type shapes (primitive, array, dictionary, reference,
//!   structured, enum)
//! - [`PrimitiveKind`] - Scalar kinds
//!
//! The model is pure data. Nothing here knows about a target language.
//!
//! ## Examples
//!
//! ```
//! use proxygen_define::{SchemaModel, TypeDescription};
//!
//! let json = r#"{
//!     "modules": {
//!         "App": {
//!             "remoteServiceName": "app",
//!             "controllers": {
//!                 "UserController": {
//!                     "controllerName": "User",
//!                     "controllerGroupName": "user",
//!                     "actions": []
//!                 }
//!             }
//!         }
//!     },
//!     "types": {
//!         "System.String": { "kind": "primitive", "primitive": "text" }
//!     }
//! }"#;
//!
//! let schema: SchemaModel = serde_json::from_str(json).unwrap();
//! assert_eq!(schema.modules.len(), 1);
//! assert!(matches!(
//!     schema.type_description("System.String"),
//!     Ok(TypeDescription::Primitive { .. })
//! ));
//! ```

pub mod action;
pub mod prelude;
pub mod schema;
pub mod types;

// Re-export main types at crate root
pub use action::{ActionDescription, BindingKind, HttpMethod, ParameterDescription};
pub use schema::{ControllerDescription, ModuleDescription, SchemaError, SchemaModel};
pub use types::{EnumMember, EnumValue, FieldDescription, PrimitiveKind, TypeDescription};
