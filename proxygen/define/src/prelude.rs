//! Convenient re-exports for working with schema models.
//!
//! ```
//! use proxygen_define::prelude::*;
//!
//! let controller = ControllerDescription {
//!     controller_name: "User".to_string(),
//!     controller_group_name: "user".to_string(),
//!     actions: vec![ActionDescription {
//!         name: "getList".to_string(),
//!         http_method: HttpMethod::Get,
//!         url_template: "/api/app/user".to_string(),
//!         parameters: vec![],
//!         return_type_ref: None,
//!     }],
//! };
//! assert_eq!(controller.actions.len(), 1);
//! ```

pub use crate::action::{ActionDescription, BindingKind, HttpMethod, ParameterDescription};
pub use crate::schema::{ControllerDescription, ModuleDescription, SchemaError, SchemaModel};
pub use crate::types::{EnumMember, EnumValue, FieldDescription, PrimitiveKind, TypeDescription};
