//! Action (endpoint) descriptions.
//!
//! - [`ActionDescription`] - One callable endpoint of a controller
//! - [`ParameterDescription`] - One parameter of an action and where it binds
//! - [`BindingKind`] - Path, query or body binding
//! - [`HttpMethod`] - HTTP verb enumeration

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// HTTP verbs an action may use.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use proxygen_define::HttpMethod;
///
/// assert_eq!(HttpMethod::from_str("DELETE").unwrap(), HttpMethod::Delete);
/// assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP PATCH
    Patch,
    /// HTTP DELETE
    Delete,
    /// HTTP HEAD
    Head,
    /// HTTP OPTIONS
    Options,
}

/// Where an action parameter is bound in the outgoing request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BindingKind {
    /// Substituted into a `{placeholder}` of the URL template.
    Path,
    /// Appended to the query string when present.
    Query,
    /// Sent as the request payload.
    Body,
}

/// One parameter of an [`ActionDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescription {
    /// Parameter name, also used as the query key and placeholder name.
    pub name: String,
    /// How the parameter is bound.
    pub binding_kind: BindingKind,
    /// Identifier of the parameter's type.
    pub type_ref: String,
    /// Whether the caller may omit the parameter.
    #[serde(default)]
    pub optional: bool,
}

/// A single endpoint exposed by a controller.
///
/// ## Examples
///
/// ```
/// use proxygen_define::{ActionDescription, BindingKind, HttpMethod};
///
/// let json = r#"{
///     "name": "getById",
///     "httpMethod": "GET",
///     "urlTemplate": "/api/app/user/{id}",
///     "parameters": [
///         { "name": "id", "bindingKind": "path", "typeRef": "System.Int32" }
///     ],
///     "returnTypeRef": "UserDto"
/// }"#;
///
/// let action: ActionDescription = serde_json::from_str(json).unwrap();
/// assert_eq!(action.http_method, HttpMethod::Get);
/// assert_eq!(action.parameters[0].binding_kind, BindingKind::Path);
/// assert_eq!(action.return_type_ref.as_deref(), Some("UserDto"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescription {
    /// Action name; the emitted callable is named after it.
    pub name: String,
    /// HTTP verb.
    pub http_method: HttpMethod,
    /// URL template with `{placeholder}` segments for path parameters.
    pub url_template: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDescription>,
    /// Identifier of the returned type, if the action returns a payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type_ref: Option<String>,
}

impl ActionDescription {
    /// Returns parameters bound with the given kind, in declaration order.
    pub fn parameters_bound_to(
        &self,
        kind: BindingKind,
    ) -> impl Iterator<Item = &ParameterDescription> {
        self.parameters
            .iter()
            .filter(move |param| param.binding_kind == kind)
    }

    /// Returns every type identifier the action references directly.
    pub fn type_refs(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .map(|param| param.type_ref.as_str())
            .chain(self.return_type_ref.as_deref())
    }
}
