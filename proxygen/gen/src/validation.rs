//! Action binding and validation.
//!
//! Before an action is emitted its parameters are bound to the parts of the
//! outgoing request. Binding doubles as validation: an action that cannot be
//! expressed as a request is rejected here, before any text is rendered.
//!
//! ## Validation Checks
//!
//! - **Placeholders**: every `{placeholder}` in the URL template must name a
//!   path-bound parameter (ASCII case-insensitive)
//! - **Body**: at most one parameter may be bound to the request body
//!
//! Path-bound parameters that no placeholder mentions are not an error; they
//! stay in the emitted signature and a warning is logged.

use proxygen_define::{ActionDescription, BindingKind, ControllerDescription, ParameterDescription};
use tracing::warn;

use crate::errors::GeneratorError;
use crate::parser::{UrlSegment, parse_url_template};

/// One piece of an action's URL after binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSegment<'a> {
    /// Text copied into the URL unchanged.
    Literal(&'a str),
    /// A placeholder filled with the value of this parameter.
    Parameter(&'a ParameterDescription),
}

/// The request layout of one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBinding<'a> {
    /// The URL template with placeholders bound to parameters.
    pub segments: Vec<BoundSegment<'a>>,
    /// Query-bound parameters in declaration order.
    pub query: Vec<&'a ParameterDescription>,
    /// The body-bound parameter, if any.
    pub body: Option<&'a ParameterDescription>,
    /// Path-bound parameters no placeholder refers to.
    pub unplaced: Vec<&'a ParameterDescription>,
}

/// Binds an action's parameters to its URL template, query string and body.
///
/// ## Examples
///
/// ```
/// use proxygen_define::{ActionDescription, BindingKind, HttpMethod, ParameterDescription};
/// use proxygen_gen::validation::{bind_action, BoundSegment};
///
/// let action = ActionDescription {
///     name: "getById".to_string(),
///     http_method: HttpMethod::Get,
///     url_template: "/api/app/user/{id}".to_string(),
///     parameters: vec![ParameterDescription {
///         name: "id".to_string(),
///         binding_kind: BindingKind::Path,
///         type_ref: "System.Int32".to_string(),
///         optional: false,
///     }],
///     return_type_ref: Some("UserDto".to_string()),
/// };
///
/// let binding = bind_action("User", &action).unwrap();
/// assert_eq!(binding.segments.len(), 2);
/// assert!(matches!(binding.segments[1], BoundSegment::Parameter(p) if p.name == "id"));
/// assert!(binding.body.is_none());
/// ```
///
/// ## Errors
///
/// Returns [`GeneratorError::MissingPathParameter`] for a placeholder without a
/// matching path parameter, and [`GeneratorError::MultipleBodyParameters`] when
/// more than one parameter is bound to the body.
pub fn bind_action<'a>(
    controller: &str,
    action: &'a ActionDescription,
) -> Result<ActionBinding<'a>, GeneratorError> {
    let path_params: Vec<&ParameterDescription> =
        action.parameters_bound_to(BindingKind::Path).collect();
    let mut placed = vec![false; path_params.len()];
    let mut segments = Vec::new();

    for segment in parse_url_template(&action.url_template) {
        match segment {
            UrlSegment::Literal(text) => segments.push(BoundSegment::Literal(text)),
            UrlSegment::Placeholder { name, .. } => {
                let position = path_params
                    .iter()
                    .position(|param| param.name.eq_ignore_ascii_case(name))
                    .ok_or_else(|| GeneratorError::MissingPathParameter {
                        controller: controller.to_string(),
                        action: action.name.clone(),
                        placeholder: name.to_string(),
                    })?;
                placed[position] = true;
                segments.push(BoundSegment::Parameter(path_params[position]));
            }
        }
    }

    let bodies: Vec<&ParameterDescription> =
        action.parameters_bound_to(BindingKind::Body).collect();
    if bodies.len() > 1 {
        return Err(GeneratorError::MultipleBodyParameters {
            controller: controller.to_string(),
            action: action.name.clone(),
            parameters: bodies.iter().map(|param| param.name.clone()).collect(),
        });
    }

    let unplaced: Vec<&ParameterDescription> = path_params
        .iter()
        .zip(&placed)
        .filter(|(_, placed)| !**placed)
        .map(|(param, _)| *param)
        .collect();
    for param in &unplaced {
        warn!(
            controller,
            action = %action.name,
            parameter = %param.name,
            "Path parameter has no placeholder in the URL template"
        );
    }

    Ok(ActionBinding {
        segments,
        query: action.parameters_bound_to(BindingKind::Query).collect(),
        body: bodies.first().copied(),
        unplaced,
    })
}

/// Binds every action of a controller, stopping at the first invalid one.
pub fn bind_controller(
    controller: &ControllerDescription,
) -> Result<Vec<ActionBinding<'_>>, GeneratorError> {
    controller
        .actions
        .iter()
        .map(|action| bind_action(&controller.controller_name, action))
        .collect()
}
