//! Type reference resolution.
//!
//! Computes the set of type definitions a controller needs: everything
//! reachable from its actions' parameter and return types through array,
//! dictionary, reference and structured-field edges.

use std::collections::BTreeSet;

use proxygen_define::{ControllerDescription, TypeDescription};
use tracing::debug;

use crate::errors::GeneratorError;
use crate::select::FilteredModel;

/// A type definition together with the identifier it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedType<'a> {
    pub id: &'a str,
    pub description: &'a TypeDescription,
}

/// Resolves the transitive type closure of a controller.
///
/// Every reachable type appears exactly once, sorted by identifier, so two
/// runs over the same schema produce the same sequence. Cyclic graphs
/// (including self-referencing records) terminate.
///
/// ## Errors
///
/// Returns [`GeneratorError::UnknownType`] when a reachable identifier is
/// missing from the type map.
pub fn resolve_controller_types<'a>(
    model: &FilteredModel<'a>,
    controller: &'a ControllerDescription,
) -> Result<Vec<ResolvedType<'a>>, GeneratorError> {
    let roots = controller
        .actions
        .iter()
        .flat_map(|action| action.type_refs());

    resolve_closure(model, roots)
}

/// Resolves the transitive closure of an arbitrary set of root identifiers.
pub fn resolve_closure<'a>(
    model: &FilteredModel<'a>,
    roots: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<ResolvedType<'a>>, GeneratorError> {
    let mut visited: BTreeSet<&'a str> = BTreeSet::new();
    let mut pending: Vec<&'a str> = roots.into_iter().collect();

    while let Some(id) = pending.pop() {
        if !visited.insert(id) {
            continue;
        }
        let description = model.type_description(id)?;
        pending.extend(description.referenced_ids());
    }

    debug!(count = visited.len(), "Resolved type closure");

    visited
        .into_iter()
        .map(|id| {
            Ok(ResolvedType {
                id,
                description: model.type_description(id)?,
            })
        })
        .collect()
}

/// Follows a chain of reference types to the first non-reference type.
///
/// Returns the identifier and definition the chain ends at.
///
/// ## Errors
///
/// Returns [`GeneratorError::CircularAlias`] when the chain loops, or
/// [`GeneratorError::UnknownType`] when it leads to an undefined identifier.
pub fn resolve_alias<'a>(
    model: &FilteredModel<'a>,
    type_id: &'a str,
) -> Result<(&'a str, &'a TypeDescription), GeneratorError> {
    let mut seen: BTreeSet<&'a str> = BTreeSet::new();
    let mut current = type_id;

    loop {
        if !seen.insert(current) {
            return Err(GeneratorError::CircularAlias {
                type_id: type_id.to_string(),
            });
        }
        match model.type_description(current)? {
            TypeDescription::Reference { target } => current = target.as_str(),
            description => return Ok((current, description)),
        }
    }
}
