//! API file rendering.
//!
//! Each action becomes one exported function that builds the request URL,
//! appends present query parameters and hands everything to the configured
//! HTTP helper:
//!
//! ```text
//! export function getById(id: number): Promise<UserDto> {
//!   return request<UserDto>({
//!     method: "GET",
//!     url: `/api/app/user/${encodeURIComponent(String(id))}`,
//!   });
//! }
//! ```

use std::collections::{BTreeSet, HashSet};
use std::fmt::Write as _;

use proxygen_define::{ActionDescription, ControllerDescription, ParameterDescription};

use super::TypeScriptOptions;
use super::types::{
    RUNTIME_GLOBALS, TypeNames, escape_template, is_array_type, render_type, sanitize_identifier,
    string_literal,
};
use crate::errors::GeneratorError;
use crate::naming::{to_camel_case, unique_name};
use crate::select::FilteredModel;
use crate::validation::{ActionBinding, BoundSegment, bind_controller};

/// Local variable names used inside every generated function body.
const SEARCH_PARAMS: &str = "searchParams";
const QUERY_STRING: &str = "queryString";
const ARRAY_ITEM: &str = "element";

/// A rendered API file body and the model types it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedApi {
    /// Import statements followed by the function declarations.
    pub source: String,
    /// Names that must be imported from the model file.
    pub model_imports: BTreeSet<String>,
}

/// Renders one function per action of a controller, in declaration order.
///
/// Function names never repeat and never take the HTTP helper's name, a
/// runtime global or a type name from `names`.
///
/// ## Errors
///
/// Fails on the first action that cannot be bound or whose types cannot be
/// mapped; see [`bind_controller`] and [`render_type`].
pub fn render_functions(
    model: &FilteredModel<'_>,
    controller: &ControllerDescription,
    names: &TypeNames,
    options: &TypeScriptOptions,
) -> Result<RenderedApi, GeneratorError> {
    let bindings = bind_controller(controller)?;
    let mut model_imports = BTreeSet::new();
    let mut function_names: HashSet<String> = RUNTIME_GLOBALS
        .iter()
        .copied()
        .chain(names.identifiers())
        .chain([options.http_client_function.as_str()])
        .map(str::to_string)
        .collect();
    let mut functions = Vec::with_capacity(bindings.len());

    for (action, binding) in controller.actions.iter().zip(&bindings) {
        let name = unique_name(&mut function_names, &function_identifier(&action.name));
        functions.push(render_function(
            model,
            names,
            action,
            binding,
            &name,
            options,
            &mut model_imports,
        )?);
    }

    let mut source = format!(
        "import {{ {} }} from {};\n",
        options.http_client_function,
        string_literal(&options.http_client_module)
    );
    if !model_imports.is_empty() {
        let names: Vec<&str> = model_imports.iter().map(String::as_str).collect();
        let _ = writeln!(source, "import type {{ {} }} from \"./model\";", names.join(", "));
    }
    for function in functions {
        source.push('\n');
        source.push_str(&function);
    }

    Ok(RenderedApi {
        source,
        model_imports,
    })
}

fn function_identifier(action_name: &str) -> String {
    sanitize_identifier(&to_camel_case(action_name))
}

fn render_function(
    model: &FilteredModel<'_>,
    names: &TypeNames,
    action: &ActionDescription,
    binding: &ActionBinding<'_>,
    name: &str,
    options: &TypeScriptOptions,
    model_imports: &mut BTreeSet<String>,
) -> Result<String, GeneratorError> {
    let idents = parameter_identifiers(action, options);
    let ident_of = |param: &ParameterDescription| identifier_of(action, &idents, param);

    let mut signature = Vec::with_capacity(action.parameters.len());
    for (index, param) in action.parameters.iter().enumerate() {
        let ty = render_type(model, names, &param.type_ref, model_imports)?;
        let later_optional = action.parameters[index + 1..].iter().all(|p| p.optional);
        signature.push(match (param.optional, later_optional) {
            (true, true) => format!("{}?: {ty}", idents[index]),
            (true, false) => format!("{}: {ty} | undefined", idents[index]),
            (false, _) => format!("{}: {ty}", idents[index]),
        });
    }

    let return_type = match &action.return_type_ref {
        Some(type_ref) => render_type(model, names, type_ref, model_imports)?,
        None => "void".to_string(),
    };

    let mut out = format!(
        "export function {name}({}): Promise<{return_type}> {{\n",
        signature.join(", ")
    );

    let mut url = String::from("`");
    for segment in &binding.segments {
        match *segment {
            BoundSegment::Literal(text) => url.push_str(&escape_template(text)),
            BoundSegment::Parameter(param) => {
                let ident = ident_of(param);
                if param.optional {
                    let _ = write!(
                        url,
                        "${{{ident} === undefined || {ident} === null ? \"\" : encodeURIComponent(String({ident}))}}"
                    );
                } else {
                    let _ = write!(url, "${{encodeURIComponent(String({ident}))}}");
                }
            }
        }
    }

    if !binding.query.is_empty() {
        let _ = writeln!(out, "  const {SEARCH_PARAMS} = new URLSearchParams();");
        for &param in &binding.query {
            let ident = ident_of(param);
            let key = string_literal(&param.name);
            let _ = writeln!(out, "  if ({ident} !== undefined && {ident} !== null) {{");
            if is_array_type(model, &param.type_ref)? {
                let _ = writeln!(out, "    for (const {ARRAY_ITEM} of {ident}) {{");
                let _ = writeln!(
                    out,
                    "      {SEARCH_PARAMS}.append({key}, String({ARRAY_ITEM}));"
                );
                out.push_str("    }\n");
            } else {
                let _ = writeln!(out, "    {SEARCH_PARAMS}.append({key}, String({ident}));");
            }
            out.push_str("  }\n");
        }
        let _ = writeln!(out, "  const {QUERY_STRING} = {SEARCH_PARAMS}.toString();");
        let _ = write!(url, "${{{QUERY_STRING} ? `?${{{QUERY_STRING}}}` : \"\"}}");
    }
    url.push('`');

    let _ = writeln!(
        out,
        "  return {}<{return_type}>({{",
        options.http_client_function
    );
    let _ = writeln!(out, "    method: \"{}\",", action.http_method);
    let _ = writeln!(out, "    url: {url},");
    if let Some(body) = binding.body {
        let _ = writeln!(out, "    data: {},", ident_of(body));
    }
    out.push_str("  });\n}\n");

    Ok(out)
}

fn identifier_of(
    action: &ActionDescription,
    idents: &[String],
    param: &ParameterDescription,
) -> String {
    action
        .parameters
        .iter()
        .position(|candidate| std::ptr::eq(candidate, param))
        .map(|index| idents[index].clone())
        .unwrap_or_else(|| sanitize_identifier(&param.name))
}

/// Chooses an identifier for every parameter, in declaration order.
///
/// Identifiers never clash with each other, with the HTTP helper, with the
/// runtime globals or with the locals of the generated function body.
fn parameter_identifiers(action: &ActionDescription, options: &TypeScriptOptions) -> Vec<String> {
    let mut taken: HashSet<String> = [
        SEARCH_PARAMS,
        QUERY_STRING,
        ARRAY_ITEM,
        options.http_client_function.as_str(),
    ]
    .into_iter()
    .chain(RUNTIME_GLOBALS.iter().copied())
    .map(str::to_string)
    .collect();

    action
        .parameters
        .iter()
        .map(|param| {
            let mut ident = sanitize_identifier(&param.name);
            while !taken.insert(ident.clone()) {
                ident.push('_');
            }
            ident
        })
        .collect()
}
