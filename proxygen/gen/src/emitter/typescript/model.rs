//! Model file rendering.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use proxygen_define::{EnumMember, EnumValue, FieldDescription, TypeDescription};

use super::types::{TypeNames, property_key, render_type, string_literal, type_identifier};
use crate::errors::GeneratorError;
use crate::resolve::ResolvedType;
use crate::select::FilteredModel;

/// Renders the declarations of a resolved type set, in the given order.
///
/// Structured types become interfaces and enums become enums. Primitive,
/// array, dictionary and reference types are inlined where they are used
/// and produce no declaration. A module with nothing to declare renders as
/// an empty ES module.
///
/// Each declaration uses the identifier `names` assigned to its type id.
pub fn render_declarations(
    model: &FilteredModel<'_>,
    types: &[ResolvedType<'_>],
    names: &TypeNames,
) -> Result<String, GeneratorError> {
    let mut declarations = Vec::new();

    for resolved in types {
        let Some(name) = resolved.description.declared_name() else {
            continue;
        };
        let ident = names
            .get(resolved.id)
            .map(str::to_string)
            .unwrap_or_else(|| type_identifier(name));

        let declaration = match resolved.description {
            TypeDescription::Structured { fields, .. } => {
                render_interface(model, names, &ident, fields)?
            }
            TypeDescription::Enum { members, .. } => render_enum(&ident, members),
            _ => continue,
        };
        declarations.push(declaration);
    }

    if declarations.is_empty() {
        return Ok("export {};\n".to_string());
    }
    Ok(declarations.join("\n"))
}

fn render_interface(
    model: &FilteredModel<'_>,
    names: &TypeNames,
    ident: &str,
    fields: &[FieldDescription],
) -> Result<String, GeneratorError> {
    let mut out = format!("export interface {ident} {{\n");
    let mut unused = BTreeSet::new();

    for field in fields {
        let ty = render_type(model, names, &field.type_ref, &mut unused)?;
        let nullable = if field.nullable { " | null" } else { "" };
        let _ = writeln!(out, "  {}: {ty}{nullable};", property_key(&field.name));
    }

    out.push_str("}\n");
    Ok(out)
}

fn render_enum(ident: &str, members: &[EnumMember]) -> String {
    let mut out = format!("export enum {ident} {{\n");

    for member in members {
        let value = match &member.value {
            EnumValue::Integer(n) => n.to_string(),
            EnumValue::Text(s) => string_literal(s),
        };
        let _ = writeln!(out, "  {} = {value},", property_key(&member.name));
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_controller_types;
    use crate::select::select_module;
    use crate::test_utils::*;
    use proxygen_define::{HttpMethod, SchemaModel};

    fn render_for(schema: &SchemaModel) -> Result<String, GeneratorError> {
        let model = select_module(schema, "App")?;
        let controller = &model.module.controllers[0];
        let types = resolve_controller_types(&model, controller)?;
        render_declarations(&model, &types, &TypeNames::assign(&types, &[]))
    }

    fn schema_returning(return_type: &str, types: Vec<(&str, TypeDescription)>) -> SchemaModel {
        let mut all: Vec<(&str, TypeDescription)> = system_types();
        all.extend(types);
        make_schema(
            vec![(
                "App",
                make_module(
                    "app",
                    vec![(
                        "Item",
                        make_controller(
                            "Item",
                            "item",
                            vec![make_action("get", HttpMethod::Get, "/item", vec![], Some(return_type))],
                        ),
                    )],
                ),
            )],
            all,
        )
    }

    #[test]
    fn user_dto_interface() {
        let output = render_for(&make_user_schema()).unwrap();

        assert!(output.contains("export interface UserDto {"));
        assert!(output.contains("  id: number;"));
        assert!(output.contains("  name: string | null;"));
        assert!(!output.contains("System"));
    }

    #[test]
    fn enum_keeps_member_order_and_values() {
        let status = TypeDescription::Enum {
            name: "Status".to_string(),
            members: vec![
                EnumMember {
                    name: "Inactive".to_string(),
                    value: EnumValue::Integer(2),
                },
                EnumMember {
                    name: "Active".to_string(),
                    value: EnumValue::Integer(1),
                },
                EnumMember {
                    name: "Legacy".to_string(),
                    value: EnumValue::Text("legacy".to_string()),
                },
            ],
        };
        let output = render_for(&schema_returning("Status", vec![("Status", status)])).unwrap();

        assert!(output.contains("export enum Status {"));
        let inactive = output.find("Inactive = 2,").unwrap();
        let active = output.find("Active = 1,").unwrap();
        assert!(inactive < active);
        assert!(output.contains("Legacy = \"legacy\","));
    }

    #[test]
    fn declarations_follow_resolver_order() {
        let output = render_for(&schema_returning(
            "Zeta",
            vec![
                ("Zeta", make_structured("Zeta", vec![("alpha", "Alpha", false)])),
                ("Alpha", make_structured("Alpha", vec![("flag", "System.Boolean", false)])),
            ],
        ))
        .unwrap();

        let alpha = output.find("export interface Alpha").unwrap();
        let zeta = output.find("export interface Zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn standalone_composites_are_not_declared() {
        let output = render_for(&schema_returning(
            "Items",
            vec![
                ("Items", make_array("Item")),
                ("Item", make_structured("Item", vec![("tags", "Tags", false)])),
                ("Tags", make_dictionary("System.String")),
            ],
        ))
        .unwrap();

        assert!(output.contains("export interface Item {"));
        assert!(output.contains("  tags: Record<string, string>;"));
        assert!(!output.contains("Items"));
        assert!(!output.contains("interface Tags"));
    }

    #[test]
    fn odd_field_names_are_quoted() {
        let output = render_for(&schema_returning(
            "Header",
            vec![(
                "Header",
                make_structured("Header", vec![("x-request-id", "System.String", false)]),
            )],
        ))
        .unwrap();

        assert!(output.contains("  \"x-request-id\": string;"));
    }

    #[test]
    fn unsupported_field_type_fails() {
        let output = render_for(&schema_returning(
            "Money",
            vec![
                ("Money", make_structured("Money", vec![("amount", "Decimal", false)])),
                (
                    "Decimal",
                    make_primitive(proxygen_define::PrimitiveKind::Unsupported("decimal".into())),
                ),
            ],
        ));

        assert!(matches!(output, Err(GeneratorError::UnsupportedType { .. })));
    }

    #[test]
    fn nothing_to_declare_is_an_empty_module() {
        let output = render_for(&schema_returning("System.String", vec![])).unwrap();
        assert_eq!(output, "export {};\n");
    }

    #[test]
    fn same_named_types_are_both_declared() {
        let schema = schema_returning(
            "Page",
            vec![
                (
                    "Page",
                    make_structured(
                        "Page",
                        vec![("a", "App.Item", false), ("b", "Other.Item", false)],
                    ),
                ),
                ("App.Item", make_structured("Item", vec![("id", "System.Int32", false)])),
                ("Other.Item", make_structured("Item", vec![("code", "System.String", false)])),
            ],
        );

        let output = render_for(&schema).unwrap();
        assert!(output.contains("export interface Item {\n  id: number;\n}\n"));
        assert!(output.contains("export interface Item2 {\n  code: string;\n}\n"));
        assert!(output.contains("  a: Item;"));
        assert!(output.contains("  b: Item2;"));
    }
}
