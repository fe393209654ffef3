//! TypeScript type expressions and identifiers.
//!
//! ## Type Mapping
//!
//! | Schema type          | TypeScript              |
//! |----------------------|-------------------------|
//! | `text`, `dateTime`   | `string`                |
//! | `integer`, `float`   | `number`                |
//! | `boolean`            | `boolean`               |
//! | `binary`             | `Blob`                  |
//! | `any`                | `any`                   |
//! | array of `T`         | `T[]`                   |
//! | dictionary of `T`    | `Record<string, T>`     |
//! | reference to `T`     | `T`                     |
//! | structured / enum    | declared name           |
//!
//! Declared names are assigned per controller by [`TypeNames`]: two type ids
//! sharing a name (`App.Item`, `Other.Item`) become `Item` and `Item2`.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use proxygen_define::{PrimitiveKind, TypeDescription};

use crate::errors::GeneratorError;
use crate::naming::unique_name;
use crate::resolve::{ResolvedType, resolve_alias};
use crate::select::FilteredModel;

/// Words that cannot name a declaration, function or parameter.
const RESERVED_WORDS: &[&str] = &[
    "any", "as", "await", "boolean", "break", "case", "catch", "class", "const", "continue",
    "debugger", "declare", "default", "delete", "do", "else", "enum", "export", "extends",
    "false", "finally", "for", "function", "if", "implements", "import", "in", "instanceof",
    "interface", "let", "new", "never", "null", "number", "object", "package", "private",
    "protected", "public", "return", "static", "string", "super", "switch", "symbol", "this",
    "throw", "true", "try", "type", "typeof", "undefined", "unknown", "var", "void", "while",
    "with", "yield",
];

/// Globals referenced by generated code. Declarations must not shadow them.
pub const RUNTIME_GLOBALS: &[&str] = &[
    "Blob",
    "Promise",
    "Record",
    "String",
    "URLSearchParams",
    "encodeURIComponent",
];

/// Identifiers of the structured and enum types declared for one controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeNames {
    by_id: BTreeMap<String, String>,
}

impl TypeNames {
    /// Names every declared type of a resolved set, in the set's order.
    ///
    /// Names never repeat and never equal a [`RUNTIME_GLOBALS`] entry or one
    /// of `reserved`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use proxygen_define::TypeDescription;
    /// use proxygen_gen::emitter::typescript::types::TypeNames;
    /// use proxygen_gen::resolve::ResolvedType;
    ///
    /// let item = TypeDescription::Structured { name: "Item".to_string(), fields: vec![] };
    /// let types = [
    ///     ResolvedType { id: "App.Item", description: &item },
    ///     ResolvedType { id: "Other.Item", description: &item },
    /// ];
    ///
    /// let names = TypeNames::assign(&types, &["request"]);
    /// assert_eq!(names.get("App.Item"), Some("Item"));
    /// assert_eq!(names.get("Other.Item"), Some("Item2"));
    /// ```
    pub fn assign(types: &[ResolvedType<'_>], reserved: &[&str]) -> Self {
        let mut seen: HashSet<String> = RUNTIME_GLOBALS
            .iter()
            .chain(reserved)
            .map(|name| name.to_string())
            .collect();

        let by_id = types
            .iter()
            .filter_map(|resolved| {
                let name = resolved.description.declared_name()?;
                let ident = unique_name(&mut seen, &type_identifier(name));
                Some((resolved.id.to_string(), ident))
            })
            .collect();

        Self { by_id }
    }

    /// The identifier assigned to a type id.
    pub fn get(&self, type_id: &str) -> Option<&str> {
        self.by_id.get(type_id).map(String::as_str)
    }

    /// Every assigned identifier.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.by_id.values().map(String::as_str)
    }

    fn identifier(&self, type_id: &str, declared: &str) -> String {
        self.get(type_id)
            .map(str::to_string)
            .unwrap_or_else(|| type_identifier(declared))
    }
}

/// Maps a primitive kind to its TypeScript type.
///
/// ## Errors
///
/// Returns [`GeneratorError::UnsupportedType`] for kinds outside the fixed set.
pub fn primitive_type(type_id: &str, kind: &PrimitiveKind) -> Result<&'static str, GeneratorError> {
    match kind {
        PrimitiveKind::Text | PrimitiveKind::DateTime => Ok("string"),
        PrimitiveKind::Integer | PrimitiveKind::Float => Ok("number"),
        PrimitiveKind::Boolean => Ok("boolean"),
        PrimitiveKind::Binary => Ok("Blob"),
        PrimitiveKind::Any => Ok("any"),
        PrimitiveKind::Unsupported(name) => Err(GeneratorError::UnsupportedType {
            type_id: type_id.to_string(),
            kind: name.clone(),
        }),
    }
}

/// Renders the TypeScript type expression for a type identifier.
///
/// Structured and enum types are written with the identifier `names`
/// assigned to them. Every identifier the expression mentions is added to
/// `named`, so callers can import them.
///
/// ## Errors
///
/// - [`GeneratorError::UnknownType`] for identifiers missing from the type map
/// - [`GeneratorError::UnsupportedType`] for unmapped primitive kinds
/// - [`GeneratorError::CircularAlias`] for anonymous types that contain themselves
pub fn render_type(
    model: &FilteredModel<'_>,
    names: &TypeNames,
    type_id: &str,
    named: &mut BTreeSet<String>,
) -> Result<String, GeneratorError> {
    let mut stack = Vec::new();
    render_inner(model, names, type_id, named, &mut stack)
}

fn render_inner(
    model: &FilteredModel<'_>,
    names: &TypeNames,
    type_id: &str,
    named: &mut BTreeSet<String>,
    stack: &mut Vec<String>,
) -> Result<String, GeneratorError> {
    if stack.iter().any(|seen| seen == type_id) {
        return Err(GeneratorError::CircularAlias {
            type_id: type_id.to_string(),
        });
    }
    stack.push(type_id.to_string());

    let rendered = match model.type_description(type_id)? {
        TypeDescription::Primitive { primitive } => primitive_type(type_id, primitive)?.to_string(),
        TypeDescription::Array { element } => {
            format!("{}[]", render_inner(model, names, element, named, stack)?)
        }
        TypeDescription::Dictionary { value } => {
            format!("Record<string, {}>", render_inner(model, names, value, named, stack)?)
        }
        TypeDescription::Reference { target } => render_inner(model, names, target, named, stack)?,
        TypeDescription::Structured { name, .. } | TypeDescription::Enum { name, .. } => {
            let ident = names.identifier(type_id, name);
            named.insert(ident.clone());
            ident
        }
    };

    stack.pop();
    Ok(rendered)
}

/// Returns whether a type identifier resolves to an array.
pub fn is_array_type(model: &FilteredModel<'_>, type_id: &str) -> Result<bool, GeneratorError> {
    let (_, description) = resolve_alias(model, type_id)?;
    Ok(matches!(description, TypeDescription::Array { .. }))
}

/// Returns whether `s` is a valid identifier (reserved words included).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Turns an arbitrary name into a usable identifier.
///
/// Invalid characters become `_`, a leading digit gets a `_` prefix and
/// reserved words get a `_` suffix.
///
/// ## Examples
///
/// ```
/// use proxygen_gen::emitter::typescript::types::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("UserDto"), "UserDto");
/// assert_eq!(sanitize_identifier("PagedResult<UserDto>"), "PagedResult_UserDto_");
/// assert_eq!(sanitize_identifier("2fa"), "_2fa");
/// assert_eq!(sanitize_identifier("delete"), "delete_");
/// ```
pub fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if RESERVED_WORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Identifier for a declared structured or enum type.
pub fn type_identifier(name: &str) -> String {
    sanitize_identifier(name)
}

/// Renders an object property or enum member key, quoting it when needed.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Renders a double-quoted string literal.
pub fn string_literal(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Escapes text for use inside a template literal.
pub fn escape_template(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::select_module;
    use crate::test_utils::*;

    fn model_types() -> Vec<(&'static str, TypeDescription)> {
        let mut types = system_types();
        types.extend([
            ("System.DateTime", make_primitive(PrimitiveKind::DateTime)),
            ("System.Double", make_primitive(PrimitiveKind::Float)),
            ("System.Byte[]", make_primitive(PrimitiveKind::Binary)),
            ("System.Object", make_primitive(PrimitiveKind::Any)),
            ("System.Decimal128", make_primitive(PrimitiveKind::Unsupported("decimal128".into()))),
            ("UserDto", make_structured("UserDto", vec![])),
            ("Status", make_enum("Status", vec![("Active", 0)])),
            ("UserList", make_array("UserDto")),
            ("UserMap", make_dictionary("UserList")),
            ("UserAlias", make_reference("UserDto")),
            ("Nested", make_array("Nested")),
        ]);
        types
    }

    fn render(type_id: &str) -> Result<(String, BTreeSet<String>), GeneratorError> {
        let schema = make_schema(vec![("App", make_module("app", vec![]))], model_types());
        let model = select_module(&schema, "App").unwrap();
        let mut named = BTreeSet::new();
        let rendered = render_type(&model, &TypeNames::default(), type_id, &mut named)?;
        Ok((rendered, named))
    }

    #[test]
    fn primitive_mapping_covers_every_kind() {
        for (id, expected) in [
            ("System.String", "string"),
            ("System.DateTime", "string"),
            ("System.Int32", "number"),
            ("System.Double", "number"),
            ("System.Boolean", "boolean"),
            ("System.Byte[]", "Blob"),
            ("System.Object", "any"),
        ] {
            let (rendered, named) = render(id).unwrap();
            assert_eq!(rendered, expected, "{id}");
            assert!(named.is_empty());
        }
    }

    #[test]
    fn unsupported_primitive_is_fatal() {
        let err = render("System.Decimal128").unwrap_err();
        match err {
            GeneratorError::UnsupportedType { type_id, kind } => {
                assert_eq!(type_id, "System.Decimal128");
                assert_eq!(kind, "decimal128");
            }
            other => panic!("Expected UnsupportedType, got: {:?}", other),
        }
    }

    #[test]
    fn composite_types_nest() {
        let (rendered, named) = render("UserMap").unwrap();
        assert_eq!(rendered, "Record<string, UserDto[]>");
        assert_eq!(named.into_iter().collect::<Vec<_>>(), vec!["UserDto"]);
    }

    #[test]
    fn references_render_their_target() {
        assert_eq!(render("UserAlias").unwrap().0, "UserDto");
        assert_eq!(render("Status").unwrap().0, "Status");
    }

    #[test]
    fn self_containing_array_is_rejected() {
        assert!(matches!(
            render("Nested"),
            Err(GeneratorError::CircularAlias { .. })
        ));
    }

    #[test]
    fn array_detection_follows_aliases() {
        let mut types = model_types();
        types.push(("ListAlias", make_reference("UserList")));
        let schema = make_schema(vec![("App", make_module("app", vec![]))], types);
        let model = select_module(&schema, "App").unwrap();

        assert!(is_array_type(&model, "ListAlias").unwrap());
        assert!(!is_array_type(&model, "UserDto").unwrap());
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("userName"));
        assert!(is_identifier("$id"));
        assert!(!is_identifier("user-name"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier(""));
        assert_eq!(sanitize_identifier(""), "_");
        assert_eq!(sanitize_identifier("Volo.Abp.NameValue"), "Volo_Abp_NameValue");
    }

    #[test]
    fn property_keys_are_quoted_when_needed() {
        assert_eq!(property_key("name"), "name");
        assert_eq!(property_key("default"), "default");
        assert_eq!(property_key("x-total"), "\"x-total\"");
        assert_eq!(property_key("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn template_text_is_escaped() {
        assert_eq!(escape_template("/a/`b`/${c}"), "/a/\\`b\\`/\\${c}");
    }

    #[test]
    fn type_names_suffix_colliding_declarations_in_id_order() {
        let app_item = make_structured("Item", vec![]);
        let other_item = make_structured("Item", vec![]);
        let list = make_array("App.Item");
        let types = [
            ResolvedType { id: "App.Item", description: &app_item },
            ResolvedType { id: "App.ItemList", description: &list },
            ResolvedType { id: "Other.Item", description: &other_item },
        ];

        let names = TypeNames::assign(&types, &[]);
        assert_eq!(names.get("App.Item"), Some("Item"));
        assert_eq!(names.get("Other.Item"), Some("Item2"));
        assert_eq!(names.get("App.ItemList"), None);
        assert_eq!(names.identifiers().count(), 2);
    }

    #[test]
    fn type_names_avoid_globals_and_reserved_names() {
        let promise = make_structured("Promise", vec![]);
        let request = make_enum("request", vec![]);
        let types = [
            ResolvedType { id: "App.Promise", description: &promise },
            ResolvedType { id: "App.Request", description: &request },
        ];

        let names = TypeNames::assign(&types, &["request"]);
        assert_eq!(names.get("App.Promise"), Some("Promise2"));
        assert_eq!(names.get("App.Request"), Some("request2"));
    }

    #[test]
    fn render_type_uses_assigned_names() {
        let mut types = system_types();
        types.extend([
            ("App.Item", make_structured("Item", vec![])),
            ("Other.Item", make_structured("Item", vec![])),
            ("Other.ItemList", make_array("Other.Item")),
        ]);
        let schema = make_schema(vec![("App", make_module("app", vec![]))], types);
        let model = select_module(&schema, "App").unwrap();
        let app_item = make_structured("Item", vec![]);
        let other_item = make_structured("Item", vec![]);
        let names = TypeNames::assign(
            &[
                ResolvedType { id: "App.Item", description: &app_item },
                ResolvedType { id: "Other.Item", description: &other_item },
            ],
            &[],
        );

        let mut named = BTreeSet::new();
        assert_eq!(render_type(&model, &names, "Other.ItemList", &mut named).unwrap(), "Item2[]");
        assert_eq!(render_type(&model, &names, "App.Item", &mut named).unwrap(), "Item");
        assert_eq!(named.into_iter().collect::<Vec<_>>(), vec!["Item", "Item2"]);
    }
}
