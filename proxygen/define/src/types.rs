//! Type descriptions shared by every module of a schema.
//!
//! The backend describes data shapes as loosely-typed JSON. This module closes
//! them into a tagged variant so consumers can pattern-match exhaustively:
//!
//! - [`TypeDescription`] - Primitive, array, dictionary, reference, structured or enum
//! - [`PrimitiveKind`] - The fixed set of scalar kinds, plus a catch-all for anything else
//! - [`FieldDescription`] - One member of a structured type
//! - [`EnumMember`] / [`EnumValue`] - Members of an enumeration with their explicit values

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar kinds a backend may report for a primitive type.
///
/// Unknown kind names do not fail deserialization; they are kept verbatim in
/// [`PrimitiveKind::Unsupported`] so the emitter can report them with context.
///
/// ## Examples
///
/// ```
/// use proxygen_define::PrimitiveKind;
///
/// assert_eq!(PrimitiveKind::from("dateTime".to_string()), PrimitiveKind::DateTime);
/// assert_eq!(
///     PrimitiveKind::from("decimal128".to_string()),
///     PrimitiveKind::Unsupported("decimal128".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrimitiveKind {
    /// Text of any length.
    Text,
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Float,
    /// `true` / `false`.
    Boolean,
    /// A date and/or time, transported as text.
    DateTime,
    /// Raw binary content (files, streams).
    Binary,
    /// Untyped value.
    Any,
    /// A kind outside the fixed set, carrying the name the backend used.
    Unsupported(String),
}

impl PrimitiveKind {
    /// Returns the wire name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::DateTime => "dateTime",
            Self::Binary => "binary",
            Self::Any => "any",
            Self::Unsupported(name) => name,
        }
    }
}

impl From<String> for PrimitiveKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "text" => Self::Text,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "boolean" => Self::Boolean,
            "dateTime" => Self::DateTime,
            "binary" => Self::Binary,
            "any" => Self::Any,
            _ => Self::Unsupported(value),
        }
    }
}

impl From<PrimitiveKind> for String {
    fn from(value: PrimitiveKind) -> Self {
        match value {
            PrimitiveKind::Unsupported(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named type in the schema's flat type map.
///
/// Every edge between types (`element`, `value`, `target`, a field's
/// `type_ref`) is a type identifier, i.e. a key of
/// [`SchemaModel::types`](crate::SchemaModel::types).
///
/// ## Examples
///
/// ```
/// use proxygen_define::{TypeDescription, PrimitiveKind};
///
/// let json = r#"{ "kind": "array", "element": "System.String" }"#;
/// let ty: TypeDescription = serde_json::from_str(json).unwrap();
/// assert_eq!(ty, TypeDescription::Array { element: "System.String".to_string() });
///
/// let json = r#"{ "kind": "primitive", "primitive": "integer" }"#;
/// let ty: TypeDescription = serde_json::from_str(json).unwrap();
/// assert_eq!(ty, TypeDescription::Primitive { primitive: PrimitiveKind::Integer });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDescription {
    /// A scalar, inlined at every point of use.
    Primitive {
        /// The scalar kind.
        primitive: PrimitiveKind,
    },
    /// A homogeneous list of `element`.
    Array {
        /// Identifier of the element type.
        element: String,
    },
    /// A string-keyed map whose values are `value`.
    Dictionary {
        /// Identifier of the value type.
        value: String,
    },
    /// An alias for another type in the map.
    Reference {
        /// Identifier of the aliased type.
        target: String,
    },
    /// A record with named, ordered fields.
    Structured {
        /// Declared name of the record.
        name: String,
        /// Fields in declaration order.
        #[serde(default)]
        fields: Vec<FieldDescription>,
    },
    /// An enumeration with explicit member values.
    Enum {
        /// Declared name of the enumeration.
        name: String,
        /// Members in declaration order.
        #[serde(default)]
        members: Vec<EnumMember>,
    },
}

impl TypeDescription {
    /// Returns the identifiers this type points at directly.
    ///
    /// Primitive and enum types have no outgoing edges.
    pub fn referenced_ids(&self) -> Vec<&str> {
        match self {
            Self::Primitive { .. } | Self::Enum { .. } => Vec::new(),
            Self::Array { element } => vec![element.as_str()],
            Self::Dictionary { value } => vec![value.as_str()],
            Self::Reference { target } => vec![target.as_str()],
            Self::Structured { fields, .. } => {
                fields.iter().map(|field| field.type_ref.as_str()).collect()
            }
        }
    }

    /// Returns the declared name for structured and enum types.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::Structured { name, .. } | Self::Enum { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// One field of a [`TypeDescription::Structured`] type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescription {
    /// Field name as it appears on the wire.
    pub name: String,
    /// Identifier of the field's type.
    pub type_ref: String,
    /// Whether the field may hold `null`.
    #[serde(default)]
    pub nullable: bool,
}

/// One member of a [`TypeDescription::Enum`] type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Explicit value carried on the wire.
    pub value: EnumValue,
}

/// The explicit value of an enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// Numeric value (the common case for backend enums).
    Integer(i64),
    /// String value.
    Text(String),
}
