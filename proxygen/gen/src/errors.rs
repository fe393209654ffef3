//! Error types for the proxy generator.

use proxygen_define::SchemaError;
use thiserror::Error;

/// Errors that can occur while generating proxies.
///
/// Every variant is fatal for the run: generation stops at the first error
/// and nothing staged after it is written.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A required input was not supplied on the command line, environment or config file.
    #[error("Missing required argument: --{argument}")]
    MissingArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// The requested module is not part of the fetched schema.
    #[error("Module name: {module} is invalid. Available modules: {}", .available.join(", "))]
    InvalidModule {
        /// The module key that was requested.
        module: String,
        /// Module keys present in the schema.
        available: Vec<String>,
    },

    /// A primitive kind has no mapping in the target language.
    #[error("Unsupported type '{type_id}': primitive kind '{kind}' has no mapping")]
    UnsupportedType {
        /// Identifier of the offending type.
        type_id: String,
        /// The unmapped kind.
        kind: String,
    },

    /// A URL placeholder has no matching path-bound parameter.
    #[error(
        "Action '{controller}.{action}' has URL placeholder '{{{placeholder}}}' without a matching path parameter"
    )]
    MissingPathParameter {
        /// Controller name.
        controller: String,
        /// Action name.
        action: String,
        /// The unmatched placeholder name.
        placeholder: String,
    },

    /// An action binds more than one parameter to the request body.
    #[error(
        "Action '{controller}.{action}' binds more than one parameter to the body: {}",
        .parameters.join(", ")
    )]
    MultipleBodyParameters {
        /// Controller name.
        controller: String,
        /// Action name.
        action: String,
        /// Names of all body-bound parameters.
        parameters: Vec<String>,
    },

    /// A type identifier is referenced but missing from the type map.
    #[error("Type '{type_id}' is referenced but not defined in the schema")]
    UnknownType {
        /// The missing identifier.
        type_id: String,
    },

    /// A chain of reference types loops back on itself.
    #[error("Type '{type_id}' is part of a reference cycle with no concrete type")]
    CircularAlias {
        /// Identifier where the cycle was detected.
        type_id: String,
    },

    /// A name produced an empty output path segment.
    #[error("Cannot derive an output path segment from {field} '{value}'")]
    EmptyPathSegment {
        /// Which name was used (remote service or controller group).
        field: &'static str,
        /// The original value.
        value: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to read an input file.
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The base URL could not be parsed or joined.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The schema request failed at the transport level.
    #[error("Failed to fetch API definition: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The schema endpoint answered with a non-success status.
    #[error("API definition request to '{url}' failed with HTTP {status}: {message}")]
    FetchStatus {
        url: String,
        status: u16,
        message: String,
    },

    /// The schema document is not valid JSON of the expected shape.
    #[error("Failed to parse API definition: {0}")]
    SchemaParse(#[from] serde_json::Error),
}

impl From<SchemaError> for GeneratorError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::UnknownType { type_id } => Self::UnknownType { type_id },
        }
    }
}
