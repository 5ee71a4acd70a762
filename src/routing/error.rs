//! Routing error definitions.

use thiserror::Error;

/// Errors raised while turning argument values into a route path.
///
/// All variants are recoverable: the caller should validate the value
/// before navigating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The value is empty but the argument requires an identifier.
    #[error("argument `{argument}` must not be empty")]
    Empty { argument: String },

    /// The value does not parse as the argument's declared type.
    #[error("argument `{argument}` expects a {expected} value, got `{value}`")]
    InvalidValue {
        argument: String,
        expected: &'static str,
        value: String,
    },

    /// A value was supplied for a name the route does not declare.
    #[error("route `{route}` declares no argument `{argument}`")]
    UnknownArgument { route: String, argument: String },

    /// The same argument was supplied more than once.
    #[error("argument `{argument}` supplied more than once")]
    DuplicateArgument { argument: String },

    /// A declared argument was left without a value.
    #[error("no value supplied for argument `{argument}`")]
    Unbound { argument: String },

    /// The single-value form was used on a route with a different arity.
    #[error("route `{route}` declares {declared} arguments, expected {expected}")]
    Arity {
        route: String,
        declared: usize,
        expected: usize,
    },

    /// The unescaped bytes are not valid UTF-8.
    #[error("argument `{argument}` does not decode to UTF-8")]
    InvalidUtf8 { argument: String },

    /// The descriptor itself is invalid, so no path can be built.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Errors raised while parsing a route template or checking it against
/// the declared argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("route template is empty")]
    Empty,

    #[error("route template `{template}` must not start with `/`")]
    LeadingSlash { template: String },

    #[error("route template `{template}` contains an empty segment")]
    EmptySegment { template: String },

    #[error("malformed segment `{segment}` in route template `{template}`")]
    MalformedSegment { template: String, segment: String },

    #[error("placeholder `{name}` appears more than once in `{template}`")]
    DuplicatePlaceholder { template: String, name: String },

    /// The template names a placeholder the descriptor does not declare.
    #[error("placeholder `{name}` in `{template}` is not a declared argument")]
    UndeclaredPlaceholder { template: String, name: String },

    /// A declared argument has no placeholder in the template.
    #[error("argument `{name}` has no placeholder in `{template}`")]
    MissingPlaceholder { template: String, name: String },

    #[error("argument `{name}` is declared more than once")]
    DuplicateArgument { name: String },
}

/// Errors raised when reading arguments back out of matched parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The host did not supply the expected key. Indicates a mismatch
    /// between the host and the registry.
    #[error("missing argument `{name}` for route `{route}`")]
    MissingArgument { route: String, name: String },

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Errors raised while registering descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("destination id must not be empty (route `{0}`)")]
    EmptyDestination(String),

    #[error("destination `{0}` is already registered")]
    DuplicateDestination(String),

    /// Two templates would match exactly the same paths.
    #[error("route `{template}` conflicts with `{existing}`")]
    Conflict { template: String, existing: String },

    #[error("invalid route for destination `{destination}`: {source}")]
    InvalidRoute {
        destination: String,
        #[source]
        source: TemplateError,
    },
}

/// Result type for route encoding.
pub type EncodingResult<T> = Result<T, EncodingError>;
