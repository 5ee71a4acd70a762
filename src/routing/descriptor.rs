//! Route descriptors.
//!
//! # Responsibilities
//! - Describe one navigable screen: template, destination id, arguments
//! - Build navigation paths from argument values (escaping included)
//! - Read argument values back out of host-matched parameters
//!
//! # Design Decisions
//! - Descriptors are plain immutable records, constructible in `const`
//!   context so built-in screens are `static` items
//! - Callers never see escaped values
//! - A missing host parameter is a wiring defect and panics

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::routing::codec;
use crate::routing::error::{EncodingError, EncodingResult, RouteError, TemplateError};
use crate::routing::params::RouteParams;
use crate::routing::template::RouteTemplate;

/// Type metadata for a placeholder, handed to the host at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavType {
    #[default]
    String,
    Int,
    Long,
    Bool,
}

impl NavType {
    pub fn name(&self) -> &'static str {
        match self {
            NavType::String => "string",
            NavType::Int => "int",
            NavType::Long => "long",
            NavType::Bool => "bool",
        }
    }

    /// Returns true if the unescaped value is a valid instance of this type.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            NavType::String => true,
            NavType::Int => value.parse::<i32>().is_ok(),
            NavType::Long => value.parse::<i64>().is_ok(),
            NavType::Bool => value.parse::<bool>().is_ok(),
        }
    }

    /// Same as [`accepts`](Self::accepts) for a raw path segment.
    pub fn accepts_raw(&self, raw: &str) -> bool {
        match self {
            NavType::String => true,
            _ => codec::unescape(raw).is_some_and(|v| self.accepts(&v)),
        }
    }
}

/// A declared route argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentSpec {
    name: Cow<'static, str>,
    #[serde(rename = "type")]
    nav_type: NavType,
    allow_empty: bool,
}

impl ArgumentSpec {
    pub const fn new(name: &'static str, nav_type: NavType) -> Self {
        Self {
            name: Cow::Borrowed(name),
            nav_type,
            allow_empty: false,
        }
    }

    /// A non-empty string argument.
    pub const fn string(name: &'static str) -> Self {
        Self::new(name, NavType::String)
    }

    pub fn owned(name: impl Into<String>, nav_type: NavType, allow_empty: bool) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            nav_type,
            allow_empty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nav_type(&self) -> NavType {
        self.nav_type
    }

    /// Only string arguments can be empty.
    pub fn accepts_empty(&self) -> bool {
        self.allow_empty && self.nav_type == NavType::String
    }

    /// Check and escape a value for this argument.
    fn encode<'a>(&self, value: &'a str) -> EncodingResult<Cow<'a, str>> {
        if value.is_empty() {
            if !self.accepts_empty() {
                return Err(EncodingError::Empty {
                    argument: self.name.to_string(),
                });
            }
        } else if !self.nav_type.accepts(value) {
            return Err(EncodingError::InvalidValue {
                argument: self.name.to_string(),
                expected: self.nav_type.name(),
                value: value.to_string(),
            });
        }
        Ok(codec::escape(value))
    }
}

/// One navigable screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    #[serde(rename = "route")]
    template: Cow<'static, str>,
    destination: Cow<'static, str>,
    arguments: Cow<'static, [ArgumentSpec]>,
}

impl RouteDescriptor {
    /// Descriptor for a built-in screen.
    pub const fn from_static(
        template: &'static str,
        destination: &'static str,
        arguments: &'static [ArgumentSpec],
    ) -> Self {
        Self {
            template: Cow::Borrowed(template),
            destination: Cow::Borrowed(destination),
            arguments: Cow::Borrowed(arguments),
        }
    }

    /// Descriptor built at runtime, e.g. from configuration.
    pub fn new(
        template: impl Into<String>,
        destination: impl Into<String>,
        arguments: Vec<ArgumentSpec>,
    ) -> Self {
        Self {
            template: Cow::Owned(template.into()),
            destination: Cow::Owned(destination.into()),
            arguments: Cow::Owned(arguments),
        }
    }

    /// The route template, e.g. `session_details_route/{sessionId}`.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentSpec> {
        self.arguments.iter().find(|a| a.name() == name)
    }

    /// Parse the template and check it against the declared arguments.
    pub fn compile(&self) -> Result<RouteTemplate, TemplateError> {
        RouteTemplate::parse(&self.template)?.bind(&self.arguments)
    }

    /// Path for a route without arguments.
    pub fn path(&self) -> EncodingResult<String> {
        self.build_path_with(&[])
    }

    /// Path for a route with exactly one argument.
    ///
    /// ```
    /// use confetti_nav::destinations::session_details::SESSION_DETAILS;
    ///
    /// assert_eq!(SESSION_DETAILS.build_path("a/b").unwrap(), "session_details_route/a%2Fb");
    /// ```
    pub fn build_path(&self, value: &str) -> EncodingResult<String> {
        let arg = self.single_argument().ok_or_else(|| self.arity_error(1))?;
        self.build_path_with(&[(arg.name(), value)])
    }

    /// Path with every declared argument bound by name.
    pub fn build_path_with(&self, values: &[(&str, &str)]) -> EncodingResult<String> {
        if values.is_empty() && !self.arguments.is_empty() {
            return Err(self.arity_error(0));
        }

        let template = self.compile()?;

        let mut params = RouteParams::new();
        for (name, value) in values {
            let arg = self
                .argument(name)
                .ok_or_else(|| EncodingError::UnknownArgument {
                    route: self.template.to_string(),
                    argument: name.to_string(),
                })?;
            if params.contains(arg.name()) {
                return Err(EncodingError::DuplicateArgument {
                    argument: arg.name().to_string(),
                });
            }
            params.insert(arg.name(), arg.encode(value)?);
        }

        template.render(&params).ok_or_else(|| {
            let unbound = template
                .placeholders()
                .find(|p| !params.contains(p))
                .unwrap_or_default();
            EncodingError::Unbound {
                argument: unbound.to_string(),
            }
        })
    }

    /// Read the single declared argument from host-matched parameters.
    ///
    /// # Panics
    ///
    /// Panics if the parameters lack the argument, or if the route does not
    /// declare exactly one argument. Both mean the host and the registry
    /// disagree about this route.
    pub fn extract_argument(&self, params: &RouteParams) -> String {
        let Some(arg) = self.single_argument() else {
            panic!(
                "route `{}` declares {} arguments, extract_argument needs exactly one",
                self.template,
                self.arguments.len()
            );
        };
        match params.get(arg.name()) {
            Some(raw) => codec::unescape_lossy(raw).into_owned(),
            None => panic!(
                "missing argument `{}` for route `{}`",
                arg.name(),
                self.template
            ),
        }
    }

    /// Read an argument without panicking, for untrusted input.
    pub fn try_extract(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        let raw = params.get(name).ok_or_else(|| RouteError::MissingArgument {
            route: self.template.to_string(),
            name: name.to_string(),
        })?;
        codec::unescape(raw)
            .map(Cow::into_owned)
            .ok_or_else(|| {
                EncodingError::InvalidUtf8 {
                    argument: name.to_string(),
                }
                .into()
            })
    }

    fn single_argument(&self) -> Option<&ArgumentSpec> {
        match self.arguments.as_ref() {
            [arg] => Some(arg),
            _ => None,
        }
    }

    fn arity_error(&self, expected: usize) -> EncodingError {
        EncodingError::Arity {
            route: self.template.to_string(),
            declared: self.arguments.len(),
            expected,
        }
    }
}
