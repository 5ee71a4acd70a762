//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every route template against its declared arguments
//! - Detect duplicate destinations and templates matching the same paths,
//!   including clashes with built-in destinations
//! - Validate the deep link scheme and log filter
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RegistryConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::RegistryConfig;
use crate::destinations;
use crate::routing::{RouteDescriptor, TemplateError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: destination id must not be empty")]
    EmptyDestination { index: usize },

    #[error("route #{index} (`{destination}`): {source}")]
    InvalidRoute {
        index: usize,
        destination: String,
        #[source]
        source: TemplateError,
    },

    #[error("destination `{0}` is declared more than once")]
    DuplicateDestination(String),

    #[error("routes `{first}` and `{second}` match the same paths")]
    Conflict { first: String, second: String },

    #[error("invalid deep link scheme `{0}`")]
    InvalidScheme(String),

    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RegistryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let builtin = config
        .include_builtin
        .then(|| destinations::builtin().cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    let mut seen = HashSet::new();
    // Template shape → first template with that shape.
    let mut shapes: HashMap<String, String> = HashMap::new();

    let mut check = |descriptor: &RouteDescriptor, errors: &mut Vec<ValidationError>| {
        if !seen.insert(descriptor.destination().to_string()) {
            errors.push(ValidationError::DuplicateDestination(
                descriptor.destination().to_string(),
            ));
        }
        if let Ok(template) = descriptor.compile() {
            if let Some(first) = shapes.get(&template.shape()) {
                errors.push(ValidationError::Conflict {
                    first: first.clone(),
                    second: descriptor.template().to_string(),
                });
            } else {
                shapes.insert(template.shape(), descriptor.template().to_string());
            }
        }
    };

    for descriptor in &builtin {
        check(descriptor, &mut errors);
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.destination.trim().is_empty() {
            errors.push(ValidationError::EmptyDestination { index });
            continue;
        }
        let descriptor = route.to_descriptor();
        if let Err(source) = descriptor.compile() {
            errors.push(ValidationError::InvalidRoute {
                index,
                destination: route.destination.clone(),
                source,
            });
        }
        check(&descriptor, &mut errors);
    }

    if config.deep_link.enabled && !is_valid_scheme(&config.deep_link.scheme) {
        errors.push(ValidationError::InvalidScheme(config.deep_link.scheme.clone()));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
