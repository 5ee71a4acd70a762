//! Route table keyed by destination id.
//!
//! # Responsibilities
//! - Store compiled descriptors
//! - Look up descriptors by destination id
//! - Resolve a path to the matching descriptor and raw parameters
//!
//! # Design Decisions
//! - Built at startup, read-only afterwards (shared without locks)
//! - Registration rejects duplicate destinations and templates that
//!   would match the same paths, so resolution is unambiguous
//! - First registered match wins

use std::collections::HashMap;

use crate::config::schema::RegistryConfig;
use crate::destinations;
use crate::routing::descriptor::RouteDescriptor;
use crate::routing::error::RegistryError;
use crate::routing::params::RouteParams;
use crate::routing::template::RouteTemplate;

#[derive(Debug)]
struct Entry {
    descriptor: RouteDescriptor,
    template: RouteTemplate,
}

/// A resolved navigation target.
#[derive(Debug, Clone)]
pub struct ResolvedRoute<'a> {
    pub descriptor: &'a RouteDescriptor,
    /// Raw (escaped) placeholder values.
    pub params: RouteParams,
}

/// Registered route descriptors.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    entries: Vec<Entry>,
    by_destination: HashMap<String, usize>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in destination.
    pub fn with_builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for descriptor in destinations::builtin() {
            registry.register(descriptor.clone())?;
        }
        Ok(registry)
    }

    /// Registry built from configuration: built-ins first (when enabled),
    /// then configured routes in file order.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut registry = if config.include_builtin {
            Self::with_builtin()?
        } else {
            Self::new()
        };
        for route in &config.routes {
            registry.register(route.to_descriptor())?;
        }
        Ok(registry)
    }

    /// Compile and add a descriptor.
    pub fn register(&mut self, descriptor: RouteDescriptor) -> Result<(), RegistryError> {
        if descriptor.destination().trim().is_empty() {
            return Err(RegistryError::EmptyDestination(
                descriptor.template().to_string(),
            ));
        }

        let template = descriptor
            .compile()
            .map_err(|source| RegistryError::InvalidRoute {
                destination: descriptor.destination().to_string(),
                source,
            })?;

        if self.by_destination.contains_key(descriptor.destination()) {
            return Err(RegistryError::DuplicateDestination(
                descriptor.destination().to_string(),
            ));
        }

        let shape = template.shape();
        if let Some(existing) = self.entries.iter().find(|e| e.template.shape() == shape) {
            return Err(RegistryError::Conflict {
                template: descriptor.template().to_string(),
                existing: existing.descriptor.template().to_string(),
            });
        }

        tracing::debug!(
            destination = descriptor.destination(),
            route = descriptor.template(),
            arguments = descriptor.arguments().len(),
            "Route registered"
        );

        self.by_destination
            .insert(descriptor.destination().to_string(), self.entries.len());
        self.entries.push(Entry {
            descriptor,
            template,
        });
        Ok(())
    }

    pub fn get(&self, destination: &str) -> Option<&RouteDescriptor> {
        self.by_destination
            .get(destination)
            .map(|&i| &self.entries[i].descriptor)
    }

    /// Find the descriptor whose template matches `path`.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute<'_>> {
        self.entries.iter().find_map(|entry| {
            entry.template.matches(path).map(|params| ResolvedRoute {
                descriptor: &entry.descriptor,
                params,
            })
        })
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
