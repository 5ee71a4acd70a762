//! Configuration schema definitions.
//!
//! This module defines the registry configuration file. All types derive
//! Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::routing::{ArgumentSpec, NavType, RouteDescriptor};

/// Root configuration for the route registry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Register the built-in destinations before configured routes.
    pub include_builtin: bool,

    /// Additional route definitions.
    pub routes: Vec<RouteConfig>,

    /// Deep link settings.
    pub deep_link: DeepLinkConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            routes: Vec::new(),
            deep_link: DeepLinkConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One configured destination.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Destination id for host bookkeeping.
    pub destination: String,

    /// Route template, e.g. `speaker_details_route/{speakerId}`.
    pub route: String,

    /// Declared arguments, in template order.
    #[serde(default)]
    pub arguments: Vec<ArgumentConfig>,
}

impl RouteConfig {
    pub fn to_descriptor(&self) -> RouteDescriptor {
        RouteDescriptor::new(
            self.route.clone(),
            self.destination.clone(),
            self.arguments
                .iter()
                .map(|a| ArgumentSpec::owned(a.name.clone(), a.nav_type, a.allow_empty))
                .collect(),
        )
    }
}

/// A declared route argument.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArgumentConfig {
    pub name: String,

    /// Placeholder type (default: string).
    #[serde(default, rename = "type")]
    pub nav_type: NavType,

    /// Accept the empty string as a value (string arguments only).
    #[serde(default)]
    pub allow_empty: bool,
}

/// Deep link configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeepLinkConfig {
    /// Accept deep links.
    pub enabled: bool,

    /// URI scheme (e.g., "confetti").
    pub scheme: String,

    /// Required URI host. Any host is accepted when unset.
    pub host: Option<String>,
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scheme: "confetti".to_string(),
            host: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter (trace, debug, info, warn, error, or a full directive).
    pub log_level: String,

    /// Colored output.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ansi: true,
        }
    }
}
