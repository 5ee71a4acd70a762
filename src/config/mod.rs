//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RegistryConfig (validated, immutable)
//!     → RouteRegistry::from_config
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; the route table never changes after
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{build_registry, load_config, override_log_level, parse_config, ConfigError};
pub use schema::{ArgumentConfig, DeepLinkConfig, ObservabilityConfig, RegistryConfig, RouteConfig};
pub use validation::ValidationError;
