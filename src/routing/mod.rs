//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request (destination + argument values)
//!     → descriptor.rs (check values, escape via codec.rs)
//!     → path string
//!
//! Host navigation event (path)
//!     → registry.rs (route lookup)
//!     → template.rs (match segments, capture raw params)
//!     → descriptor.rs (unescape argument values)
//!
//! Route Compilation (at startup):
//!     RouteDescriptor[]
//!     → parse templates, check declared arguments
//!     → Freeze as immutable RouteRegistry
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same path always resolves to the same route
//! - Escaping is hidden from callers on both sides

pub mod codec;
pub mod descriptor;
pub mod error;
pub mod params;
pub mod registry;
pub mod template;

pub use descriptor::{ArgumentSpec, NavType, RouteDescriptor};
pub use error::{EncodingError, RegistryError, RouteError, TemplateError};
pub use params::RouteParams;
pub use registry::{ResolvedRoute, RouteRegistry};
pub use template::RouteTemplate;
