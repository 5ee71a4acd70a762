//! Typed navigation-route registry for the Confetti conference app.
//!
//! Screens are described by [`RouteDescriptor`]s: a route template such as
//! `session_details_route/{sessionId}`, a destination id and the declared
//! arguments. Descriptors build navigation paths from argument values and
//! read the values back out of host-matched parameters, hiding the escaping
//! in between.
//!
//! ```
//! use confetti_nav::destinations::session_details::SESSION_DETAILS;
//! use confetti_nav::routing::RouteRegistry;
//!
//! let registry = RouteRegistry::with_builtin().unwrap();
//! let path = SESSION_DETAILS.build_path("2024/keynote").unwrap();
//! let resolved = registry.resolve(&path).unwrap();
//! assert_eq!(resolved.descriptor.extract_argument(&resolved.params), "2024/keynote");
//! ```

pub mod config;
pub mod destinations;
pub mod host;
pub mod observability;
pub mod routing;

pub use config::RegistryConfig;
pub use host::{NavGraphBuilder, NavHost};
pub use routing::{RouteDescriptor, RouteRegistry};
