//! Navigation host.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     destination graphs (descriptor + screen factory)
//!     → NavGraphBuilder::composable (registry.register)
//!     → build() → NavHost
//!
//! Navigation event (path or deep link):
//!     deep_link.rs (URI → route path)
//!     → registry resolve (template match, raw params)
//!     → screen factory(NavBackStackEntry) → screen
//!     → push onto back stack
//!
//! Back request:
//!     screen invokes its BackCallback
//!     → caller pops the back stack
//! ```

pub mod deep_link;
pub mod nav_host;

pub use deep_link::{DeepLinkError, DeepLinkResolver};
pub use nav_host::{BackCallback, NavBackStackEntry, NavError, NavGraphBuilder, NavHost};
