//! Built-in destinations.
//!
//! Each screen is a `static` [`RouteDescriptor`] plus a graph function that
//! registers it with a [`NavGraphBuilder`](crate::host::NavGraphBuilder).

pub mod session_details;

use crate::routing::RouteDescriptor;

/// A screen reachable through the navigation host.
pub trait NavigationDestination {
    fn descriptor() -> &'static RouteDescriptor;

    /// The route template registered with the host.
    fn route() -> &'static str {
        Self::descriptor().template()
    }

    /// Destination id used for host bookkeeping.
    fn destination() -> &'static str {
        Self::descriptor().destination()
    }
}

static BUILTIN: [&RouteDescriptor; 1] = [&session_details::SESSION_DETAILS];

/// Every built-in destination, in registration order.
pub fn builtin() -> impl ExactSizeIterator<Item = &'static RouteDescriptor> {
    BUILTIN.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_descriptors_compile() {
        for descriptor in builtin() {
            assert!(
                descriptor.compile().is_ok(),
                "invalid built-in route {}",
                descriptor.template()
            );
        }
    }
}
