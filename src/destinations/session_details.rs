//! Session details screen.

use crate::destinations::NavigationDestination;
use crate::host::{BackCallback, NavBackStackEntry, NavGraphBuilder};
use crate::routing::{ArgumentSpec, EncodingError, RegistryError, RouteDescriptor};

pub const SESSION_ID_ARG: &str = "sessionId";

const ARGUMENTS: &[ArgumentSpec] = &[ArgumentSpec::string(SESSION_ID_ARG)];

// The destination id does not follow the screen name. Hosts and analytics
// already key on it, so it stays.
pub static SESSION_DETAILS: RouteDescriptor = RouteDescriptor::from_static(
    "session_details_route/{sessionId}",
    "person_details_destination",
    ARGUMENTS,
);

pub struct SessionDetailsDestination;

impl NavigationDestination for SessionDetailsDestination {
    fn descriptor() -> &'static RouteDescriptor {
        &SESSION_DETAILS
    }
}

impl SessionDetailsDestination {
    /// Path to the details of `session_id`.
    pub fn create_navigation_route(session_id: &str) -> Result<String, EncodingError> {
        SESSION_DETAILS.build_path(session_id)
    }

    /// Decoded session id of a session details entry.
    ///
    /// # Panics
    ///
    /// Panics if the entry carries no session id.
    pub fn from_nav_args(entry: &NavBackStackEntry) -> String {
        SESSION_DETAILS.extract_argument(entry.arguments())
    }
}

/// Register the session details screen. `screen` receives the decoded
/// session id and the callback to invoke when the user leaves.
pub fn session_details_graph<S, F>(
    graph: &mut NavGraphBuilder<S>,
    on_back: BackCallback,
    screen: F,
) -> Result<(), RegistryError>
where
    F: Fn(String, BackCallback) -> S + Send + Sync + 'static,
{
    graph.composable(SESSION_DETAILS.clone(), move |entry| {
        screen(SessionDetailsDestination::from_nav_args(entry), on_back.clone())
    })?;
    Ok(())
}
