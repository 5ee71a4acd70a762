//! Shared fixtures for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use confetti_nav::destinations::session_details::session_details_graph;
use confetti_nav::host::{BackCallback, DeepLinkResolver, NavGraphBuilder, NavHost};
use confetti_nav::routing::{ArgumentSpec, NavType, RouteDescriptor};

/// Stand-in for rendered UI screens.
pub enum Screen {
    Sessions,
    SessionDetails {
        session_id: String,
        on_back: BackCallback,
    },
    Schedule {
        day: String,
    },
}

impl Screen {
    pub fn session_id(&self) -> Option<&str> {
        match self {
            Screen::SessionDetails { session_id, .. } => Some(session_id),
            _ => None,
        }
    }

    /// Simulate the user pressing back on this screen.
    pub fn press_back(&self) {
        if let Screen::SessionDetails { on_back, .. } = self {
            on_back();
        }
    }
}

/// Host with a sessions list, session details and a typed schedule route.
/// The returned counter tracks back presses on session details.
#[allow(dead_code)]
pub fn build_host() -> (NavHost<Screen>, Arc<AtomicUsize>) {
    let back_presses = Arc::new(AtomicUsize::new(0));
    let counter = back_presses.clone();
    let on_back: BackCallback = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut graph = NavGraphBuilder::new();
    graph
        .composable(RouteDescriptor::new("sessions", "sessions", vec![]), |_| {
            Screen::Sessions
        })
        .unwrap()
        .composable(
            RouteDescriptor::new(
                "schedule/{day}",
                "schedule",
                vec![ArgumentSpec::owned("day", NavType::Int, false)],
            ),
            |entry| Screen::Schedule {
                day: entry.arguments().get("day").unwrap_or_default().to_string(),
            },
        )
        .unwrap();
    session_details_graph(&mut graph, on_back, |session_id, on_back| {
        Screen::SessionDetails {
            session_id,
            on_back,
        }
    })
    .unwrap();
    graph.deep_links(DeepLinkResolver::new("confetti").with_host("confetti.app"));

    (graph.build(), back_presses)
}
