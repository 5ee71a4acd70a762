//! Navigation graph and host.
//!
//! # Responsibilities
//! - Register descriptors together with their screen factories
//! - Resolve navigation paths and deep links to screens
//! - Keep the back stack
//!
//! # Design Decisions
//! - The graph is frozen by `build()`; the route table never changes
//!   while the host is running
//! - The host owns its back stack and is driven from one thread
//!   (`&mut self`); the registry inside it is `Sync`
//! - Screen factories receive the back stack entry and decode their own
//!   arguments, as composable destinations do

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::host::deep_link::{DeepLinkError, DeepLinkResolver};
use crate::routing::{EncodingError, RegistryError, RouteDescriptor, RouteParams, RouteRegistry};

/// Invoked by a screen when the user asks to leave it.
pub type BackCallback = Arc<dyn Fn() + Send + Sync>;

type ScreenFactory<S> = Box<dyn Fn(&NavBackStackEntry) -> S + Send + Sync>;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("no route matches `{0}`")]
    NoRoute(String),

    #[error("unknown destination `{0}`")]
    UnknownDestination(String),

    #[error("deep links are not enabled")]
    DeepLinksDisabled,

    #[error(transparent)]
    DeepLink(#[from] DeepLinkError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// One visited destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBackStackEntry {
    destination: String,
    route: String,
    path: String,
    arguments: RouteParams,
}

impl NavBackStackEntry {
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The route template this entry matched.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The path that was navigated to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw (escaped) arguments as matched by the host.
    pub fn arguments(&self) -> &RouteParams {
        &self.arguments
    }
}

/// Collects destinations before the host starts.
pub struct NavGraphBuilder<S> {
    registry: RouteRegistry,
    factories: HashMap<String, ScreenFactory<S>>,
    deep_links: Option<DeepLinkResolver>,
}

impl<S> Default for NavGraphBuilder<S> {
    fn default() -> Self {
        Self {
            registry: RouteRegistry::new(),
            factories: HashMap::new(),
            deep_links: None,
        }
    }
}

impl<S> NavGraphBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a destination with the factory that renders it.
    pub fn composable<F>(
        &mut self,
        descriptor: RouteDescriptor,
        factory: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: Fn(&NavBackStackEntry) -> S + Send + Sync + 'static,
    {
        let destination = descriptor.destination().to_string();
        self.registry.register(descriptor)?;
        self.factories.insert(destination, Box::new(factory));
        Ok(self)
    }

    /// Accept deep links through `resolver`.
    pub fn deep_links(&mut self, resolver: DeepLinkResolver) -> &mut Self {
        self.deep_links = Some(resolver);
        self
    }

    pub fn build(self) -> NavHost<S> {
        tracing::info!(routes = self.registry.len(), "Navigation graph built");
        NavHost {
            registry: self.registry,
            factories: self.factories,
            deep_links: self.deep_links,
            back_stack: Vec::new(),
        }
    }
}

/// Matches paths against the graph and keeps the back stack.
pub struct NavHost<S> {
    registry: RouteRegistry,
    factories: HashMap<String, ScreenFactory<S>>,
    deep_links: Option<DeepLinkResolver>,
    back_stack: Vec<(NavBackStackEntry, S)>,
}

impl<S> NavHost<S> {
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Navigate to `path` and return the new current screen.
    pub fn navigate(&mut self, path: &str) -> Result<&S, NavError> {
        let Some(resolved) = self.registry.resolve(path) else {
            tracing::warn!(path, "No route matches navigation path");
            return Err(NavError::NoRoute(path.to_string()));
        };

        let destination = resolved.descriptor.destination();
        let factory = self
            .factories
            .get(destination)
            .ok_or_else(|| NavError::UnknownDestination(destination.to_string()))?;

        let entry = NavBackStackEntry {
            destination: destination.to_string(),
            route: resolved.descriptor.template().to_string(),
            path: path.to_string(),
            arguments: resolved.params,
        };
        let screen = factory(&entry);

        tracing::info!(
            destination = %entry.destination,
            route = %entry.route,
            depth = self.back_stack.len() + 1,
            "Navigated"
        );

        self.back_stack.push((entry, screen));
        Ok(self.top_screen())
    }

    /// Build the path for a registered destination and navigate to it.
    pub fn navigate_to(&mut self, destination: &str, values: &[(&str, &str)]) -> Result<&S, NavError> {
        let descriptor = self
            .registry
            .get(destination)
            .ok_or_else(|| NavError::UnknownDestination(destination.to_string()))?;
        let path = descriptor.build_path_with(values)?;
        self.navigate(&path)
    }

    /// Navigate to the route a deep link points at.
    pub fn handle_deep_link(&mut self, uri: &str) -> Result<&S, NavError> {
        let resolver = self.deep_links.as_ref().ok_or(NavError::DeepLinksDisabled)?;
        let path = resolver.route_path(uri)?;
        tracing::debug!(uri, path = %path, "Deep link resolved");
        self.navigate(&path)
    }

    /// Drop the current entry. Returns false if the back stack was empty.
    pub fn pop_back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some((entry, _)) => {
                tracing::debug!(destination = %entry.destination, "Popped back stack");
                true
            }
            None => false,
        }
    }

    pub fn current_entry(&self) -> Option<&NavBackStackEntry> {
        self.back_stack.last().map(|(entry, _)| entry)
    }

    pub fn current_screen(&self) -> Option<&S> {
        self.back_stack.last().map(|(_, screen)| screen)
    }

    pub fn back_stack_len(&self) -> usize {
        self.back_stack.len()
    }

    fn top_screen(&self) -> &S {
        match self.back_stack.last() {
            Some((_, screen)) => screen,
            None => unreachable!("back stack is non-empty after a push"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{ArgumentSpec, NavType};

    fn talks() -> RouteDescriptor {
        RouteDescriptor::new(
            "talks/{talkId}",
            "talks",
            vec![ArgumentSpec::owned("talkId", NavType::Long, false)],
        )
    }

    fn host() -> NavHost<String> {
        let mut graph = NavGraphBuilder::new();
        graph
            .composable(RouteDescriptor::new("home", "home", vec![]), |_| "home".to_string())
            .unwrap()
            .composable(talks(), |entry| {
                format!("talk {}", entry.arguments().get("talkId").unwrap_or("?"))
            })
            .unwrap();
        graph.deep_links(DeepLinkResolver::new("confetti"));
        graph.build()
    }

    #[test]
    fn test_navigate_and_pop() {
        let mut host = host();
        assert_eq!(host.navigate("home").unwrap(), "home");
        assert_eq!(host.navigate("talks/42").unwrap(), "talk 42");
        assert_eq!(host.back_stack_len(), 2);
        assert_eq!(host.current_entry().unwrap().route(), "talks/{talkId}");

        assert!(host.pop_back());
        assert_eq!(host.current_screen().unwrap(), "home");
        assert!(host.pop_back());
        assert!(!host.pop_back());
    }

    #[test]
    fn test_navigate_unknown_path() {
        let mut host = host();
        assert!(matches!(host.navigate("talks/forty-two"), Err(NavError::NoRoute(_))));
        assert_eq!(host.back_stack_len(), 0);
    }

    #[test]
    fn test_navigate_to() {
        let mut host = host();
        assert_eq!(host.navigate_to("talks", &[("talkId", "7")]).unwrap(), "talk 7");
        assert!(matches!(
            host.navigate_to("talks", &[("talkId", "")]),
            Err(NavError::Encoding(EncodingError::Empty { .. }))
        ));
        assert!(matches!(
            host.navigate_to("missing", &[]),
            Err(NavError::UnknownDestination(_))
        ));
    }

    #[test]
    fn test_deep_link() {
        let mut host = host();
        assert_eq!(host.handle_deep_link("confetti://app/talks/9").unwrap(), "talk 9");
        assert!(matches!(
            host.handle_deep_link("https://app/talks/9"),
            Err(NavError::DeepLink(DeepLinkError::Scheme { .. }))
        ));
    }

    #[test]
    fn test_deep_links_disabled() {
        let mut host: NavHost<String> = NavGraphBuilder::new().build();
        assert!(matches!(
            host.handle_deep_link("confetti://app/home"),
            Err(NavError::DeepLinksDisabled)
        ));
    }
}
