//! Registry construction from configuration.

use confetti_nav::config::parse_config;
use confetti_nav::routing::{RegistryError, RouteRegistry};
use confetti_nav::RegistryConfig;

#[test]
fn test_registry_from_config() {
    let config = parse_config(
        r#"
[[routes]]
destination = "speaker_details_destination"
route = "speaker_details_route/{speakerId}"
arguments = [{ name = "speakerId" }]
"#,
    )
    .unwrap();

    let registry = RouteRegistry::from_config(&config).unwrap();
    assert_eq!(registry.len(), 2);

    let speaker = registry.get("speaker_details_destination").unwrap();
    let path = speaker.build_path("jake/wharton").unwrap();
    assert_eq!(path, "speaker_details_route/jake%2Fwharton");

    let resolved = registry.resolve(&path).unwrap();
    assert_eq!(resolved.descriptor.destination(), "speaker_details_destination");
    assert_eq!(resolved.descriptor.extract_argument(&resolved.params), "jake/wharton");
}

#[test]
fn test_registry_without_builtin() {
    let config = RegistryConfig {
        include_builtin: false,
        ..RegistryConfig::default()
    };
    let registry = RouteRegistry::from_config(&config).unwrap();
    assert!(registry.is_empty());
    assert!(registry.resolve("session_details_route/abc").is_none());
}

#[test]
fn test_unvalidated_config_still_guarded_by_registry() {
    // Configs built in code skip the loader's validation.
    let mut config = RegistryConfig::default();
    config.routes.push(confetti_nav::config::RouteConfig {
        destination: "person_details_destination".into(),
        route: "people/{id}".into(),
        arguments: vec![],
    });
    assert!(matches!(
        RouteRegistry::from_config(&config),
        Err(RegistryError::InvalidRoute { .. })
    ));
}
