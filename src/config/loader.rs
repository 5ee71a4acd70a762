//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::RegistryConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::{RegistryError, RouteRegistry};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RegistryConfig, ConfigError> {
    let config: RegistryConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RegistryConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;

    tracing::info!(
        path = %path.display(),
        routes = config.routes.len(),
        include_builtin = config.include_builtin,
        "Configuration loaded"
    );
    Ok(config)
}

/// Replace the configured log filter, rejecting filters that do not parse.
pub fn override_log_level(
    mut config: RegistryConfig,
    level: impl Into<String>,
) -> Result<RegistryConfig, ConfigError> {
    config.observability.log_level = level.into();
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Build the route registry a configuration describes.
pub fn build_registry(config: &RegistryConfig) -> Result<RouteRegistry, ConfigError> {
    Ok(RouteRegistry::from_config(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::NavType;
    use std::io::Write;

    const SAMPLE: &str = r#"
include_builtin = true

[deep_link]
scheme = "confetti"
host = "app"

[observability]
log_level = "debug"

[[routes]]
destination = "speaker_details_destination"
route = "speaker_details_route/{speakerId}"

[[routes.arguments]]
name = "speakerId"

[[routes]]
destination = "schedule_destination"
route = "schedule/{day}"
arguments = [{ name = "day", type = "int" }]
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].arguments[0].nav_type, NavType::String);
        assert_eq!(config.routes[1].arguments[0].nav_type, NavType::Int);
        assert_eq!(config.deep_link.host.as_deref(), Some("app"));
        assert!(config.deep_link.enabled);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.include_builtin);
        assert!(config.routes.is_empty());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_config("[[routes]]\ndestination = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config(
            "[[routes]]\ndestination = \"talks\"\nroute = \"talks/{talkId}\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Validation failed: route #0 (`talks`)"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.routes[0].destination, "speaker_details_destination");
    }

    #[test]
    fn test_override_log_level() {
        let config = override_log_level(RegistryConfig::default(), "debug").unwrap();
        assert_eq!(config.observability.log_level, "debug");

        let err =
            override_log_level(RegistryConfig::default(), "confetti_nav=verbose").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(
                errors,
                vec![ValidationError::InvalidLogLevel("confetti_nav=verbose".into())]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_registry_reports_registry_errors() {
        // Configs assembled in code bypass parse_config's validation.
        let mut config = RegistryConfig::default();
        config.routes.push(crate::config::schema::RouteConfig {
            destination: "person_details_destination".into(),
            route: "people".into(),
            arguments: vec![],
        });
        let err = build_registry(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Registry(RegistryError::DuplicateDestination(_))
        ));
        assert!(err.to_string().starts_with("Registry error: destination"));

        let registry = build_registry(&RegistryConfig::default()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/confetti-nav.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
