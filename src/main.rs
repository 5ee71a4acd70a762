//! confetti-nav CLI.
//!
//! Inspect the route registry, build navigation paths and resolve paths or
//! deep links the way the navigation host does.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use confetti_nav::config::{self, RegistryConfig};
use confetti_nav::host::{DeepLinkResolver, NavError};
use confetti_nav::observability::init_logging;

#[derive(Parser)]
#[command(name = "confetti-nav")]
#[command(about = "Inspect and exercise the navigation route registry", long_about = None)]
struct Cli {
    /// Registry configuration (TOML). Built-in routes only when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, overrides the configured level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered routes
    Routes,
    /// Build the navigation path for a destination
    Build {
        destination: String,
        /// Value of the route's single argument
        value: Option<String>,
        /// Named argument value, repeatable
        #[arg(long = "arg", value_name = "NAME=VALUE", value_parser = parse_pair)]
        args: Vec<(String, String)>,
    },
    /// Resolve a path or deep link to its destination and arguments
    Resolve { target: String },
    /// Validate the configuration
    Check,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => RegistryConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config = config::override_log_level(config, level)?;
    }
    init_logging(&config.observability);

    let registry = config::build_registry(&config)?;

    match cli.command {
        Commands::Routes => {
            let routes: Vec<_> = registry.iter().collect();
            print_json(&json!(routes))?;
        }
        Commands::Build {
            destination,
            value,
            args,
        } => {
            let descriptor = registry
                .get(&destination)
                .ok_or_else(|| NavError::UnknownDestination(destination.clone()))?;
            let path = match value {
                Some(value) => descriptor.build_path(&value)?,
                None => {
                    let pairs: Vec<(&str, &str)> =
                        args.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
                    descriptor.build_path_with(&pairs)?
                }
            };
            println!("{path}");
        }
        Commands::Resolve { target } => {
            let resolver = config
                .deep_link
                .enabled
                .then(|| DeepLinkResolver::from_config(&config.deep_link));
            let path = match &resolver {
                Some(resolver) if resolver.is_deep_link(&target) => resolver.route_path(&target)?,
                _ => target,
            };

            let resolved = registry
                .resolve(&path)
                .ok_or_else(|| NavError::NoRoute(path.clone()))?;
            let mut arguments = BTreeMap::new();
            for (name, _) in resolved.params.iter() {
                arguments.insert(name, resolved.descriptor.try_extract(name, &resolved.params)?);
            }
            print_json(&json!({
                "destination": resolved.descriptor.destination(),
                "route": resolved.descriptor.template(),
                "path": path,
                "arguments": arguments,
            }))?;
        }
        Commands::Check => {
            let destinations: Vec<_> = registry.iter().map(|d| d.destination()).collect();
            print_json(&json!({
                "valid": true,
                "routes": registry.len(),
                "destinations": destinations,
            }))?;
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
