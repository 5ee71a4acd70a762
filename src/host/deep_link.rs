//! Deep link resolution.
//!
//! Turns `confetti://host/session_details_route/a%2Fb` into the route
//! path `session_details_route/a%2Fb`. Escaped segments are passed through
//! untouched so the registry sees exactly what the URI carried.
//!
//! `Url` checks the scheme and host, but the path is cut from the raw
//! input: `Url` drops `.` and `..` segments, which are valid argument values.

use thiserror::Error;
use url::Url;

use crate::config::schema::DeepLinkConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    #[error("invalid deep link `{uri}`: {source}")]
    Parse {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme `{actual}`, expected `{expected}`")]
    Scheme { expected: String, actual: String },

    #[error("unsupported host `{actual}`, expected `{expected}`")]
    Host { expected: String, actual: String },
}

/// Accepts deep links for one scheme and, optionally, one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkResolver {
    scheme: String,
    host: Option<String>,
}

impl DeepLinkResolver {
    /// Resolver for `scheme`. Any host is accepted and ignored.
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into().to_lowercase(),
            host: None,
        }
    }

    /// Only accept links addressed to `host` (case-insensitive).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into().to_lowercase());
        self
    }

    pub fn from_config(config: &DeepLinkConfig) -> Self {
        let resolver = Self::new(&config.scheme);
        match &config.host {
            Some(host) => resolver.with_host(host),
            None => resolver,
        }
    }

    /// Returns true if `input` looks like a URI for this resolver's scheme.
    pub fn is_deep_link(&self, input: &str) -> bool {
        input
            .split_once(':')
            .is_some_and(|(scheme, _)| scheme.eq_ignore_ascii_case(&self.scheme))
    }

    /// Extract the route path (without leading `/`, query or fragment).
    pub fn route_path(&self, uri: &str) -> Result<String, DeepLinkError> {
        let url = Url::parse(uri).map_err(|source| DeepLinkError::Parse {
            uri: uri.to_string(),
            source,
        })?;

        if url.scheme() != self.scheme {
            return Err(DeepLinkError::Scheme {
                expected: self.scheme.clone(),
                actual: url.scheme().to_string(),
            });
        }

        if let Some(expected) = &self.host {
            let actual = url.host_str().unwrap_or_default().to_lowercase();
            if &actual != expected {
                return Err(DeepLinkError::Host {
                    expected: expected.clone(),
                    actual,
                });
            }
        }

        Ok(raw_path(uri).to_string())
    }
}

/// Path of `uri` as written, without authority, query, fragment or
/// leading slashes.
fn raw_path(uri: &str) -> &str {
    let rest = uri.split_once(':').map_or(uri, |(_, rest)| rest);
    let rest = match rest.strip_prefix("//") {
        Some(authority) => authority
            .find(['/', '?', '#'])
            .map_or("", |i| &authority[i..]),
        None => rest,
    };
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    rest[..end].trim_start_matches('/')
}
