//! Route template parsing and matching.
//!
//! # Responsibilities
//! - Parse `literal/{placeholder}` templates into segments
//! - Check templates against a descriptor's declared arguments
//! - Match request paths and capture raw placeholder values
//!
//! # Design Decisions
//! - Placeholders occupy a whole segment
//! - Literal matching is case-sensitive
//! - No regex: matching is a single pass over the segments
//! - Query and fragment are ignored when matching

use std::collections::HashSet;

use crate::routing::descriptor::{ArgumentSpec, NavType};
use crate::routing::error::TemplateError;
use crate::routing::params::RouteParams;

/// One `/`-separated piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder {
        name: String,
        nav_type: NavType,
        allow_empty: bool,
    },
}

/// A parsed route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Parse a template. Placeholders are typed as strings until
    /// [`bind`](Self::bind) attaches the declared argument types.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        if template.is_empty() {
            return Err(TemplateError::Empty);
        }
        if template.starts_with('/') {
            return Err(TemplateError::LeadingSlash {
                template: template.to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut segments = Vec::new();
        for raw in template.split('/') {
            if raw.is_empty() {
                return Err(TemplateError::EmptySegment {
                    template: template.to_string(),
                });
            }

            let malformed = || TemplateError::MalformedSegment {
                template: template.to_string(),
                segment: raw.to_string(),
            };

            let segment = match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => {
                    if !is_valid_name(name) {
                        return Err(malformed());
                    }
                    if !seen.insert(name) {
                        return Err(TemplateError::DuplicatePlaceholder {
                            template: template.to_string(),
                            name: name.to_string(),
                        });
                    }
                    Segment::Placeholder {
                        name: name.to_string(),
                        nav_type: NavType::String,
                        allow_empty: false,
                    }
                }
                None => {
                    if raw.contains(['{', '}']) {
                        return Err(malformed());
                    }
                    Segment::Literal(raw.to_string())
                }
            };
            segments.push(segment);
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// Check the template against the declared arguments and attach their
    /// types. Every argument must have exactly one placeholder and every
    /// placeholder must be declared.
    pub fn bind(mut self, arguments: &[ArgumentSpec]) -> Result<Self, TemplateError> {
        let mut declared = HashSet::new();
        for arg in arguments {
            if !declared.insert(arg.name()) {
                return Err(TemplateError::DuplicateArgument {
                    name: arg.name().to_string(),
                });
            }
        }

        for segment in &mut self.segments {
            if let Segment::Placeholder {
                name,
                nav_type,
                allow_empty,
            } = segment
            {
                match arguments.iter().find(|a| a.name() == name.as_str()) {
                    Some(arg) => {
                        *nav_type = arg.nav_type();
                        *allow_empty = arg.accepts_empty();
                    }
                    None => {
                        return Err(TemplateError::UndeclaredPlaceholder {
                            template: self.source.clone(),
                            name: name.clone(),
                        })
                    }
                }
            }
        }

        if let Some(missing) = arguments
            .iter()
            .find(|a| !self.placeholders().any(|p| p == a.name()))
        {
            return Err(TemplateError::MissingPlaceholder {
                template: self.source.clone(),
                name: missing.name().to_string(),
            });
        }

        Ok(self)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Template with placeholder names erased. Two templates with the same
    /// shape match the same paths.
    pub fn shape(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(l) => l.as_str(),
                Segment::Placeholder { .. } => "{}",
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Match a path against this template.
    ///
    /// Returns the raw (still escaped) placeholder values on success.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = strip_path(path);
        let mut params = RouteParams::new();
        let mut parts = path.split('/');

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) => {
                    if part != literal {
                        return None;
                    }
                }
                Segment::Placeholder {
                    name,
                    nav_type,
                    allow_empty,
                } => {
                    let accepted = if part.is_empty() {
                        *allow_empty
                    } else {
                        nav_type.accepts_raw(part)
                    };
                    if !accepted {
                        return None;
                    }
                    params.insert(name.clone(), part);
                }
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }

    /// Substitute already-escaped values. Returns `None` if a placeholder
    /// has no value.
    pub fn render(&self, params: &RouteParams) -> Option<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => parts.push(literal.as_str()),
                Segment::Placeholder { name, .. } => parts.push(params.get(name)?),
            }
        }
        Some(parts.join("/"))
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Drop fragment, query and a single leading slash.
fn strip_path(path: &str) -> &str {
    let path = path.split_once('#').map_or(path, |(p, _)| p);
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    path.strip_prefix('/').unwrap_or(path)
}
