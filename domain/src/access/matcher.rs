//! Path patterns for protected routes.
//!
//! Supported syntax, one pattern per route:
//!
//! | Segment   | Matches                                   |
//! |-----------|-------------------------------------------|
//! | `chat`    | the literal segment                       |
//! | `:id`     | exactly one segment                       |
//! | `:path*`  | zero or more trailing segments (last only) |
//! | `:path+`  | one or more trailing segments (last only)  |
//!
//! So `/dashboard/:path*` matches `/dashboard`, `/dashboard/` and
//! `/dashboard/a/b`, while `/chat` matches only `/chat`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid route pattern '{pattern}': {reason}")]
pub struct PatternError {
    pub pattern: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param,
    ZeroOrMore,
    OneOrMore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatcher {
    pattern: String,
    segments: Vec<Segment>,
}

impl RouteMatcher {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let fail = |reason: &str| PatternError {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(fail("must start with '/'"));
        }

        let raw: Vec<&str> = split_segments(pattern).collect();
        let mut segments = Vec::with_capacity(raw.len());
        for (index, part) in raw.iter().enumerate() {
            let is_last = index + 1 == raw.len();
            let segment = match part.strip_prefix(':') {
                None => Segment::Literal((*part).to_string()),
                Some(name) => {
                    let (name, segment) = if let Some(n) = name.strip_suffix('*') {
                        (n, Segment::ZeroOrMore)
                    } else if let Some(n) = name.strip_suffix('+') {
                        (n, Segment::OneOrMore)
                    } else {
                        (name, Segment::Param)
                    };
                    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                        return Err(fail("parameter name must be alphanumeric"));
                    }
                    if segment != Segment::Param && !is_last {
                        return Err(fail("repeating parameter must be the last segment"));
                    }
                    segment
                }
            };
            segments.push(segment);
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match a request path (no query string).
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = split_segments(path).collect();
        let mut index = 0;

        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    if parts.get(index) != Some(&lit.as_str()) {
                        return false;
                    }
                    index += 1;
                }
                Segment::Param => {
                    if index >= parts.len() {
                        return false;
                    }
                    index += 1;
                }
                Segment::ZeroOrMore => return true,
                Segment::OneOrMore => return index < parts.len(),
            }
        }

        index == parts.len()
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl FromStr for RouteMatcher {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RouteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
