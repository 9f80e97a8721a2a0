//! Route path rendering
//!
//! A simple route's path matcher may carry a prefix, a regex and an exact
//! path at the same time. Each present matcher is rendered as `kind=value`
//! and joined with `"; "`, always in prefix, regex, exact order.

use crate::api::{PathMatcher, Route};
use std::fmt;

use super::NOT_APPLICABLE;

const SEPARATOR: &str = "; ";

/// One path-matching rule of a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatch {
    Prefix(String),
    Regex(String),
    Exact(String),
}

impl PathMatch {
    pub fn kind(&self) -> &'static str {
        match self {
            PathMatch::Prefix(_) => "prefix",
            PathMatch::Regex(_) => "regex",
            PathMatch::Exact(_) => "exact",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            PathMatch::Prefix(v) | PathMatch::Regex(v) | PathMatch::Exact(v) => v,
        }
    }
}

impl fmt::Display for PathMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind(), self.value())
    }
}

/// The matchers present on `matcher`, in rendering order
pub fn path_matches(matcher: &PathMatcher) -> Vec<PathMatch> {
    [
        matcher.prefix.clone().map(PathMatch::Prefix),
        matcher.regex.clone().map(PathMatch::Regex),
        matcher.path.clone().map(PathMatch::Exact),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Render the route column for `route`; `NA` when it has no path matcher
pub fn render_route_path(route: &Route) -> String {
    let matches = route.path().map(path_matches).unwrap_or_default();
    if matches.is_empty() {
        return NOT_APPLICABLE.to_string();
    }
    matches
        .iter()
        .map(PathMatch::to_string)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
