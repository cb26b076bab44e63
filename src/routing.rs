//! Route Resolution
//!
//! The dashboard exposes exactly two addressable paths. Each maps to one
//! [`ViewKind`]; every other path resolves to [`RouteError::NotFound`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Top-level view bound to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Charts, key metrics and status updates
    Dashboard,
    /// Static documentation page
    Documentation,
}

impl ViewKind {
    /// All views, in navigation order
    pub const ALL: [ViewKind; 2] = [ViewKind::Dashboard, ViewKind::Documentation];

    /// The initial view of a fresh session
    pub const INITIAL: ViewKind = ViewKind::Dashboard;

    /// Path this view is mounted at
    pub const fn path(self) -> &'static str {
        match self {
            ViewKind::Dashboard => "/",
            ViewKind::Documentation => "/documentation",
        }
    }

    /// Resolve a request or location path to its view
    ///
    /// Trailing slashes are ignored and an empty path is treated as `/`.
    pub fn resolve(path: &str) -> Result<ViewKind, RouteError> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        ViewKind::ALL
            .into_iter()
            .find(|view| view.path() == normalized)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Dashboard => write!(f, "dashboard"),
            ViewKind::Documentation => write!(f, "documentation"),
        }
    }
}

impl FromStr for ViewKind {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::resolve(s)
    }
}

/// Routing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No view is mounted at this path
    #[error("No view for path {0:?}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(ViewKind::resolve("/"), Ok(ViewKind::Dashboard));
        assert_eq!(
            ViewKind::resolve("/documentation"),
            Ok(ViewKind::Documentation)
        );
    }

    #[test]
    fn test_paths_are_bijective() {
        for view in ViewKind::ALL {
            assert_eq!(ViewKind::resolve(view.path()), Ok(view));
        }
        assert_ne!(ViewKind::Dashboard.path(), ViewKind::Documentation.path());
    }

    #[test]
    fn test_trailing_slash_and_empty_path() {
        assert_eq!(
            ViewKind::resolve("/documentation/"),
            Ok(ViewKind::Documentation)
        );
        assert_eq!(ViewKind::resolve(""), Ok(ViewKind::Dashboard));
        assert_eq!(ViewKind::resolve("//"), Ok(ViewKind::Dashboard));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            ViewKind::resolve("/settings"),
            Err(RouteError::NotFound("/settings".to_string()))
        );
        assert!(ViewKind::resolve("/documentation/extra").is_err());
        assert!("/Documentation".parse::<ViewKind>().is_err());
    }

    #[test]
    fn test_initial_view() {
        assert_eq!(ViewKind::INITIAL, ViewKind::Dashboard);
        assert_eq!(ViewKind::INITIAL.path(), "/");
    }
}
