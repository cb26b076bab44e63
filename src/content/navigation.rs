//! Navigation Model
//!
//! The fixed, ordered sidebar entries.

use std::collections::HashSet;

use crate::error::{ContentError, ContentResult};
use crate::routing::{RouteError, ViewKind};

/// Symbolic icon identifier, mapped to a glyph by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// House outline
    Home,
    /// Page with text lines
    DocumentText,
}

impl Icon {
    /// Stable identifier, usable as a CSS hook or accessible name
    pub const fn name(self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::DocumentText => "document-text",
        }
    }
}

/// One sidebar link definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub icon: Icon,
    pub route: &'static str,
}

impl NavigationEntry {
    /// View shown once this entry is activated
    pub fn view(&self) -> Result<ViewKind, RouteError> {
        ViewKind::resolve(self.route)
    }
}

/// Sidebar entries in display order
pub const NAVIGATION: [NavigationEntry; 2] = [
    NavigationEntry {
        label: "Dashboard",
        icon: Icon::Home,
        route: "/",
    },
    NavigationEntry {
        label: "Documentation",
        icon: Icon::DocumentText,
        route: "/documentation",
    },
];

/// Check that routes are unique and each names exactly one view
pub fn validate(entries: &[NavigationEntry]) -> ContentResult<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        if !seen.insert(entry.route) {
            return Err(ContentError::DuplicateRoute(entry.route.to_string()));
        }

        let view = entry.view().map_err(|_| ContentError::UnresolvedRoute {
            label: entry.label.to_string(),
            route: entry.route.to_string(),
        })?;

        if view.path() != entry.route {
            return Err(ContentError::NonCanonicalRoute {
                label: entry.label.to_string(),
                route: entry.route.to_string(),
                canonical: view.path().to_string(),
            });
        }
    }

    Ok(())
}
