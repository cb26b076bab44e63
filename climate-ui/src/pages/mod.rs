//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod documentation;

pub use dashboard::DashboardView;
pub use documentation::DocumentationView;
