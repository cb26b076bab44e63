//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod card;
pub mod chart;
pub mod icons;
pub mod metric_card;
pub mod sidebar;
pub mod status;

pub use card::{Card, CardTitle};
pub use chart::AreaChart;
pub use icons::NavIcon;
pub use metric_card::MetricCell;
pub use sidebar::Sidebar;
pub use status::StatusList;
