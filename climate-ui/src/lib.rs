//! Climate Dashboard UI
//!
//! Leptos components for the dashboard. All rendered values come from
//! `climate_dashboard::content`; nothing is fetched at runtime.
//!
//! - [`app`]: Router and page layout
//! - [`components`]: Sidebar, cards, chart, icons
//! - [`pages`]: One component per view

pub mod app;
pub mod components;
pub mod pages;

pub use app::App;
