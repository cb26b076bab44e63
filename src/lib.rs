//! # Climate Dashboard
//!
//! Climate Engineering Dashboard - the content, navigation model and chart
//! geometry behind a small client-side climate metrics dashboard, plus a
//! server for the compiled frontend bundle.
//!
//! ## Modules
//!
//! - [`content`]: Literal dashboard, documentation and navigation content
//! - [`routing`]: Path to view resolution
//! - [`chart`]: Chart rows, value bounds and canvas projection
//! - [`config`]: TOML configuration with environment overrides (`server`)
//! - [`server`]: Axum server for the frontend bundle (`server`)
//!
//! The frontend (`climate-ui`) depends on this crate with default features
//! disabled, which leaves only the pure modules.
//!
//! ## Quick Start
//!
//! ```rust
//! use climate_dashboard::chart::{self, Bounds, ChartSeries};
//! use climate_dashboard::content::dashboard::TIME_SERIES;
//! use climate_dashboard::routing::ViewKind;
//!
//! assert_eq!(ViewKind::resolve("/documentation"), Ok(ViewKind::Documentation));
//!
//! let rows = chart::rows(&TIME_SERIES, &ChartSeries::ALL);
//! let bounds = Bounds::of(&rows).expect("series is not empty");
//! assert!(bounds.min < 20.0 && bounds.max > 419.0);
//! ```

pub mod chart;
pub mod content;
pub mod error;
pub mod routing;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

pub use chart::{Bounds, ChartRow, ChartSeries, Frame, SeriesColor};

pub use content::{
    DocSection, Icon, KeyMetric, NavigationEntry, Severity, StatusMessage, TimeSeriesPoint,
    NAVIGATION,
};

pub use error::{ContentError, ContentResult};

pub use routing::{RouteError, ViewKind};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LogFormat, LoggingConfig, ServerConfig};

#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError};
