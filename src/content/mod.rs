//! Dashboard Content
//!
//! Every value the frontend renders is a compile-time literal defined here:
//!
//! - [`navigation`]: sidebar entries
//! - [`dashboard`]: time series, key metrics and status messages
//! - [`documentation`]: documentation sections
//! - [`site`]: document title and description
//!
//! [`validate`] checks the invariants of these tables. The server runs it at
//! startup so a broken edit fails before anything is served.

pub mod dashboard;
pub mod documentation;
pub mod navigation;
pub mod site;

pub use dashboard::{KeyMetric, Severity, StatusMessage, TimeSeriesPoint};
pub use documentation::DocSection;
pub use navigation::{Icon, NavigationEntry, NAVIGATION};

use crate::error::ContentResult;

/// Validate all compiled-in content
pub fn validate() -> ContentResult<()> {
    navigation::validate(&NAVIGATION)?;
    dashboard::validate_time_series(&dashboard::TIME_SERIES)?;

    tracing::debug!(
        entries = NAVIGATION.len(),
        points = dashboard::TIME_SERIES.len(),
        sections = documentation::SECTIONS.len(),
        "Content validated"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_content_is_valid() {
        assert!(validate().is_ok());
    }
}
