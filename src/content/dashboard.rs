//! Dashboard Content
//!
//! Literal time series, key metrics and status messages shown on the
//! dashboard view.

use chrono::NaiveDate;

use crate::chart::ChartSeries;
use crate::error::{ContentError, ContentResult};

/// Page heading
pub const TITLE: &str = "Climate Engineering Dashboard";

/// Title of the trend chart card
pub const CHART_TITLE: &str = "Global Temperature and CO2 Trends";

/// Title of the key metrics card
pub const KEY_METRICS_TITLE: &str = "Key Metrics";

/// Title of the status card
pub const STATUS_TITLE: &str = "Status Updates";

/// Format of [`TimeSeriesPoint::date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One monthly climate sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    /// ISO-8601 calendar date
    pub date: &'static str,
    /// Degrees Celsius
    pub temperature: f64,
    /// Parts per million
    pub co2: f64,
}

impl TimeSeriesPoint {
    /// Parse the literal date
    pub fn parsed_date(&self) -> ContentResult<NaiveDate> {
        NaiveDate::parse_from_str(self.date, DATE_FORMAT).map_err(|e| {
            ContentError::InvalidDate {
                date: self.date.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

/// Labelled summary value displayed as a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMetric {
    pub label: &'static str,
    /// Display value including its unit
    pub value: &'static str,
    /// Series this metric summarises; drives the accent colour
    pub series: ChartSeries,
}

/// Display severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Ok,
}

/// Status line shown in the status card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: &'static str,
    pub severity: Severity,
}

/// Chart samples, ascending by date
pub const TIME_SERIES: [TimeSeriesPoint; 3] = [
    TimeSeriesPoint {
        date: "2023-01-01",
        temperature: 20.0,
        co2: 415.0,
    },
    TimeSeriesPoint {
        date: "2023-02-01",
        temperature: 21.0,
        co2: 417.0,
    },
    TimeSeriesPoint {
        date: "2023-03-01",
        temperature: 22.0,
        co2: 419.0,
    },
];

pub const KEY_METRICS: [KeyMetric; 2] = [
    KeyMetric {
        label: "Average Temperature",
        value: "21°C",
        series: ChartSeries::Temperature,
    },
    KeyMetric {
        label: "CO2 Levels",
        value: "417 ppm",
        series: ChartSeries::Co2,
    },
];

pub const STATUS_MESSAGES: [StatusMessage; 2] = [
    StatusMessage {
        text: "Systems operating normally",
        severity: Severity::Ok,
    },
    StatusMessage {
        text: "Data last updated: 2 hours ago",
        severity: Severity::Info,
    },
];

/// Check that every date parses and dates are strictly increasing
pub fn validate_time_series(points: &[TimeSeriesPoint]) -> ContentResult<()> {
    let mut previous: Option<(NaiveDate, &str)> = None;

    for point in points {
        let date = point.parsed_date()?;
        if let Some((prev_date, prev_raw)) = previous {
            if date <= prev_date {
                return Err(ContentError::NotChronological {
                    previous: prev_raw.to_string(),
                    next: point.date.to_string(),
                });
            }
        }
        previous = Some((date, point.date));
    }

    Ok(())
}
