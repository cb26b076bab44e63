//! Chart Model
//!
//! Input and geometry for the dashboard's time-series chart. The frontend
//! only paints what this module computes:
//!
//! - [`rows`]: ordered `{x: date, series: value}` rows, one per sample
//! - [`Bounds`]: padded value range shared by all series
//! - [`Frame`]: projection of (row index, value) onto canvas pixels

use chrono::NaiveDate;

use crate::content::dashboard::DATE_FORMAT;
use crate::content::TimeSeriesPoint;

/// A plotted series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSeries {
    Temperature,
    Co2,
}

impl ChartSeries {
    /// All series, in legend and paint order
    pub const ALL: [ChartSeries; 2] = [ChartSeries::Temperature, ChartSeries::Co2];

    /// Legend name
    pub const fn name(self) -> &'static str {
        match self {
            ChartSeries::Temperature => "Temperature",
            ChartSeries::Co2 => "CO2",
        }
    }

    pub const fn color(self) -> SeriesColor {
        match self {
            ChartSeries::Temperature => SeriesColor::Indigo,
            ChartSeries::Co2 => SeriesColor::Cyan,
        }
    }

    /// Value of this series in a sample
    pub fn value(self, point: &TimeSeriesPoint) -> f64 {
        match self {
            ChartSeries::Temperature => point.temperature,
            ChartSeries::Co2 => point.co2,
        }
    }
}

/// Series palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesColor {
    Indigo,
    Cyan,
}

impl SeriesColor {
    /// Stroke and fill colour (Tailwind 500 shade)
    pub const fn hex(self) -> &'static str {
        match self {
            SeriesColor::Indigo => "#6366f1",
            SeriesColor::Cyan => "#06b6d4",
        }
    }

    /// Tailwind palette name
    pub const fn name(self) -> &'static str {
        match self {
            SeriesColor::Indigo => "indigo",
            SeriesColor::Cyan => "cyan",
        }
    }
}

/// One x position with a value per series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// ISO-8601 date of the sample
    pub x: &'static str,
    pub values: Vec<(ChartSeries, f64)>,
}

impl ChartRow {
    /// Value of `series` in this row
    pub fn value(&self, series: ChartSeries) -> Option<f64> {
        self.values
            .iter()
            .find(|(s, _)| *s == series)
            .map(|(_, v)| *v)
    }
}

/// Build chart rows from samples, keeping sample order
pub fn rows(points: &[TimeSeriesPoint], series: &[ChartSeries]) -> Vec<ChartRow> {
    points
        .iter()
        .map(|point| ChartRow {
            x: point.date,
            values: series.iter().map(|s| (*s, s.value(point))).collect(),
        })
        .collect()
}

/// Short x-axis label for an ISO date ("Jan 2023")
///
/// Unparseable input is returned unchanged.
pub fn axis_label(x: &str) -> String {
    NaiveDate::parse_from_str(x, DATE_FORMAT)
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|_| x.to_string())
}

/// Value range of the y axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Padded range covering every value in `rows`
    ///
    /// Pads by 10% of the raw range on each side, or by 1.0 when all values
    /// are equal. Returns `None` when there is nothing to plot.
    pub fn of(rows: &[ChartRow]) -> Option<Bounds> {
        let mut values = rows.iter().flat_map(|r| r.values.iter().map(|(_, v)| *v));
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let range = max - min;
        let padding = if range > 0.0 { range * 0.1 } else { 1.0 };

        Some(Bounds {
            min: min - padding,
            max: max + padding,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `intervals + 1` evenly spaced tick values, top (max) to bottom (min)
    pub fn ticks(&self, intervals: usize) -> Vec<f64> {
        if intervals == 0 {
            return vec![self.max];
        }
        (0..=intervals)
            .map(|i| self.max - (i as f64 / intervals as f64) * self.span())
            .collect()
    }
}

/// Canvas dimensions and plot-area margins, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Frame {
    /// Frame with room for y labels on the left and x labels below
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_left: 60.0,
            margin_right: 20.0,
            margin_top: 20.0,
            margin_bottom: 40.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Bottom edge of the plot area
    pub fn baseline(&self) -> f64 {
        self.margin_top + self.plot_height()
    }

    /// Horizontal position of row `index` out of `count` evenly spaced rows
    ///
    /// A single row sits in the middle of the plot area.
    pub fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.margin_left + self.plot_width() / 2.0;
        }
        self.margin_left + (index as f64 / (count - 1) as f64) * self.plot_width()
    }

    /// Vertical position of `value`; larger values sit higher
    pub fn y(&self, value: f64, bounds: &Bounds) -> f64 {
        self.margin_top + ((bounds.max - value) / bounds.span()) * self.plot_height()
    }
}
