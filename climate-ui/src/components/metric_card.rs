//! Metric Cell Component
//!
//! Displays one key metric, accented with its chart series colour.

use leptos::*;

use climate_dashboard::chart::SeriesColor;
use climate_dashboard::content::KeyMetric;

/// Key metric cell
#[component]
pub fn MetricCell(metric: KeyMetric) -> impl IntoView {
    let value_class = format!(
        "text-2xl font-semibold {}",
        accent_class(metric.series.color())
    );

    view! {
        <div class="p-4 bg-gray-50 rounded-lg" data-testid="metric-cell">
            <p class="text-sm text-gray-600">{metric.label}</p>
            <p class=value_class data-testid="metric-value">{metric.value}</p>
        </div>
    }
}

fn accent_class(color: SeriesColor) -> String {
    format!("text-{}-600", color.name())
}
