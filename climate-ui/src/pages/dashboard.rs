//! Dashboard Page
//!
//! Trend chart, key metrics and status updates.

use leptos::*;

use climate_dashboard::chart::{self, ChartSeries};
use climate_dashboard::content::dashboard;

use crate::components::{AreaChart, Card, CardTitle, MetricCell, StatusList};

/// Dashboard page component
#[component]
pub fn DashboardView() -> impl IntoView {
    let rows = chart::rows(&dashboard::TIME_SERIES, &ChartSeries::ALL);

    view! {
        <div class="p-4 md:p-10 mx-auto max-w-7xl">
            <h1 class="text-2xl font-bold mb-8">{dashboard::TITLE}</h1>

            <div class="grid gap-6">
                <Card>
                    <CardTitle>{dashboard::CHART_TITLE}</CardTitle>
                    <div class="mt-4">
                        <AreaChart rows=rows series=&ChartSeries::ALL />
                    </div>
                </Card>

                <div class="grid md:grid-cols-2 gap-6">
                    <Card>
                        <CardTitle>{dashboard::KEY_METRICS_TITLE}</CardTitle>
                        <div class="mt-4 grid grid-cols-2 gap-4">
                            {dashboard::KEY_METRICS
                                .iter()
                                .map(|metric| view! { <MetricCell metric=*metric /> })
                                .collect_view()}
                        </div>
                    </Card>

                    <Card>
                        <CardTitle>{dashboard::STATUS_TITLE}</CardTitle>
                        <StatusList messages=&dashboard::STATUS_MESSAGES />
                    </Card>
                </div>
            </div>
        </div>
    }
}
