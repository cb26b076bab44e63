//! Browser tests for the rendered views
//!
//! Run with: wasm-pack test --headless --firefox

mod common;

use leptos::*;
use wasm_bindgen_test::*;

use climate_ui::pages::{DashboardView, DocumentationView};

use common::{attributes, fixture, texts};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn dashboard_renders_key_metrics() {
    let root = fixture();
    mount_to(root.clone(), || view! { <DashboardView /> });

    assert_eq!(
        texts(&root, "[data-testid=metric-value]"),
        vec!["21°C", "417 ppm"]
    );

    let classes = attributes(&root, "[data-testid=metric-value]", "class");
    assert!(classes[0].contains("text-indigo-600"), "{}", classes[0]);
    assert!(classes[1].contains("text-cyan-600"), "{}", classes[1]);
}

#[wasm_bindgen_test]
fn dashboard_renders_status_messages() {
    let root = fixture();
    mount_to(root.clone(), || view! { <DashboardView /> });

    assert_eq!(
        texts(&root, "[data-testid=status-message]"),
        vec!["Systems operating normally", "Data last updated: 2 hours ago"]
    );
    assert_eq!(
        attributes(&root, "[data-testid=status-message]", "data-severity"),
        vec!["ok", "info"]
    );
}

#[wasm_bindgen_test]
fn dashboard_renders_chart_with_both_series() {
    let root = fixture();
    mount_to(root.clone(), || view! { <DashboardView /> });

    assert_eq!(
        attributes(&root, "[data-testid=chart-canvas]", "data-points"),
        vec!["3"]
    );
    assert_eq!(
        texts(&root, "[data-testid=legend-entry]"),
        vec!["Temperature", "CO2"]
    );
}

#[wasm_bindgen_test]
fn documentation_renders_sections_in_order() {
    let root = fixture();
    mount_to(root.clone(), || view! { <DocumentationView /> });

    assert_eq!(
        texts(&root, "[data-testid=doc-section] h2"),
        vec!["Overview", "Data Sources", "Methodology"]
    );
}
