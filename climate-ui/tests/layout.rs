//! Browser tests for the full layout and client-side routing
//!
//! The router listens for clicks on the whole window, so this binary mounts
//! exactly one `<App />` and drives every navigation through it.
//!
//! Run with: wasm-pack test --headless --firefox

mod common;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use climate_dashboard::content::{site, NAVIGATION};
use climate_dashboard::routing::ViewKind;
use climate_ui::App;

use common::{attributes, fixture, texts};

wasm_bindgen_test_configure!(run_in_browser);

fn pathname() -> String {
    window().location().pathname().unwrap()
}

fn count(root: &HtmlElement, testid: &str) -> usize {
    texts(root, &format!("[data-testid={testid}]")).len()
}

/// Poll until `ready` holds, yielding to the browser between checks
async fn wait_until(mut ready: impl FnMut() -> bool) -> bool {
    for _ in 0..50 {
        if ready() {
            return true;
        }
        TimeoutFuture::new(20).await;
    }
    ready()
}

fn click(root: &HtmlElement, selector: &str, label: &str) {
    let nodes = root.query_selector_all(selector).unwrap();
    let link = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .find(|node| node.text_content().unwrap_or_default().trim() == label)
        .unwrap_or_else(|| panic!("no {selector} labelled {label:?}"));

    link.unchecked_into::<HtmlElement>().click();
}

/// Everything the dashboard view renders from literal content
fn dashboard_snapshot(root: &HtmlElement) -> (Vec<String>, Vec<String>, Vec<String>) {
    (
        texts(root, "[data-testid=metric-value]"),
        texts(root, "[data-testid=status-message]"),
        attributes(root, "[data-testid=chart-canvas]", "data-points"),
    )
}

#[wasm_bindgen_test]
async fn layout_routes_between_views() {
    window()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some("/settings"))
        .unwrap();

    let root = fixture();
    mount_to(root.clone(), || view! { <App /> });

    // Site metadata
    let description = document()
        .query_selector("meta[name=description]")
        .unwrap()
        .unwrap()
        .get_attribute("content");
    assert_eq!(document().title(), site::TITLE);
    assert_eq!(description.as_deref(), Some(site::DESCRIPTION));

    // Unknown path: not-found view, sidebar still mounted
    assert!(wait_until(|| texts(&root, "main h1") == vec!["Page Not Found"]).await);
    assert_eq!(count(&root, "metric-value"), 0);
    assert_eq!(count(&root, "doc-section"), 0);
    assert_eq!(texts(&root, "nav a"), vec!["Dashboard", "Documentation"]);
    assert_eq!(
        attributes(&root, "nav a", "href"),
        vec!["/", "/documentation"]
    );

    // The not-found link leads to the initial view
    click(&root, "main a", "Go to Dashboard");
    assert!(wait_until(|| pathname() == ViewKind::INITIAL.path()).await);
    assert!(wait_until(|| count(&root, "metric-value") == 2).await);
    let initial = dashboard_snapshot(&root);
    assert_eq!(initial.0, vec!["21°C", "417 ppm"]);

    // "/" -> "/documentation" -> "/" through the sidebar
    for entry in [NAVIGATION[1], NAVIGATION[0]] {
        click(&root, "nav a", entry.label);
        assert!(
            wait_until(|| pathname() == entry.route).await,
            "{} left the location at {}",
            entry.label,
            pathname()
        );

        let (shown, hidden) = match entry.view().unwrap() {
            ViewKind::Dashboard => ("metric-value", "doc-section"),
            ViewKind::Documentation => ("doc-section", "metric-value"),
        };
        assert!(wait_until(|| count(&root, shown) > 0).await, "{}", entry.label);
        assert_eq!(count(&root, hidden), 0, "{}", entry.label);
    }

    assert_eq!(dashboard_snapshot(&root), initial);
}
