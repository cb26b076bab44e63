//! App Root Component
//!
//! Router plus the page shell: the sidebar is always mounted and the main
//! area shows the view for the current route.

use leptos::*;
use leptos_router::*;

use climate_dashboard::content::site;
use climate_dashboard::routing::{RouteError, ViewKind};

use crate::components::Sidebar;
use crate::pages::{DashboardView, DocumentationView};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    apply_site_metadata();

    view! {
        <Router>
            <div class="min-h-full">
                <div class="flex flex-col md:flex-row min-h-screen">
                    <Sidebar />

                    <main class="flex-1 p-4">
                        <Routes>
                            <Route
                                path=ViewKind::Dashboard.path()
                                view=|| render_view(ViewKind::Dashboard)
                            />
                            <Route
                                path=ViewKind::Documentation.path()
                                view=|| render_view(ViewKind::Documentation)
                            />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

/// Component for each view
pub fn render_view(kind: ViewKind) -> leptos::View {
    match kind {
        ViewKind::Dashboard => view! { <DashboardView /> }.into_view(),
        ViewKind::Documentation => view! { <DocumentationView /> }.into_view(),
    }
}

/// Set the document title, description and language
fn apply_site_metadata() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    document.set_title(site::TITLE);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", site::LANG);
    }

    if let Err(e) = set_description(&document) {
        web_sys::console::warn_1(&e);
    }
}

fn set_description(document: &web_sys::Document) -> Result<(), wasm_bindgen::JsValue> {
    let meta = match document.query_selector("meta[name=description]")? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "description")?;
            if let Some(head) = document.head() {
                head.append_child(&meta)?;
            }
            meta
        }
    };

    meta.set_attribute("content", site::DESCRIPTION)
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    let error = RouteError::NotFound(location.pathname.get_untracked());
    web_sys::console::warn_1(&error.to_string().into());

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=ViewKind::INITIAL.path()
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
