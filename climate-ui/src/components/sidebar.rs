//! Sidebar Component
//!
//! Vertical navigation list built from the fixed navigation model. Links do
//! not track the active route.

use leptos::*;
use leptos_router::*;

use climate_dashboard::content::{site, NavigationEntry, NAVIGATION};

use super::icons::NavIcon;

/// Sidebar with heading and navigation links
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="hidden md:flex flex-col w-64 bg-indigo-700 text-white">
            <div class="p-4 border-b border-indigo-600">
                <h1 class="text-lg font-semibold">{site::SIDEBAR_HEADING}</h1>
            </div>

            <nav class="mt-4 flex-1">
                <ul class="space-y-1 px-2">
                    {NAVIGATION
                        .iter()
                        .map(|entry| view! {
                            <li>
                                <SidebarLink entry=*entry />
                            </li>
                        })
                        .collect_view()}
                </ul>
            </nav>
        </div>
    }
}

/// Individual navigation link
#[component]
fn SidebarLink(entry: NavigationEntry) -> impl IntoView {
    view! {
        <A
            href=entry.route
            class="flex items-center px-4 py-2 text-sm rounded-md hover:bg-indigo-600"
        >
            <NavIcon icon=entry.icon />
            {entry.label}
        </A>
    }
}
