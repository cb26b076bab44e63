//! Card Components

use leptos::*;

/// White panel with a light ring
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm ring-1 ring-gray-200 p-6">
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! {
        <h3 class="text-lg font-medium text-gray-900">{children()}</h3>
    }
}
