//! Icon Glyphs
//!
//! Inline outline SVGs for the symbolic [`Icon`] identifiers.

use leptos::*;

use climate_dashboard::content::Icon;

/// 24x24 outline path for an icon
fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "m2.25 12 8.954-8.955c.44-.439 1.152-.439 1.591 0L21.75 12M4.5 9.75v10.125c0 .621.504 1.125 1.125 1.125H9.75v-4.875c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125V21h4.125c.621 0 1.125-.504 1.125-1.125V9.75M8.25 21h8.25",
        Icon::DocumentText => "M19.5 14.25v-2.625a3.375 3.375 0 0 0-3.375-3.375h-1.5A1.125 1.125 0 0 1 13.5 7.125v-1.5a3.375 3.375 0 0 0-3.375-3.375H8.25m0 12.75h7.5m-7.5 3H12M10.5 2.25H5.625c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125V11.25a9 9 0 0 0-9-9Z",
    }
}

/// Sidebar-sized icon
#[component]
pub fn NavIcon(icon: Icon) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            class="h-5 w-5 mr-3"
            aria-hidden="true"
            data-icon=icon.name()
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=glyph(icon) />
        </svg>
    }
}
