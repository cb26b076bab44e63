//! Climate Engineering Dashboard
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Build with `trunk build --release`; the `climate-dashboard` server serves
//! the resulting `dist/` directory.

use leptos::*;

use climate_ui::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App /> });
}
