//! Status Components
//!
//! Status messages coloured by severity.

use leptos::*;

use climate_dashboard::content::{Severity, StatusMessage};

/// Stacked list of status messages
#[component]
pub fn StatusList(messages: &'static [StatusMessage]) -> impl IntoView {
    view! {
        <div class="mt-4 space-y-2">
            {messages
                .iter()
                .map(|message| view! { <StatusLine message=*message /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn StatusLine(message: StatusMessage) -> impl IntoView {
    let (class, severity) = match message.severity {
        Severity::Ok => ("p-2 bg-green-50 rounded text-sm text-green-700", "ok"),
        Severity::Info => ("p-2 bg-blue-50 rounded text-sm text-blue-700", "info"),
    };

    view! {
        <div class=class data-testid="status-message" data-severity=severity>
            {message.text}
        </div>
    }
}
