//! Documentation Page

use leptos::*;

use climate_dashboard::content::documentation;

use crate::components::Card;

/// Documentation page component
#[component]
pub fn DocumentationView() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4">
            <Card>
                <h1 class="text-lg font-semibold mb-3">{documentation::TITLE}</h1>
                <div class="prose prose-sm">
                    {documentation::SECTIONS
                        .iter()
                        .map(|section| view! {
                            <section data-testid="doc-section">
                                <h2 class="text-xl font-semibold mb-2">{section.heading}</h2>
                                <p class="mb-4">{section.body}</p>
                            </section>
                        })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}
