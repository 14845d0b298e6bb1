use leptos::prelude::*;

use crate::data::INTEGRATIONS;

/// Logo cloud on the homepage; the full list lives at `/integrations`.
#[component]
pub fn IntegrationsCloud() -> impl IntoView {
    view! {
        <section id="integrations" class="section" aria-label="Integrations">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Integrations"</h2>
                    <p class="section-description">"Works with your existing stack"</p>
                </div>
                <div class="logo-cloud">
                    {INTEGRATIONS
                        .iter()
                        .map(|integration| {
                            view! {
                                <div class="logo-tile" title=integration.name>
                                    <img src=integration.logo alt=integration.name />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="section-cta">
                    <a href="/integrations" class="card-link">"View all integrations →"</a>
                </div>
            </div>
        </section>
    }
}
