use leptos::prelude::*;

use crate::data::{INTEGRATIONS, PRODUCTS};

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <div class="section-header">
                    <h1 class="page-title">"Integrations"</h1>
                    <p class="page-description">
                        "Every provider and platform the AgentPlexus modules speak to."
                    </p>
                </div>

                <div class="logo-cloud">
                    {INTEGRATIONS
                        .iter()
                        .map(|integration| {
                            view! {
                                <div class="logo-tile" title=integration.name>
                                    <img src=integration.logo alt=integration.name />
                                    <span class="logo-label">{integration.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <section class="detail-section">
                    <h2>"By module"</h2>
                    <div class="integration-table">
                        {PRODUCTS
                            .iter()
                            .map(|product| {
                                view! {
                                    <div class="integration-row">
                                        <a
                                            href=format!("/products/{}", product.slug)
                                            class=format!("card-link {}", product.color.text_class())
                                        >
                                            {product.name}
                                        </a>
                                        <div class="tag-row">
                                            {product
                                                .integrations
                                                .iter()
                                                .map(|name| view! { <span class="tag">{*name}</span> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
