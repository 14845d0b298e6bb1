use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data::{self, Product};

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product = move || {
        params
            .read()
            .get("slug")
            .and_then(|slug| data::find_product(&slug))
    };

    view! {
        <div class="page">
            <div class="container container-narrow">
                {move || match product() {
                    Some(product) => view! { <ProductDetail product=product /> }.into_any(),
                    None => view! {
                        <div class="page-center">
                            <h1 class="page-title">"Product Not Found"</h1>
                            <a href="/#products" class="card-link">"Back to Products"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductDetail(product: &'static Product) -> impl IntoView {
    view! {
        <a href="/#products" class="back-link">"← All Products"</a>
        <header class="page-header">
            <div class="page-header-row">
                <h1 class=format!("page-title {}", product.color.text_class())>{product.name}</h1>
                <span class="badge badge-stable">{product.status.label()}</span>
            </div>
            <p class="page-subtitle">{product.tagline}</p>
            <p class="page-description">{product.description}</p>
        </header>

        <section class="detail-section">
            <h2>"Features"</h2>
            <ul class="card-features">
                {product
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect_view()}
            </ul>
        </section>

        <section class="detail-section">
            <h2>"Integrations"</h2>
            <div class="tag-row">
                {product
                    .integrations
                    .iter()
                    .map(|name| view! { <span class="tag">{*name}</span> })
                    .collect_view()}
            </div>
        </section>

        <div class="card-actions">
            <a
                href=product.github_url
                target="_blank"
                rel="noopener noreferrer"
                class="btn btn-primary"
            >
                "View on GitHub"
            </a>
        </div>
    }
}
