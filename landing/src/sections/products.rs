use leptos::prelude::*;

use crate::data::{PRODUCTS, Product, Status};

#[component]
pub fn ProductsSection() -> impl IntoView {
    view! {
        <section id="products" class="section" aria-label="Products">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Products"</h2>
                    <p class="section-description">
                        "Independent Go modules designed for composability. Use what you need, leave what you don't."
                    </p>
                </div>
                <div class="product-grid">
                    {PRODUCTS
                        .iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: &'static Product) -> impl IntoView {
    view! {
        <div class=product.color.card_class()>
            <div class="card-head">
                <a href=format!("/products/{}", product.slug) class="card-title-link">
                    <h3 class=format!("card-title {}", product.color.text_class())>
                        {product.name}
                    </h3>
                </a>
                <span class=move || match product.status {
                    Status::Stable => "badge badge-stable",
                    Status::Beta => "badge badge-beta",
                }>
                    {product.status.label()}
                </span>
            </div>
            <p class="card-tagline">{product.tagline}</p>
            <p class="card-description">{product.description}</p>
            <ul class="card-features">
                {product
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect_view()}
            </ul>
            <div class="card-actions">
                <a href=format!("/products/{}", product.slug) class="card-link">
                    "Learn more"
                </a>
                <a
                    href=product.github_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="card-link"
                >
                    "GitHub"
                </a>
            </div>
        </div>
    }
}
