use leptos::prelude::*;

use crate::sections::{GettingStarted, Hero, InAction, IntegrationsCloud, Philosophy, ProductsSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <GettingStarted />
        <ProductsSection />
        <InAction />
        <IntegrationsCloud />
        <Philosophy />
    }
}
