// AgentPlexus site — Leptos 0.8 Edition

mod data;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::*;
use sections::{Footer, Nav};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products/:slug") view=ProductPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/projects/:slug") view=ProjectDetailPage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/blog/:slug") view=BlogPostPage />
                    <Route path=path!("/integrations") view=IntegrationsPage />
                    <Route path=path!("/mcp") view=McpPage />
                    <Route path=path!("/releases") view=ReleasesPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
