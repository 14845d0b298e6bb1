use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data::{self, Project};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = move || {
        params
            .read()
            .get("slug")
            .and_then(|slug| data::find_project(&slug))
    };

    view! {
        <div class="page">
            <div class="container container-narrow">
                {move || match project() {
                    Some(project) => view! { <ProjectDetail project=project /> }.into_any(),
                    None => view! {
                        <div class="page-center">
                            <h1 class="page-title">"Project Not Found"</h1>
                            <a href="/projects" class="card-link">"Back to Projects"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    view! {
        <a href="/projects" class="back-link">"← All Projects"</a>
        <header class="page-header">
            <h1 class="page-title">{project.name}</h1>
            <p class="page-subtitle">{project.tagline}</p>
            <p class="page-description">{project.description}</p>
            <div class="tag-row">
                {project
                    .modules
                    .iter()
                    .map(|module| view! { <span class="tag">{*module}</span> })
                    .collect_view()}
            </div>
        </header>

        <section class="detail-section">
            <h2>"Highlights"</h2>
            <ul class="card-features">
                {project
                    .highlights
                    .iter()
                    .map(|highlight| view! { <li>{*highlight}</li> })
                    .collect_view()}
            </ul>
        </section>

        {project
            .presentation_url
            .map(|url| {
                view! {
                    <section class="detail-section">
                        <h2>"Presentation"</h2>
                        <div class="presentation-frame">
                            <iframe src=url title=format!("{} presentation", project.name)></iframe>
                        </div>
                        <a href=url target="_blank" rel="noopener noreferrer" class="card-link">
                            "Open full screen"
                        </a>
                    </section>
                }
            })}

        <div class="card-actions">
            <a
                href=project.github_url
                target="_blank"
                rel="noopener noreferrer"
                class="btn btn-primary"
            >
                "View on GitHub"
            </a>
            {project
                .docs_url
                .map(|url| {
                    view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                            "Documentation"
                        </a>
                    }
                })}
        </div>
    }
}
