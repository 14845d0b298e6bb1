use leptos::prelude::*;

use crate::data::PROJECTS;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <div class="section-header">
                    <h1 class="page-title">"Projects"</h1>
                    <p class="page-description">"SDKs, tools, and reference implementations."</p>
                </div>
                <div class="project-list">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="card">
                                    <h2 class="card-title">{project.name}</h2>
                                    <p class="card-description">{project.description}</p>
                                    <div class="tag-row">
                                        {project
                                            .modules
                                            .iter()
                                            .map(|module| view! { <span class="tag">{*module}</span> })
                                            .collect_view()}
                                    </div>
                                    <ul class="card-features">
                                        {project
                                            .highlights
                                            .iter()
                                            .map(|highlight| view! { <li>{*highlight}</li> })
                                            .collect_view()}
                                    </ul>
                                    <div class="card-actions">
                                        <a href=format!("/projects/{}", project.slug) class="card-link">
                                            "Case study"
                                        </a>
                                        <a
                                            href=project.github_url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="card-link"
                                        >
                                            "GitHub"
                                        </a>
                                        {project
                                            .presentation_url
                                            .map(|url| {
                                                view! {
                                                    <a
                                                        href=url
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="card-link"
                                                    >
                                                        "Presentation"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
