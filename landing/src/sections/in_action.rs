use leptos::prelude::*;

use crate::data::PROJECTS;

#[component]
pub fn InAction() -> impl IntoView {
    view! {
        <section id="projects" class="section section-alt" aria-label="Projects">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"In Action"</h2>
                    <p class="section-description">"SDKs, tools, and reference implementations."</p>
                </div>
                <div class="project-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <a href=format!("/projects/{}", project.slug) class="project-card">
                                    <h3 class="project-card-title">{project.name}</h3>
                                    <p class="project-card-tagline">{project.tagline}</p>
                                    <div class="tag-row">
                                        {project
                                            .modules
                                            .iter()
                                            .map(|module| view! { <span class="tag">{*module}</span> })
                                            .collect_view()}
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="section-cta">
                    <a href="/projects" class="btn btn-primary">"View All Projects"</a>
                </div>
            </div>
        </section>
    }
}
