use leptos::prelude::*;

use crate::data::BLOG_POSTS;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container container-narrow">
                <div class="section-header">
                    <h1 class="page-title">"Blog"</h1>
                    <p class="page-description">
                        "Insights, tutorials, and stories from building AI agent infrastructure."
                    </p>
                    <a href="/atom.xml" class="card-link">"Atom Feed"</a>
                </div>
                <div class="post-list">
                    {BLOG_POSTS
                        .iter()
                        .map(|post| {
                            view! {
                                <article class="card">
                                    <div class="tag-row">
                                        {post
                                            .tags
                                            .iter()
                                            .map(|tag| view! { <span class="tag">{*tag}</span> })
                                            .collect_view()}
                                    </div>
                                    <a href=format!("/blog/{}", post.slug) class="card-title-link">
                                        <h2 class="card-title">{post.title}</h2>
                                    </a>
                                    <p class="card-description">{post.excerpt}</p>
                                    <div class="post-meta">
                                        <span>{post.date}</span>
                                        <span>{post.read_time}</span>
                                        <a href=format!("/blog/{}", post.slug) class="card-link">
                                            "Read more →"
                                        </a>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
