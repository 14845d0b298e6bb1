use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use markdown_blog::{ContentState, MarkdownRenderer, MarkdownTheme, use_markdown_content};

use crate::data::{self, BlogPost};

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug"));
    let document = use_markdown_content("/blog", move || slug.get());

    let meta = move || slug.get().and_then(|slug| data::find_post(&slug));

    view! {
        <div class="page">
            <div class="container container-narrow">
                <a href="/blog" class="back-link">"← Back to Blog"</a>
                {move || match meta() {
                    Some(post) => view! { <PostHeader post=post /> }.into_any(),
                    None => view! {
                        <div class="page-center">
                            <h1 class="page-title">"Post Not Found"</h1>
                        </div>
                    }
                    .into_any(),
                }}
                {move || {
                    let document = document.get();
                    match document.state {
                        ContentState::Idle | ContentState::Loading => {
                            view! { <div class="page-status">"Loading..."</div> }.into_any()
                        }
                        ContentState::Failed => view! {
                            <div class="page-status page-status-error">
                                "Failed to load article content."
                            </div>
                        }
                        .into_any(),
                        ContentState::Ready => {
                            let theme = MarkdownTheme {
                                link_color: "#06b6d4".into(),
                                inline_code_color: "#06b6d4".into(),
                                ..Default::default()
                            };
                            view! {
                                <MarkdownRenderer
                                    content=document.raw_text.unwrap_or_default()
                                    theme=theme
                                    class="post-body"
                                />
                            }
                            .into_any()
                        }
                    }
                }}
                {move || meta().map(|post| view! { <RelatedProducts post=post /> })}
            </div>
        </div>
    }
}

#[component]
fn PostHeader(post: &'static BlogPost) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="tag-row">
                {post
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{*tag}</span> })
                    .collect_view()}
            </div>
            <h1 class="page-title">{post.title}</h1>
            <div class="post-meta">
                <span>{post.date}</span>
                <span>{post.read_time}</span>
                <span>{post.author}</span>
            </div>
            <div class="card-actions">
                {post
                    .github_url
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="card-link">
                                "View Code"
                            </a>
                        }
                    })}
                {post
                    .project_slug
                    .map(|slug| {
                        view! {
                            <a href=format!("/projects/{slug}") class="card-link">
                                "View Project"
                            </a>
                        }
                    })}
            </div>
        </header>
    }
}

#[component]
fn RelatedProducts(post: &'static BlogPost) -> impl IntoView {
    (!post.related_products.is_empty()).then(|| {
        view! {
            <div class="related-products">
                <h3>"Want to build something similar?"</h3>
                <p>"Check out the AgentPlexus modules related to this post."</p>
                <div class="tag-row">
                    {post
                        .related_products
                        .iter()
                        .filter_map(|slug| data::find_product(slug))
                        .map(|product| {
                            view! {
                                <a
                                    href=format!("/products/{}", product.slug)
                                    class=format!("tag {}", product.color.text_class())
                                >
                                    {product.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    })
}
