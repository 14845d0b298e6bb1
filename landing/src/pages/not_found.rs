use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container page-center">
                <h1 class="page-title">"Page Not Found"</h1>
                <p class="page-description">"The page you're looking for doesn't exist."</p>
                <a href="/" class="btn btn-primary">"Back Home"</a>
            </div>
        </div>
    }
}
