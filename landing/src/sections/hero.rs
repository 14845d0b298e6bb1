use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" aria-label="Hero">
            <div class="container">
                <img src="/icon.png" alt="AgentPlexus" class="hero-logo" />
                <h1 class="hero-title">
                    <span class="hero-title-plain">"Agent"</span>
                    <span class="hero-title-accent">"Plexus"</span>
                </h1>
                <p class="hero-subtitle">"Composable Infrastructure for AI Agents"</p>
                <p class="hero-description">
                    "A collection of independent, focused Go modules for building AI agent applications. "
                    "Each module does one thing well and can be used standalone or composed together."
                </p>
                <div class="hero-actions">
                    <a href="#products" class="btn btn-primary">
                        "Explore Products"
                    </a>
                    <a
                        href="https://github.com/agentplexus"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-secondary"
                    >
                        "View on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}
