use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <img src="/icon.png" alt="AgentPlexus" class="nav-logo" />
                    <span class="nav-title">
                        "Agent"
                        <span class="nav-title-accent">"Plexus"</span>
                    </span>
                </a>
                <button
                    class="nav-menu-toggle"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    <a href="/#products" class="nav-link">"Products"</a>
                    <a href="/projects" class="nav-link">"Projects"</a>
                    <a href="/mcp" class="nav-link">"MCP"</a>
                    <a href="/integrations" class="nav-link">"Integrations"</a>
                    <a href="/blog" class="nav-link">"Blog"</a>
                    <a href="/releases" class="nav-link">"Releases"</a>
                    <a
                        href="https://github.com/agentplexus"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-link"
                    >
                        "GitHub"
                    </a>
                </div>
            </div>
        </nav>
    }
}
