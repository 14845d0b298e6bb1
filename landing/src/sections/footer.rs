use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-col">
                    <span class="footer-brand">"AgentPlexus"</span>
                    <p class="footer-tagline">"Composable infrastructure for AI agents."</p>
                </div>
                <div class="footer-col">
                    <span class="footer-heading">"Site"</span>
                    <a href="/#products" class="footer-link">"Products"</a>
                    <a href="/projects" class="footer-link">"Projects"</a>
                    <a href="/blog" class="footer-link">"Blog"</a>
                    <a href="/releases" class="footer-link">"Releases"</a>
                </div>
                <div class="footer-col">
                    <span class="footer-heading">"Elsewhere"</span>
                    <a
                        href="https://github.com/agentplexus"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="footer-link"
                    >
                        "GitHub"
                    </a>
                    <a href="/atom.xml" class="footer-link">"Atom Feed"</a>
                    <a
                        href="https://modelcontextprotocol.io"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="footer-link"
                    >
                        "MCP"
                    </a>
                </div>
            </div>
            <div class="footer-note">
                <p>"© 2024 AgentPlexus. MIT licensed."</p>
            </div>
        </footer>
    }
}
