use leptos::prelude::*;
use markdown_blog::CopyableCodeBlock;

const INSTALL_COMMAND: &str = "go get github.com/agentplexus/omnillm
go get github.com/agentplexus/omniobserve";

const CODE_EXAMPLE: &str = r#"package main

import (
    "github.com/agentplexus/omnillm"
    "github.com/agentplexus/omniobserve"
)

func main() {
    // Create an LLM client - works with any provider
    client := omnillm.New(omnillm.WithProvider("anthropic"))

    // Add observability (Langfuse, Phoenix hooks also available)
    client.Use(omniobserve.OpikHook())

    // Use it - same API regardless of provider
    resp, _ := client.Chat(ctx, []omnillm.Message{
        {Role: "user", Content: "Hello, world!"},
    })
}"#;

#[component]
pub fn GettingStarted() -> impl IntoView {
    view! {
        <section id="getting-started" class="section" aria-label="Getting Started">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Getting Started"</h2>
                    <p class="section-description">
                        "Add powerful capabilities to your AI agents in minutes."
                    </p>
                </div>

                <div class="getting-started-grid">
                    <div>
                        <h3 class="step-title">
                            <span class="step-number accent-cyan">"1"</span>
                            "Install the modules you need"
                        </h3>
                        <CopyableCodeBlock
                            code=INSTALL_COMMAND.to_string()
                            language=Some("bash".to_string())
                        />
                        <p class="step-note">
                            "Each module is independent. Install only what you use."
                        </p>
                    </div>
                    <div>
                        <h3 class="step-title">
                            <span class="step-number accent-purple">"2"</span>
                            "Use them together"
                        </h3>
                        <CopyableCodeBlock
                            code=CODE_EXAMPLE.to_string()
                            language=Some("go".to_string())
                        />
                    </div>
                </div>

                <div class="stats-grid">
                    <div class="stat-card">
                        <div class="stat-value accent-cyan">"5 min"</div>
                        <div class="stat-label">"to first API call"</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value accent-purple">"0 lock-in"</div>
                        <div class="stat-label">"swap providers anytime"</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value accent-pink">"1 line"</div>
                        <div class="stat-label">"to add observability"</div>
                    </div>
                </div>

                <div class="section-cta">
                    <a href="/projects/stats-agent-team" class="btn btn-primary">
                        "See a complete project"
                    </a>
                    <p class="step-note">
                        "Multi-agent system using OmniLLM, OmniSerp, and OmniObserve"
                    </p>
                </div>
            </div>
        </section>
    }
}
