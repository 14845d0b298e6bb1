use leptos::prelude::*;
use markdown_blog::CopyableCodeBlock;

use crate::data::{MCP_SERVERS, McpServer};

const CLAUDE_CONFIG: &str = r#"{
  "mcpServers": {
    "omniserp": { "command": "mcp-omniserp" },
    "posture": { "command": "mcp-posture" },
    "stats-agent": { "command": "mcp-stats-agent" }
  }
}"#;

fn install_command(server: &McpServer) -> String {
    format!(
        "go install github.com/{}/cmd/{}@latest",
        server.repo, server.binary
    )
}

#[component]
pub fn McpPage() -> impl IntoView {
    let install_all = MCP_SERVERS
        .iter()
        .map(install_command)
        .collect::<Vec<_>>()
        .join("\n");

    view! {
        <div class="page">
            <div class="container">
                <div class="section-header">
                    <h1 class="page-title">"MCP Servers"</h1>
                    <p class="page-description">
                        "Extend Claude Desktop with AgentPlexus capabilities via the "
                        <a
                            href="https://modelcontextprotocol.io"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="card-link"
                        >
                            "Model Context Protocol"
                        </a>
                        "."
                    </p>
                </div>

                <section class="detail-section">
                    <h2>"Quick Start"</h2>
                    <div class="getting-started-grid">
                        <div>
                            <h3 class="step-title">"Install"</h3>
                            <CopyableCodeBlock
                                code=install_all
                                language=Some("bash".to_string())
                            />
                            <p class="step-note">
                                "Requires Go 1.21+. Binaries install to " <code>"~/go/bin/"</code>
                            </p>
                        </div>
                        <div>
                            <h3 class="step-title">"Configure Claude Desktop"</h3>
                            <CopyableCodeBlock
                                code=CLAUDE_CONFIG.to_string()
                                language=Some("json".to_string())
                            />
                        </div>
                    </div>
                </section>

                <section class="detail-section">
                    <h2>"Available Servers"</h2>
                    <div class="project-list">
                        {MCP_SERVERS
                            .iter()
                            .map(|server| view! { <ServerCard server=server /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="detail-section mcp-about">
                    <h2>"What is MCP?"</h2>
                    <p>
                        "The Model Context Protocol (MCP) is an open standard that enables AI "
                        "assistants like Claude to interact with external tools and data sources. "
                        "MCP servers expose capabilities that Claude can discover and use during "
                        "conversations."
                    </p>
                    <p>
                        "AgentPlexus MCP servers bring our Go modules to Claude Desktop, enabling "
                        "web search, security checks, and statistics verification through natural "
                        "conversation."
                    </p>
                    <a
                        href="https://modelcontextprotocol.io/docs"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="card-link"
                    >
                        "Read the MCP documentation"
                    </a>
                </section>
            </div>
        </div>
    }
}

#[component]
fn ServerCard(server: &'static McpServer) -> impl IntoView {
    view! {
        <div class=server.color.card_class()>
            <div class="card-head">
                <h3 class=format!("card-title {}", server.color.text_class())>{server.name}</h3>
                <code class="binary-name">{server.binary}</code>
            </div>
            <p class="card-description">{server.description}</p>
            <div class="tag-row">
                {server
                    .tools
                    .iter()
                    .map(|tool| view! { <span class="tag tag-mono">{*tool}</span> })
                    .collect_view()}
            </div>
            <CopyableCodeBlock
                code=install_command(server)
                language=Some("bash".to_string())
            />
            <div class="card-actions">
                {server
                    .product_slug
                    .map(|slug| {
                        view! {
                            <a href=format!("/products/{slug}") class="card-link">"Learn more"</a>
                        }
                    })}
                <a
                    href=server.repo_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="card-link"
                >
                    "GitHub"
                </a>
            </div>
        </div>
    }
}
