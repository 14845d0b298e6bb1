// Site catalog: products, projects, posts, MCP servers, integrations.
// Single source of truth for every page that lists or links them.

/// Accent color assigned to a product or server card.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Purple,
    Pink,
    Violet,
}

impl Accent {
    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::Purple => "accent-purple",
            Accent::Pink => "accent-pink",
            Accent::Violet => "accent-violet",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            Accent::Cyan => "card card-cyan",
            Accent::Purple => "card card-purple",
            Accent::Pink => "card card-pink",
            Accent::Violet => "card card-violet",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Stable,
    Beta,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Stable => "stable",
            Status::Beta => "beta",
        }
    }
}

pub struct Product {
    pub name: &'static str,
    pub slug: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub color: Accent,
    pub status: Status,
    pub github_url: &'static str,
    pub integrations: &'static [&'static str],
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "OmniLLM",
        slug: "omnillm",
        tagline: "Multi-Provider LLM Abstraction",
        description: "Unified interface for multiple LLM providers. Switch between OpenAI, \
                      Anthropic, Google, xAI, and Ollama without changing your code.",
        features: [
            "Single API for all major LLM providers",
            "Streaming and non-streaming support",
            "Built-in observability hooks",
            "Framework-agnostic design",
        ],
        color: Accent::Cyan,
        status: Status::Stable,
        github_url: "https://github.com/agentplexus/omnillm",
        integrations: &["openai", "anthropic", "gemini", "xai", "ollama"],
    },
    Product {
        name: "OmniVault",
        slug: "omnivault",
        tagline: "Multi-Provider Secret Management",
        description: "Unified secret management across providers. Use environment variables, \
                      files, OS keyring, or AWS secret managers with the same API.",
        features: [
            "Environment, file, and keyring providers",
            "AWS Secrets Manager and Parameter Store",
            "URI-based secret resolution",
            "Extensible provider architecture",
        ],
        color: Accent::Purple,
        status: Status::Stable,
        github_url: "https://github.com/agentplexus/omnivault",
        integrations: &["aws", "macos", "windows", "linux"],
    },
    Product {
        name: "OmniSerp",
        slug: "omniserp",
        tagline: "Multi-Provider Search Abstraction",
        description: "Unified search API for multiple providers. Query Serper, SerpAPI, or \
                      other search backends with a consistent interface.",
        features: [
            "Web search across providers",
            "News, images, and video search",
            "Structured result parsing",
            "Rate limiting and caching",
        ],
        color: Accent::Pink,
        status: Status::Stable,
        github_url: "https://github.com/agentplexus/omniserp",
        integrations: &["serper", "serpapi"],
    },
    Product {
        name: "OmniObserve",
        slug: "omniobserve",
        tagline: "Multi-Provider LLM Observability",
        description: "Unified observability for LLM applications. Send traces to Opik, \
                      Langfuse, or Phoenix without vendor lock-in.",
        features: [
            "Automatic trace collection",
            "Token usage tracking",
            "Latency metrics",
            "Integration with OmniLLM",
        ],
        color: Accent::Violet,
        status: Status::Stable,
        github_url: "https://github.com/agentplexus/omniobserve",
        integrations: &["opik", "langfuse", "phoenix"],
    },
    Product {
        name: "Posture",
        slug: "posture",
        tagline: "Cross-Platform Security Assessment",
        description: "Security posture assessment for macOS, Windows, and Linux. Check TPM, \
                      Secure Boot, disk encryption, and biometrics.",
        features: [
            "CLI, MCP Server, and Go module",
            "Security scoring (0-100)",
            "Actionable recommendations",
            "Claude Desktop integration",
        ],
        color: Accent::Cyan,
        status: Status::Stable,
        github_url: "https://github.com/agentplexus/posture",
        integrations: &["macos", "windows", "linux"],
    },
    Product {
        name: "VaultGuard",
        slug: "vaultguard",
        tagline: "Security-Gated Credentials",
        description: "Combines Posture security checks with OmniVault secret management. \
                      Enforce security policies before credential access.",
        features: [
            "Environment-aware security policies",
            "Local and cloud deployment support",
            "AWS IRSA, GCP Workload Identity",
            "Automatic provider selection",
        ],
        color: Accent::Purple,
        status: Status::Stable,
        github_url: "https://github.com/agentplexus/vaultguard",
        integrations: &["macos", "windows", "linux"],
    },
    Product {
        name: "AgentKit",
        slug: "agentkit",
        tagline: "Reusable Agent Components",
        description: "Building blocks for AI agents. Base agent patterns, LLM factory, Eino \
                      orchestration, and multi-runtime deployment.",
        features: [
            "Base agent with LLM integration",
            "AWS Bedrock AgentCore support",
            "Eino workflow orchestration",
            "Kubernetes + Helm deployment",
        ],
        color: Accent::Pink,
        status: Status::Stable,
        github_url: "https://github.com/agentplexus/agentkit",
        integrations: &["agentcore", "kubernetes", "helm", "docker"],
    },
    Product {
        name: "OmniVoice",
        slug: "omnivoice",
        tagline: "Multi-Provider Voice & Audio",
        description: "Unified API for speech-to-text and text-to-speech. Currently supports \
                      ElevenLabs and Twilio, with more providers coming soon.",
        features: [
            "ElevenLabs TTS integration",
            "Twilio voice & phone support",
            "Streaming audio processing",
            "More providers coming soon",
        ],
        color: Accent::Violet,
        status: Status::Beta,
        github_url: "https://github.com/agentplexus/omnivoice",
        integrations: &["elevenlabs", "twilio"],
    },
];

pub fn find_product(slug: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.slug == slug)
}

pub struct Project {
    pub name: &'static str,
    pub slug: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub modules: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub github_url: &'static str,
    pub docs_url: Option<&'static str>,
    pub presentation_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Statistics Agent Team",
        slug: "stats-agent-team",
        tagline: "Multi-agent statistics verification system",
        description: "A multi-agent system that finds and verifies statistics from reputable \
                      web sources. Uses a 4-agent pipeline to ensure accuracy and prevent \
                      hallucinations.",
        modules: &["OmniLLM", "OmniSerp", "OmniObserve"],
        highlights: &[
            "Web search via OmniSerp",
            "Multi-provider LLM via OmniLLM",
            "Tracing via OmniObserve",
            "Eino orchestration",
        ],
        github_url: "https://github.com/agentplexus/stats-agent-team",
        docs_url: Some("https://agentplexus.github.io/stats-agent-team/"),
        presentation_url: Some("https://agentplexus.github.io/stats-agent-team/presentation.html"),
    },
    Project {
        name: "OmniObserve AgentOps",
        slug: "omniobserve-agentops",
        tagline: "OpenTelemetry semantic conventions for multi-agent AI",
        description: "OpenTelemetry semantic conventions for multi-agent AI systems. Extends \
                      gen_ai.agent.* with workflows, tasks, handoffs, and tool calls for \
                      first-class observability.",
        modules: &["OmniObserve"],
        highlights: &[
            "OpenTelemetry semantic conventions",
            "Workflow & task tracking",
            "Agent handoff measurement",
            "Middleware instrumentation",
        ],
        github_url: "https://github.com/agentplexus/omniobserve/tree/main/semconv/agent",
        docs_url: None,
        presentation_url: Some("https://agentplexus.github.io/omniobserve/semconvagent.html"),
    },
    Project {
        name: "go-opik",
        slug: "go-opik",
        tagline: "Go SDK for LLM observability - built in 4-5 hours",
        description: "A complete Go SDK for Comet ML Opik, built in 4-5 hours using Claude \
                      Opus 4.5. Demonstrates AI-assisted SDK development from OpenAPI spec to \
                      production-ready library.",
        modules: &["OmniObserve"],
        highlights: &[
            "50+ Go files, 15K lines",
            "ogen code generation",
            "LLM observability SDK",
            "Built with Claude Opus 4.5",
        ],
        github_url: "https://github.com/agentplexus/go-opik",
        docs_url: Some("https://agentplexus.github.io/go-opik/"),
        presentation_url: Some("https://agentplexus.github.io/go-opik/presentation.html"),
    },
    Project {
        name: "go-elevenlabs",
        slug: "go-elevenlabs",
        tagline: "Go SDK for AI audio - 19 service wrappers",
        description: "A comprehensive Go SDK for ElevenLabs AI audio platform. 19 service \
                      wrappers covering TTS, STT, voice design, music generation, and \
                      real-time streaming.",
        modules: &["OmniVoice"],
        highlights: &[
            "19 audio services",
            "330K + 8K lines of code",
            "OpenAPI → ogen → wrappers",
            "Built with Claude Opus 4.5",
        ],
        github_url: "https://github.com/agentplexus/go-elevenlabs",
        docs_url: Some("https://agentplexus.github.io/go-elevenlabs/"),
        presentation_url: Some("https://agentplexus.github.io/go-elevenlabs/presentation.html"),
    },
];

pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.slug == slug)
}

pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub author: &'static str,
    pub github_url: Option<&'static str>,
    pub project_slug: Option<&'static str>,
    pub related_products: &'static [&'static str],
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "mcp-confluence-table-corruption",
        title: "Why We Built Another Confluence MCP Server",
        excerpt: "Existing Confluence MCP servers corrupt tables. The root cause: LLMs \
                  generate Markdown or HTML5, but Confluence uses Storage Format XHTML. We \
                  built a server that handles both structured creation and lossless editing.",
        date: "2024-12-29",
        read_time: "6 min",
        tags: &["MCP", "Confluence", "Engineering"],
        author: "AgentPlexus Team",
        github_url: Some("https://github.com/agentplexus/mcp-confluence"),
        project_slug: None,
        related_products: &["vaultguard"],
    },
    BlogPost {
        slug: "security-gated-mcp-servers",
        title: "Security-Gated MCP Servers with VaultGuard",
        excerpt: "MCP servers need API keys. Environment variables in config files are \
                  convenient but insecure. We built a pattern using VaultGuard that gates \
                  credential access on device security posture.",
        date: "2024-12-29",
        read_time: "8 min",
        tags: &["MCP", "Security", "VaultGuard", "OmniVault"],
        author: "AgentPlexus Team",
        github_url: Some("https://github.com/agentplexus/omniserp"),
        project_slug: None,
        related_products: &["vaultguard", "omnivault", "posture", "omniserp"],
    },
    BlogPost {
        slug: "wcag-accessibility-with-ai",
        title: "A Severity Rubric for WCAG 2.2 AA Prioritization",
        excerpt: "WCAG defines conformance levels, not severity. When you find 14 \
                  accessibility issues, which do you fix first? We built a severity rubric \
                  based on user impact and share our initial implementation pass.",
        date: "2024-12-29",
        read_time: "12 min",
        tags: &["Accessibility", "WCAG", "Engineering"],
        author: "AgentPlexus Team",
        github_url: Some("https://github.com/agentplexus/agentplexus-docs/tree/main/accessibility"),
        project_slug: None,
        related_products: &[],
    },
    BlogPost {
        slug: "otel-semantic-conventions-agentic-ai",
        title: "OpenTelemetry Semantic Conventions for Agentic AI",
        excerpt: "Multi-agent AI systems need observability beyond what OpenTelemetry GenAI \
                  provides. We built semantic conventions for workflows, tasks, handoffs, and \
                  tool calls, extending gen_ai.agent.* to give multi-agent systems \
                  first-class observability.",
        date: "2024-12-28",
        read_time: "8 min",
        tags: &["OpenTelemetry", "Observability", "Multi-Agent", "OmniObserve"],
        author: "AgentPlexus Team",
        github_url: Some("https://github.com/agentplexus/omniobserve/tree/main/semconv/agent"),
        project_slug: Some("omniobserve-agentops"),
        related_products: &["omniobserve"],
    },
    BlogPost {
        slug: "ai-assisted-sdk-development",
        title: "Building Production Go SDKs with Claude Opus 4.5",
        excerpt: "We built two complete Go SDKs in hours instead of weeks. The pattern: \
                  OpenAPI spec → ogen code generation → wrapper services. Here's what we \
                  learned about AI-assisted SDK development.",
        date: "2024-12-28",
        read_time: "8 min",
        tags: &["Claude Opus 4.5", "SDK Development", "Go", "Engineering"],
        author: "AgentPlexus Team",
        github_url: Some("https://github.com/agentplexus/go-opik"),
        project_slug: Some("go-opik"),
        related_products: &["omniobserve", "omnivoice"],
    },
    BlogPost {
        slug: "building-stats-agent-team",
        title: "Building a Multi-Agent Statistics Verification System",
        excerpt: "The journey of creating stats-agent-team: from hallucinated statistics to \
                  verified facts. Lessons learned building a 4-agent pipeline with OmniLLM, \
                  OmniSerp, and OmniObserve.",
        date: "2024-12-28",
        read_time: "10 min",
        tags: &["Multi-Agent", "OmniLLM", "OmniSerp", "Case Study"],
        author: "AgentPlexus Team",
        github_url: Some("https://github.com/agentplexus/stats-agent-team"),
        project_slug: Some("stats-agent-team"),
        related_products: &["omnillm", "omniserp", "omniobserve"],
    },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

pub struct McpServer {
    pub name: &'static str,
    pub binary: &'static str,
    pub repo: &'static str,
    pub repo_url: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
    pub color: Accent,
    pub product_slug: Option<&'static str>,
}

pub const MCP_SERVERS: &[McpServer] = &[
    McpServer {
        name: "OmniSerp",
        binary: "mcp-omniserp",
        repo: "agentplexus/omniserp",
        repo_url: "https://github.com/agentplexus/omniserp",
        description: "Web search capabilities for Claude. Search Google, get news, images, \
                      and more.",
        tools: &["search", "news_search", "image_search"],
        color: Accent::Pink,
        product_slug: Some("omniserp"),
    },
    McpServer {
        name: "Posture",
        binary: "mcp-posture",
        repo: "agentplexus/posture",
        repo_url: "https://github.com/agentplexus/posture",
        description: "Security posture assessment. Check device security, encryption, TPM, \
                      and biometrics.",
        tools: &["check_security", "get_summary", "get_score"],
        color: Accent::Cyan,
        product_slug: Some("posture"),
    },
    McpServer {
        name: "Stats Agent",
        binary: "mcp-stats-agent",
        repo: "agentplexus/stats-agent-team",
        repo_url: "https://github.com/agentplexus/stats-agent-team",
        description: "Research and verify statistics. Multi-agent team that finds, \
                      validates, and sources facts.",
        tools: &["research_stats", "verify_claim"],
        color: Accent::Purple,
        product_slug: None,
    },
];

pub struct Integration {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const INTEGRATIONS: &[Integration] = &[
    Integration { name: "OpenAI", logo: "/integrations/openai.svg" },
    Integration { name: "Anthropic", logo: "/integrations/anthropic.svg" },
    Integration { name: "Google Gemini", logo: "/integrations/gemini.svg" },
    Integration { name: "xAI", logo: "/integrations/xai.svg" },
    Integration { name: "Opik", logo: "/integrations/opik.svg" },
    Integration { name: "Phoenix", logo: "/integrations/phoenix.svg" },
    Integration { name: "Langfuse", logo: "/integrations/langfuse.svg" },
    Integration { name: "Docker", logo: "/integrations/docker.svg" },
    Integration { name: "Kubernetes", logo: "/integrations/kubernetes.svg" },
    Integration { name: "Helm", logo: "/integrations/helm.svg" },
    Integration { name: "Twilio", logo: "/integrations/twilio.svg" },
    Integration { name: "ElevenLabs", logo: "/integrations/elevenlabs.svg" },
    Integration { name: "Serper", logo: "/integrations/serper.svg" },
    Integration { name: "SerpApi", logo: "/integrations/serpapi.svg" },
];
