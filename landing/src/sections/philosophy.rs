use leptos::prelude::*;

struct Principle {
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Single Responsibility",
        description: "Each module does one thing well. OmniLLM handles LLM abstraction. \
                      OmniVault handles secrets. No feature creep, no kitchen sinks.",
        accent: "accent-cyan",
    },
    Principle {
        title: "No Framework Lock-in",
        description: "Use our modules with any framework, or none at all. Unlike many \
                      framework-specific abstractions, our libraries remain extractable and \
                      independent.",
        accent: "accent-purple",
    },
    Principle {
        title: "Composable by Design",
        description: "Integration modules like VaultGuard and AgentKit combine primitives \
                      without coupling them. The core libraries stay independent.",
        accent: "accent-pink",
    },
    Principle {
        title: "Clean Boundaries",
        description: "Separate modules encourage clean interfaces. The friction of multiple \
                      repos is the price of libraries that remain genuinely reusable.",
        accent: "accent-violet",
    },
];

#[component]
pub fn Philosophy() -> impl IntoView {
    view! {
        <section id="philosophy" class="section section-alt" aria-label="Philosophy">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Philosophy"</h2>
                    <p class="section-description">
                        "We build composable infrastructure, not monolithic frameworks."
                    </p>
                </div>
                <div class="principles-grid">
                    {PRINCIPLES
                        .iter()
                        .map(|principle| {
                            view! {
                                <div class="principle-card">
                                    <h3 class=format!("principle-title {}", principle.accent)>
                                        {principle.title}
                                    </h3>
                                    <p>{principle.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="philosophy-quote">
                    <h3>"The Unix Philosophy for AI"</h3>
                    <p>
                        "Write programs that do one thing and do it well. Write programs to work together."
                    </p>
                    <p>
                        "Many frameworks bundle useful abstractions that can't be used outside that framework. "
                        "LLM libraries coupled to specific orchestration patterns. Storage backends buried in "
                        "monolithic tools. AgentPlexus modules are designed from day one to be used "
                        "independently, whether you're building with ADK, LangChain, your own framework, or "
                        "no framework at all."
                    </p>
                </div>
            </div>
        </section>
    }
}
