//! Themed Leptos views for the Markdown tree.
//!
//! [`MarkdownRenderer`] turns raw Markdown into a tree of themed elements
//! ready for mounting. Hosts can replace the rendering of any element kind
//! wholesale through [`ElementOverrides`] without forking the renderer.
//! Fenced code blocks render through [`CopyableCodeBlock`], which pairs
//! syntax-highlighted text with a copy-to-clipboard affordance.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyView;

use crate::copy::{COPY_RESET_WINDOW_MS, CopyFeedback};
use crate::highlight::highlight;
use crate::theme::{CodeBlockTheme, MarkdownTheme};
use crate::tree::{MdNode, parse_markdown};

/// Renders one node in place of the default markup for its element kind.
pub type NodeRenderer = Rc<dyn Fn(&MdNode) -> AnyView>;

/// Per-element-kind replacements for the default rendering.
///
/// An override replaces the default entirely (it is not merged with the
/// themed markup); element kinds left as `None` keep the defaults.
#[derive(Clone, Default)]
pub struct ElementOverrides {
    /// Replaces headings of every level.
    pub heading: Option<NodeRenderer>,
    /// Replaces paragraphs.
    pub paragraph: Option<NodeRenderer>,
    /// Replaces bold text.
    pub strong: Option<NodeRenderer>,
    /// Replaces italic text.
    pub emphasis: Option<NodeRenderer>,
    /// Replaces links.
    pub link: Option<NodeRenderer>,
    /// Replaces ordered and unordered lists.
    pub list: Option<NodeRenderer>,
    /// Replaces list items.
    pub item: Option<NodeRenderer>,
    /// Replaces block quotes.
    pub block_quote: Option<NodeRenderer>,
    /// Replaces inline code spans.
    pub inline_code: Option<NodeRenderer>,
    /// Replaces fenced code blocks.
    pub code_block: Option<NodeRenderer>,
}

impl ElementOverrides {
    fn for_node(&self, node: &MdNode) -> Option<&NodeRenderer> {
        match node {
            MdNode::Text(_) => None,
            MdNode::Heading { .. } => self.heading.as_ref(),
            MdNode::Paragraph(_) => self.paragraph.as_ref(),
            MdNode::Strong(_) => self.strong.as_ref(),
            MdNode::Emphasis(_) => self.emphasis.as_ref(),
            MdNode::Link { .. } => self.link.as_ref(),
            MdNode::List { .. } => self.list.as_ref(),
            MdNode::Item(_) => self.item.as_ref(),
            MdNode::BlockQuote(_) => self.block_quote.as_ref(),
            MdNode::InlineCode(_) => self.inline_code.as_ref(),
            MdNode::CodeBlock { .. } => self.code_block.as_ref(),
        }
    }
}

fn write_clipboard(text: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        let _ = clipboard.write_text(text);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = text;
}

/// Syntax-highlighted code block with a copy-to-clipboard affordance.
///
/// Copying writes the literal code, minus exactly one trailing newline if
/// present, to the system clipboard. The affordance reflects that a copy was
/// attempted and resets on its own after two seconds; activating it again
/// within the window restarts the countdown.
#[component]
pub fn CopyableCodeBlock(
    /// Literal code, possibly including the fence's trailing newline.
    code: String,
    /// Language tag; `None` highlights as plain text.
    #[prop(optional_no_strip)]
    language: Option<String>,
    /// Highlighting scheme.
    #[prop(optional)]
    palette: CodeBlockTheme,
    /// CSS declarations for the block layout, replacing the default
    /// margin/radius/font-size.
    #[prop(optional, into)]
    layout: Option<String>,
) -> impl IntoView {
    let literal = code
        .strip_suffix('\n')
        .unwrap_or(code.as_str())
        .to_string();
    let block = highlight(&literal, language.as_deref(), palette);

    let feedback = StoredValue::new(CopyFeedback::new());
    let (copied, set_copied) = signal(false);

    let to_copy = literal.clone();
    let copy = move |_| {
        write_clipboard(&to_copy);
        let epoch = feedback
            .try_update_value(|f| f.activate())
            .unwrap_or_default();
        set_copied.set(true);
        set_timeout(
            move || {
                if feedback
                    .try_update_value(|f| f.expire(epoch))
                    .unwrap_or(false)
                {
                    set_copied.set(false);
                }
            },
            Duration::from_millis(COPY_RESET_WINDOW_MS),
        );
    };

    let layout = layout.unwrap_or_else(|| crate::theme::DEFAULT_CODE_BLOCK_LAYOUT.to_string());
    let mut pre_style = format!("{layout};padding:1rem;overflow-x:auto");
    if let Some(bg) = &block.background {
        pre_style.push_str(&format!(";background-color:{bg}"));
    }
    if let Some(fg) = &block.foreground {
        pre_style.push_str(&format!(";color:{fg}"));
    }

    let line_count = block.lines.len();
    let code_view = block
        .lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let newline = (i + 1 < line_count).then_some("\n");
            let spans = line
                .into_iter()
                .map(|seg| match seg.color {
                    Some(color) => view! { <span style=("color", color)>{seg.text}</span> }
                        .into_any(),
                    None => seg.text.into_any(),
                })
                .collect::<Vec<_>>();
            view! { {spans}{newline} }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="md-code-block" style="position:relative">
            <button class="md-copy-btn" class:copied=move || copied.get() on:click=copy title="Copy to clipboard">
                {move || if copied.get() { "copied" } else { "copy" }}
            </button>
            <span class="sr-only" role="status" aria-live="polite">
                {move || if copied.get() { "Copied to clipboard" } else { "" }}
            </span>
            <pre class="md-code-pre" style=pre_style>
                <code>{code_view}</code>
            </pre>
        </div>
    }
}

fn children_views(
    children: &[MdNode],
    theme: &MarkdownTheme,
    overrides: &ElementOverrides,
) -> Vec<AnyView> {
    children
        .iter()
        .map(|child| node_view(child, theme, overrides))
        .collect()
}

/// Render a single tree node with the given theme and overrides.
pub fn node_view(node: &MdNode, theme: &MarkdownTheme, overrides: &ElementOverrides) -> AnyView {
    if let Some(renderer) = overrides.for_node(node) {
        return renderer(node);
    }

    match node {
        MdNode::Text(text) => text.clone().into_any(),
        MdNode::Heading { level, children } => {
            let color = ("color", theme.heading_color.clone());
            let inner = children_views(children, theme, overrides);
            match level {
                1 => view! { <h1 class="md-h1" style=color>{inner}</h1> }.into_any(),
                2 => view! { <h2 class="md-h2" style=color>{inner}</h2> }.into_any(),
                3 => view! { <h3 class="md-h3" style=color>{inner}</h3> }.into_any(),
                _ => view! { <h4 class="md-h4" style=color>{inner}</h4> }.into_any(),
            }
        }
        MdNode::Paragraph(children) => {
            let inner = children_views(children, theme, overrides);
            view! { <p class="md-p" style=("color", theme.text_color.clone())>{inner}</p> }
                .into_any()
        }
        MdNode::Strong(children) => {
            let inner = children_views(children, theme, overrides);
            view! { <strong class="md-strong" style=("color", theme.strong_color.clone())>{inner}</strong> }
                .into_any()
        }
        MdNode::Emphasis(children) => {
            let inner = children_views(children, theme, overrides);
            view! { <em style=("color", theme.text_color.clone())>{inner}</em> }.into_any()
        }
        MdNode::Link { href, children } => {
            let style = format!(
                "color:{};--md-link-hover:{}",
                theme.link_color, theme.link_hover_color
            );
            let inner = children_views(children, theme, overrides);
            view! { <a href=href.clone() class="md-link" style=style>{inner}</a> }.into_any()
        }
        MdNode::List { ordered, children } => {
            let color = ("color", theme.text_color.clone());
            let inner = children_views(children, theme, overrides);
            if *ordered {
                view! { <ol class="md-list" style=color>{inner}</ol> }.into_any()
            } else {
                view! { <ul class="md-list" style=color>{inner}</ul> }.into_any()
            }
        }
        MdNode::Item(children) => {
            let inner = children_views(children, theme, overrides);
            view! { <li style=("color", theme.text_color.clone())>{inner}</li> }.into_any()
        }
        MdNode::BlockQuote(children) => {
            let style = format!(
                "border-left-color:{};color:{}",
                theme.link_color, theme.text_color
            );
            let inner = children_views(children, theme, overrides);
            view! { <blockquote class="md-quote" style=style>{inner}</blockquote> }.into_any()
        }
        MdNode::InlineCode(code) => {
            let style = format!(
                "background-color:{};color:{}",
                theme.inline_code_bg, theme.inline_code_color
            );
            view! { <code class="md-inline-code" style=style>{code.clone()}</code> }.into_any()
        }
        MdNode::CodeBlock { language, code } => view! {
            <CopyableCodeBlock
                code=code.clone()
                language=language.clone()
                palette=theme.code_block_theme
                layout=theme.code_block_layout().to_string()
            />
        }
        .into_any(),
    }
}

/// Render Markdown content as a tree of themed elements.
///
/// Parsing is tolerant (see [`parse_markdown`]); the component performs no
/// network or storage I/O. Theming is resolved once per render pass.
#[component]
pub fn MarkdownRenderer(
    /// Raw Markdown source.
    content: String,
    /// Theme tokens; defaults merge field-by-field via struct update.
    #[prop(optional)]
    theme: MarkdownTheme,
    /// Full replacements for named element kinds.
    #[prop(optional)]
    overrides: ElementOverrides,
    /// Additional class for the container.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let views: Vec<AnyView> = parse_markdown(&content)
        .iter()
        .map(|node| node_view(node, &theme, &overrides))
        .collect();
    view! { <article class=class>{views}</article> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn bold_and_inline_code_render_with_default_theme() {
        let html = view! {
            <MarkdownRenderer content="**bold** and `code`".to_string() />
        }
        .to_html();

        assert!(html.contains("<strong"));
        assert!(html.contains("bold"));
        // Inline code is styled inline, not promoted to a block.
        assert!(html.contains("md-inline-code"));
        assert!(!html.contains("md-code-block"));
        assert!(html.contains("#06b6d4"));
    }

    #[test]
    fn fenced_block_renders_through_copyable_code_block() {
        let html = view! {
            <MarkdownRenderer content="```go\nfmt.Println(1)\n```".to_string() />
        }
        .to_html();

        assert!(html.contains("md-code-block"));
        assert!(html.contains("fmt.Println"));
        assert!(html.contains("aria-live"));
        assert!(html.contains("copy"));
    }

    #[test]
    fn theme_tokens_flow_into_the_markup() {
        let theme = MarkdownTheme {
            heading_color: "#123456".into(),
            link_color: "#654321".into(),
            ..Default::default()
        };
        let html = view! {
            <MarkdownRenderer
                content="# Title\n\n[link](https://example.com)".to_string()
                theme=theme
            />
        }
        .to_html();

        assert!(html.contains("#123456"));
        assert!(html.contains("#654321"));
        assert!(html.contains("https://example.com"));
    }

    #[test]
    fn override_replaces_default_rendering_entirely() {
        let overrides = ElementOverrides {
            inline_code: Some(Rc::new(|node| {
                let text = match node {
                    MdNode::InlineCode(code) => code.clone(),
                    _ => String::new(),
                };
                view! { <kbd class="custom-code">{text}</kbd> }.into_any()
            })),
            ..Default::default()
        };
        let html = view! {
            <MarkdownRenderer content="press `ctrl-c`".to_string() overrides=overrides />
        }
        .to_html();

        assert!(html.contains("custom-code"));
        assert!(html.contains("ctrl-c"));
        assert!(!html.contains("md-inline-code"));
    }

    #[test]
    fn copyable_block_strips_one_trailing_newline_from_display() {
        let html = view! {
            <CopyableCodeBlock code="fmt.Println(1)\n".to_string() language=Some("go".to_string()) />
        }
        .to_html();

        assert!(html.contains("fmt.Println(1)"));
        assert!(html.contains("md-copy-btn"));
    }

    #[test]
    fn malformed_markdown_still_renders() {
        let html = view! {
            <MarkdownRenderer content="*** [broken]( ``` oops".to_string() />
        }
        .to_html();
        assert!(html.contains("<article"));
    }
}
