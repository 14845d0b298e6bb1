//! Markdown parsing into a renderable element tree.
//!
//! The grammar itself is delegated to [`pulldown-cmark`] with the table and
//! strikethrough extensions enabled. Parsing is tolerant by construction:
//! constructs the renderer has no themed element for (tables, images,
//! strikethrough, raw HTML, ...) flatten into their literal text content
//! rather than erroring, so malformed input can never fail a render.
//!
//! [`pulldown-cmark`]: https://docs.rs/pulldown-cmark

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// One node of the parsed Markdown tree.
#[derive(Clone, Debug, PartialEq)]
pub enum MdNode {
    /// Literal text (also the fallback for unclassifiable constructs).
    Text(String),
    /// Heading with level 1-6.
    Heading {
        /// Heading level, clamped to 1-6.
        level: u8,
        /// Inline children.
        children: Vec<MdNode>,
    },
    /// Paragraph.
    Paragraph(Vec<MdNode>),
    /// Bold text.
    Strong(Vec<MdNode>),
    /// Italic text.
    Emphasis(Vec<MdNode>),
    /// Hyperlink.
    Link {
        /// Destination URL.
        href: String,
        /// Inline children.
        children: Vec<MdNode>,
    },
    /// Ordered or unordered list; children are [`MdNode::Item`]s.
    List {
        /// True for numbered lists.
        ordered: bool,
        /// List items.
        children: Vec<MdNode>,
    },
    /// One list item.
    Item(Vec<MdNode>),
    /// Block quote.
    BlockQuote(Vec<MdNode>),
    /// Inline code span. Single line, no language tag.
    InlineCode(String),
    /// Fenced or indented code block.
    CodeBlock {
        /// Language tag from the fence info string, if any.
        language: Option<String>,
        /// Verbatim code, including the fence's trailing newline.
        code: String,
    },
}

/// True when a code span must render as a block rather than inline:
/// it spans multiple lines or carries an explicit language tag.
pub fn is_block_code(code: &str, language: Option<&str>) -> bool {
    let body = code.strip_suffix('\n').unwrap_or(code);
    language.is_some() || body.contains('\n')
}

enum Frame {
    Heading(u8),
    Paragraph,
    Strong,
    Emphasis,
    Link(String),
    List(bool),
    Item,
    BlockQuote,
    CodeBlock { language: Option<String>, code: String },
    /// Unhandled container: children splice into the parent untouched.
    Transparent,
}

struct TreeBuilder {
    root: Vec<MdNode>,
    stack: Vec<(Frame, Vec<MdNode>)>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            root: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn push_node(&mut self, node: MdNode) {
        match self.stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => self.root.push(node),
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some((Frame::CodeBlock { code, .. }, _)) = self.stack.last_mut() {
            code.push_str(text);
        } else if !text.is_empty() {
            self.push_node(MdNode::Text(text.to_string()));
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Heading { level, .. } => Frame::Heading(heading_level(level)),
            Tag::Paragraph => Frame::Paragraph,
            Tag::Strong => Frame::Strong,
            Tag::Emphasis => Frame::Emphasis,
            Tag::Link { dest_url, .. } => Frame::Link(dest_url.into_string()),
            Tag::List(start) => Frame::List(start.is_some()),
            Tag::Item => Frame::Item,
            Tag::BlockQuote(_) => Frame::BlockQuote,
            Tag::CodeBlock(kind) => Frame::CodeBlock {
                language: fence_language(&kind),
                code: String::new(),
            },
            _ => Frame::Transparent,
        };
        self.stack.push((frame, Vec::new()));
    }

    fn close(&mut self) {
        let Some((frame, children)) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Heading(level) => self.push_node(MdNode::Heading { level, children }),
            Frame::Paragraph => self.push_node(MdNode::Paragraph(children)),
            Frame::Strong => self.push_node(MdNode::Strong(children)),
            Frame::Emphasis => self.push_node(MdNode::Emphasis(children)),
            Frame::Link(href) => self.push_node(MdNode::Link { href, children }),
            Frame::List(ordered) => self.push_node(MdNode::List { ordered, children }),
            Frame::Item => self.push_node(MdNode::Item(children)),
            Frame::BlockQuote => self.push_node(MdNode::BlockQuote(children)),
            Frame::CodeBlock { language, code } => {
                if is_block_code(&code, language.as_deref()) {
                    self.push_node(MdNode::CodeBlock { language, code });
                } else {
                    let body = code.strip_suffix('\n').unwrap_or(&code);
                    self.push_node(MdNode::InlineCode(body.to_string()));
                }
            }
            Frame::Transparent => {
                for child in children {
                    self.push_node(child);
                }
            }
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn fence_language(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => {
            let lang = info.split_whitespace().next()?;
            if lang.is_empty() {
                None
            } else {
                Some(lang.to_string())
            }
        }
        CodeBlockKind::Indented => None,
    }
}

/// Parse Markdown source into a tree of [`MdNode`]s.
///
/// Never fails; the grammar absorbs malformed input and anything the tree
/// has no element for renders as literal text.
pub fn parse_markdown(source: &str) -> Vec<MdNode> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(tag) => builder.open(tag),
            Event::End(_) => builder.close(),
            Event::Text(text) => builder.push_text(&text),
            Event::Code(code) => builder.push_node(MdNode::InlineCode(code.into_string())),
            Event::SoftBreak => builder.push_text(" "),
            Event::HardBreak => builder.push_text("\n"),
            Event::Html(html) | Event::InlineHtml(html) => builder.push_text(&html),
            Event::FootnoteReference(name) => builder.push_text(&name),
            Event::TaskListMarker(checked) => {
                builder.push_text(if checked { "[x] " } else { "[ ] " })
            }
            Event::Rule => {}
            Event::InlineMath(math) | Event::DisplayMath(math) => builder.push_text(&math),
        }
    }
    // Unbalanced input leaves frames open; close them so nothing is lost.
    while !builder.stack.is_empty() {
        builder.close();
    }
    builder.root
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bold_and_inline_code_in_one_paragraph() {
        let tree = parse_markdown("**bold** and `code`");
        assert_eq!(
            tree,
            vec![MdNode::Paragraph(vec![
                MdNode::Strong(vec![MdNode::Text("bold".into())]),
                MdNode::Text(" and ".into()),
                MdNode::InlineCode("code".into()),
            ])]
        );
    }

    #[test]
    fn fenced_block_with_language_is_a_block_even_on_one_line() {
        let tree = parse_markdown("```go\nfmt.Println(1)\n```");
        assert_eq!(
            tree,
            vec![MdNode::CodeBlock {
                language: Some("go".into()),
                code: "fmt.Println(1)\n".into(),
            }]
        );
    }

    #[test]
    fn fenced_block_without_language_on_one_line_is_inline() {
        let tree = parse_markdown("```\njust one line\n```");
        assert_eq!(tree, vec![MdNode::InlineCode("just one line".into())]);
    }

    #[test]
    fn fenced_block_without_language_spanning_lines_is_a_block() {
        let tree = parse_markdown("```\nline one\nline two\n```");
        assert_eq!(
            tree,
            vec![MdNode::CodeBlock {
                language: None,
                code: "line one\nline two\n".into(),
            }]
        );
    }

    #[test]
    fn block_classification_rule() {
        assert!(is_block_code("fmt.Println(1)\n", Some("go")));
        assert!(is_block_code("a\nb\n", None));
        assert!(!is_block_code("one line\n", None));
        assert!(!is_block_code("one line", None));
    }

    #[test]
    fn headings_lists_links_and_quotes() {
        let tree = parse_markdown(
            "## Title\n\n- first\n- [second](https://example.com)\n\n> quoted\n\n1. one\n",
        );
        assert_eq!(
            tree,
            vec![
                MdNode::Heading {
                    level: 2,
                    children: vec![MdNode::Text("Title".into())],
                },
                MdNode::List {
                    ordered: false,
                    children: vec![
                        MdNode::Item(vec![MdNode::Text("first".into())]),
                        MdNode::Item(vec![MdNode::Link {
                            href: "https://example.com".into(),
                            children: vec![MdNode::Text("second".into())],
                        }]),
                    ],
                },
                MdNode::BlockQuote(vec![MdNode::Paragraph(vec![MdNode::Text("quoted".into())])]),
                MdNode::List {
                    ordered: true,
                    children: vec![MdNode::Item(vec![MdNode::Text("one".into())])],
                },
            ]
        );
    }

    #[test]
    fn strikethrough_flattens_to_literal_text() {
        let tree = parse_markdown("~~gone~~");
        assert_eq!(
            tree,
            vec![MdNode::Paragraph(vec![MdNode::Text("gone".into())])]
        );
    }

    #[test]
    fn tables_flatten_without_error() {
        let tree = parse_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        let mut text = String::new();
        collect_text(&tree, &mut text);
        assert!(text.contains('a'));
        assert!(text.contains('2'));
    }

    #[test]
    fn raw_html_renders_literally() {
        let tree = parse_markdown("before <marquee>hi</marquee> after\n");
        let mut text = String::new();
        collect_text(&tree, &mut text);
        assert!(text.contains("<marquee>"));
    }

    #[test]
    fn malformed_input_never_panics() {
        for junk in ["***", "[unclosed](", "```", "> > > ```rust\n", "| |"] {
            let _ = parse_markdown(junk);
        }
    }

    fn collect_text(nodes: &[MdNode], out: &mut String) {
        for node in nodes {
            match node {
                MdNode::Text(t) | MdNode::InlineCode(t) => out.push_str(t),
                MdNode::CodeBlock { code, .. } => out.push_str(code),
                MdNode::Heading { children, .. }
                | MdNode::Paragraph(children)
                | MdNode::Strong(children)
                | MdNode::Emphasis(children)
                | MdNode::Link { children, .. }
                | MdNode::List { children, .. }
                | MdNode::Item(children)
                | MdNode::BlockQuote(children) => collect_text(children, out),
            }
        }
    }
}
