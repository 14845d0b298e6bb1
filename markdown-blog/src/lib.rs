//! # markdown-blog
//!
//! Themeable Markdown fetch-and-render pipeline for [Leptos](https://leptos.dev/):
//! the content layer behind blog and documentation pages.
//!
//! The pipeline has two halves that pages compose:
//!
//! - [`ContentFetcher`] retrieves raw Markdown for a route slug and drives a
//!   [`ContentDocument`] through `Idle -> Loading -> Ready | Failed`,
//!   notifying subscribers on every transition. Superseded requests are
//!   discarded, never raced.
//! - [`MarkdownRenderer`] parses the fetched text (tables and strikethrough
//!   enabled, tolerant of malformed input) and renders a tree of themed
//!   elements. Fenced code blocks get syntax highlighting and a
//!   copy-to-clipboard affordance via [`CopyableCodeBlock`].
//!
//! ## Quick start
//!
//! ```rust
//! use markdown_blog::{parse_markdown, MarkdownTheme, MdNode};
//!
//! // Themes default field-by-field; override only what you need.
//! let theme = MarkdownTheme {
//!     link_color: "#06b6d4".into(),
//!     ..Default::default()
//! };
//!
//! let tree = parse_markdown("**bold** and `code`");
//! assert!(matches!(tree[0], MdNode::Paragraph(_)));
//! assert_eq!(theme.heading_color, "#ffffff");
//! ```
//!
//! In a page component:
//!
//! ```rust,ignore
//! let doc = use_markdown_content("/blog", move || slug());
//! view! { <MarkdownRenderer content=doc.get().raw_text.unwrap_or_default() /> }
//! ```
//!
//! The renderer performs no I/O; the fetcher performs no rendering.

#![warn(missing_docs)]

pub mod content;
pub mod copy;
pub mod dom;
pub mod highlight;
pub mod render;
pub mod theme;
pub mod tree;

pub use content::{ContentDocument, ContentFetcher, ContentState, FetchError, TextFetcher};
pub use copy::{COPY_RESET_WINDOW_MS, CopyFeedback, CopyState};
pub use dom::{HttpTextFetcher, use_markdown_content};
pub use highlight::{HighlightedBlock, Segment, highlight};
pub use render::{CopyableCodeBlock, ElementOverrides, MarkdownRenderer, NodeRenderer};
pub use theme::{CodeBlockTheme, MarkdownTheme};
pub use tree::{MdNode, is_block_code, parse_markdown};
