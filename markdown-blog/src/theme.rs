//! Theme tokens for rendered Markdown.
//!
//! [`MarkdownTheme`] is a plain record of color/style tokens. Every field has
//! a default, so callers override only what they need with struct-update
//! syntax:
//!
//! ```rust
//! use markdown_blog::MarkdownTheme;
//!
//! let theme = MarkdownTheme {
//!     link_color: "#06b6d4".into(),
//!     inline_code_color: "#06b6d4".into(),
//!     ..Default::default()
//! };
//! assert_eq!(theme.heading_color, "#ffffff");
//! ```

use serde::{Deserialize, Serialize};

/// Named syntax-highlighting color scheme for fenced code blocks.
///
/// The selection is part of [`MarkdownTheme`] and always resolves to one of
/// the bundled schemes; there is no fallback beyond the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CodeBlockTheme {
    /// Dark ocean palette (the default).
    #[default]
    OneDark,
    /// Muted eighties-style dark palette.
    VsDark,
    /// High-contrast mocha dark palette.
    Dracula,
    /// Solarized dark palette.
    NightOwl,
    /// Atom-style dark palette. syntect bundles four dark schemes, so this
    /// shares the eighties scheme with [`VsDark`](CodeBlockTheme::VsDark).
    AtomDark,
}

impl CodeBlockTheme {
    /// Name of the bundled syntect theme backing this palette.
    pub(crate) fn syntect_theme(self) -> &'static str {
        match self {
            CodeBlockTheme::OneDark => "base16-ocean.dark",
            CodeBlockTheme::VsDark => "base16-eighties.dark",
            CodeBlockTheme::Dracula => "base16-mocha.dark",
            CodeBlockTheme::NightOwl => "Solarized (dark)",
            CodeBlockTheme::AtomDark => "base16-eighties.dark",
        }
    }
}

/// Color/style tokens applied to rendered Markdown elements.
///
/// Immutable during a render pass; construct a new theme to change tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkdownTheme {
    /// Text color for paragraphs, lists and blockquotes.
    pub text_color: String,
    /// Text color for headings.
    pub heading_color: String,
    /// Text color for bold/strong text.
    pub strong_color: String,
    /// Text color for links.
    pub link_color: String,
    /// Link hover color (exposed to CSS as `--md-link-hover`).
    pub link_hover_color: String,
    /// Background color for inline code.
    pub inline_code_bg: String,
    /// Text color for inline code.
    pub inline_code_color: String,
    /// Syntax palette for fenced code blocks.
    pub code_block_theme: CodeBlockTheme,
    /// Extra CSS declarations for the code block container, overriding the
    /// default margin/radius/font-size layout.
    pub code_block_style: Option<String>,
}

impl Default for MarkdownTheme {
    fn default() -> Self {
        Self {
            text_color: "#d1d5db".into(),
            heading_color: "#ffffff".into(),
            strong_color: "#ffffff".into(),
            link_color: "#06b6d4".into(),
            link_hover_color: "#22d3ee".into(),
            inline_code_bg: "rgba(255, 255, 255, 0.1)".into(),
            inline_code_color: "#06b6d4".into(),
            code_block_theme: CodeBlockTheme::OneDark,
            code_block_style: None,
        }
    }
}

/// Layout applied to code block containers when no override is given.
pub(crate) const DEFAULT_CODE_BLOCK_LAYOUT: &str =
    "margin:1rem 0;border-radius:0.5rem;font-size:0.875rem";

impl MarkdownTheme {
    /// Code block layout, falling back to the default margin/radius/font.
    pub(crate) fn code_block_layout(&self) -> &str {
        self.code_block_style
            .as_deref()
            .unwrap_or(DEFAULT_CODE_BLOCK_LAYOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_token() {
        let theme = MarkdownTheme::default();
        assert_eq!(theme.text_color, "#d1d5db");
        assert_eq!(theme.heading_color, "#ffffff");
        assert_eq!(theme.link_color, "#06b6d4");
        assert_eq!(theme.code_block_theme, CodeBlockTheme::OneDark);
        assert!(theme.code_block_style.is_none());
    }

    #[test]
    fn struct_update_overrides_field_by_field() {
        let theme = MarkdownTheme {
            link_color: "#ff0000".into(),
            ..Default::default()
        };
        assert_eq!(theme.link_color, "#ff0000");
        // Untouched tokens keep their defaults.
        assert_eq!(theme.heading_color, "#ffffff");
        assert_eq!(theme.inline_code_color, "#06b6d4");
    }

    #[test]
    fn every_palette_resolves_to_a_dark_scheme() {
        for palette in [
            CodeBlockTheme::OneDark,
            CodeBlockTheme::VsDark,
            CodeBlockTheme::Dracula,
            CodeBlockTheme::NightOwl,
            CodeBlockTheme::AtomDark,
        ] {
            assert!(
                palette.syntect_theme().to_lowercase().contains("dark"),
                "{palette:?}"
            );
        }
        assert_eq!(CodeBlockTheme::default(), CodeBlockTheme::OneDark);
    }

    #[test]
    fn code_block_layout_override_replaces_default() {
        let theme = MarkdownTheme {
            code_block_style: Some("margin:0".into()),
            ..Default::default()
        };
        assert_eq!(theme.code_block_layout(), "margin:0");
        assert!(
            MarkdownTheme::default()
                .code_block_layout()
                .contains("border-radius")
        );
    }
}
