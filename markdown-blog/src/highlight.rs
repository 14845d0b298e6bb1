//! Syntax highlighting for fenced code blocks.
//!
//! Thin adapter over [`syntect`]: the selected [`CodeBlockTheme`] resolves to
//! one of the bundled highlighting schemes, and the code is broken into
//! per-line colored segments ready for the view layer. A missing or unknown
//! language tag falls back to plain-text highlighting.

use std::sync::OnceLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::theme::CodeBlockTheme;

/// One colored run of text within a highlighted line.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// CSS color for this run; `None` renders in the inherited color.
    pub color: Option<String>,
    /// The text itself, without any trailing newline.
    pub text: String,
}

/// A fully highlighted code block.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightedBlock {
    /// Background color of the selected scheme, as CSS.
    pub background: Option<String>,
    /// Default foreground color of the selected scheme, as CSS.
    pub foreground: Option<String>,
    /// Lines of colored segments, in source order.
    pub lines: Vec<Vec<Segment>>,
}

fn syntax_set() -> &'static SyntaxSet {
    static SET: OnceLock<SyntaxSet> = OnceLock::new();
    SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    static SET: OnceLock<ThemeSet> = OnceLock::new();
    SET.get_or_init(ThemeSet::load_defaults)
}

fn css_color(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn plain_lines(code: &str) -> Vec<Vec<Segment>> {
    LinesWithEndings::from(code)
        .map(|line| {
            vec![Segment {
                color: None,
                text: line.trim_end_matches('\n').to_string(),
            }]
        })
        .collect()
}

/// Highlight `code` with the scheme named by `palette`.
///
/// `language` is matched against syntect's known tokens (file extensions and
/// names); anything unrecognized highlights as plain text in the scheme's
/// foreground color.
pub fn highlight(code: &str, language: Option<&str>, palette: CodeBlockTheme) -> HighlightedBlock {
    let syntaxes = syntax_set();
    let syntax = language
        .and_then(|lang| syntaxes.find_syntax_by_token(lang))
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());

    let Some(theme) = theme_set().themes.get(palette.syntect_theme()) else {
        // Unreachable with the bundled theme set; degrade to uncolored text.
        return HighlightedBlock {
            background: None,
            foreground: None,
            lines: plain_lines(code),
        };
    };

    let background = theme.settings.background.map(css_color);
    let foreground = theme.settings.foreground.map(css_color);
    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();
    for line in LinesWithEndings::from(code) {
        match highlighter.highlight_line(line, syntaxes) {
            Ok(spans) => lines.push(
                spans
                    .into_iter()
                    .map(|(style, text)| Segment {
                        color: Some(css_color(style.foreground)),
                        text: text.trim_end_matches('\n').to_string(),
                    })
                    .collect(),
            ),
            Err(_) => lines.push(vec![Segment {
                color: None,
                text: line.trim_end_matches('\n').to_string(),
            }]),
        }
    }

    HighlightedBlock {
        background,
        foreground,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(block: &HighlightedBlock) -> String {
        block
            .lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|seg| seg.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn unknown_language_highlights_as_plain_text() {
        let block = highlight("alpha beta\ngamma", Some("nosuchlang"), CodeBlockTheme::OneDark);
        assert_eq!(block.lines.len(), 2);
        assert_eq!(concat(&block), "alpha beta\ngamma");
    }

    #[test]
    fn missing_language_highlights_as_plain_text() {
        let block = highlight("plain", None, CodeBlockTheme::OneDark);
        assert_eq!(block.lines.len(), 1);
        assert_eq!(concat(&block), "plain");
    }

    #[test]
    fn highlighting_preserves_the_code_verbatim() {
        let code = "fn main() {\n    println!(\"hi\");\n}";
        let block = highlight(code, Some("rs"), CodeBlockTheme::OneDark);
        assert_eq!(concat(&block), code);
    }

    #[test]
    fn known_language_produces_colored_segments() {
        let block = highlight("fn main() {}", Some("rs"), CodeBlockTheme::OneDark);
        assert!(block.background.is_some());
        assert!(
            block
                .lines
                .iter()
                .flatten()
                .any(|seg| seg.color.is_some())
        );
    }

    #[test]
    fn every_palette_has_a_background() {
        for palette in [
            CodeBlockTheme::OneDark,
            CodeBlockTheme::VsDark,
            CodeBlockTheme::Dracula,
            CodeBlockTheme::NightOwl,
            CodeBlockTheme::AtomDark,
        ] {
            let block = highlight("x", None, palette);
            assert!(block.background.is_some(), "{palette:?}");
        }
    }
}
