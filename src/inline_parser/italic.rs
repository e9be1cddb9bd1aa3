//! Parsing for italic spans (*text*).
//!
//! Rules:
//! - Opens and closes with a single-star marker. The tokenizer folds `**`
//!   into its own double-run kind, so a bold delimiter can never half-match
//!   as italic.
//! - Content cannot be empty or only whitespace, and cannot span a line
//!   break.
//! - Content is stored as raw text.

use crate::inline_parser::{InlineMatch, InlineMatcher, ParseContext};
use crate::node::Node;
use crate::tokenizer::{Token, TokenKind};

pub struct ItalicMatcher;

impl InlineMatcher for ItalicMatcher {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn try_match(&self, tokens: &[Token], _ctx: &ParseContext<'_>) -> Option<InlineMatch> {
        if tokens.first()?.kind != TokenKind::Marker('*', 1) {
            return None;
        }

        let mut close = None;
        for (i, token) in tokens.iter().enumerate().skip(1) {
            match token.kind {
                TokenKind::Newline => return None,
                TokenKind::Marker('*', 1) => {
                    close = Some(i);
                    break;
                }
                _ => {}
            }
        }

        let close = close?;
        let content: String = tokens[1..close].iter().map(|t| t.text.as_str()).collect();
        if content.trim().is_empty() {
            return None;
        }

        Some(InlineMatch {
            node: Node::Italic { content },
            consumed: close + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::inline_parser::InlineParser;
    use crate::tokenizer::tokenize;

    fn try_italic(input: &str) -> Option<InlineMatch> {
        let tokens = tokenize(input);
        let parser = InlineParser::new(&Config::default());
        let ctx = ParseContext {
            parser: &parser,
            depth: 0,
        };
        ItalicMatcher.try_match(&tokens, &ctx)
    }

    #[test]
    fn test_simple_italic() {
        assert_eq!(
            try_italic("*Hello*"),
            Some(InlineMatch {
                node: Node::Italic {
                    content: "Hello".to_string(),
                },
                consumed: 3,
            })
        );
    }

    #[test]
    fn test_spaces_inside_are_kept() {
        assert_eq!(
            try_italic("* Hello world *trailer"),
            Some(InlineMatch {
                node: Node::Italic {
                    content: " Hello world ".to_string(),
                },
                consumed: 7,
            })
        );
    }

    #[test]
    fn test_double_star_does_not_open() {
        assert_eq!(try_italic("**Hello**"), None);
    }

    #[test]
    fn test_no_close_before_end() {
        assert_eq!(try_italic("*Hello"), None);
    }

    #[test]
    fn test_content_cannot_span_line_break() {
        assert_eq!(try_italic("*Hello\nworld*"), None);
    }

    #[test]
    fn test_whitespace_only_content_is_rejected() {
        assert_eq!(try_italic("* *"), None);
        assert_eq!(try_italic("**"), None);
    }
}
