//! Parsing for inline code spans (`code`).
//!
//! Rules:
//! - Opens and closes with a single backtick. Two adjacent backticks merge
//!   into one double-run token, so an empty code span cannot occur.
//! - Content cannot span a line break.
//! - Content is raw text and is never re-parsed for nested constructs.

use crate::inline_parser::{InlineMatch, InlineMatcher, ParseContext};
use crate::node::Node;
use crate::tokenizer::{Token, TokenKind};

pub struct CodeMatcher;

impl InlineMatcher for CodeMatcher {
    fn name(&self) -> &'static str {
        "code"
    }

    fn try_match(&self, tokens: &[Token], _ctx: &ParseContext<'_>) -> Option<InlineMatch> {
        if tokens.first()?.kind != TokenKind::Marker('`', 1) {
            return None;
        }

        let mut close = None;
        for (i, token) in tokens.iter().enumerate().skip(1) {
            match token.kind {
                TokenKind::Newline => return None,
                TokenKind::Marker('`', 1) => {
                    close = Some(i);
                    break;
                }
                _ => {}
            }
        }

        let close = close?;
        let content: String = tokens[1..close].iter().map(|t| t.text.as_str()).collect();
        Some(InlineMatch {
            node: Node::Code { content },
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

    fn try_code(input: &str) -> Option<InlineMatch> {
        let tokens = tokenize(input);
        let parser = InlineParser::new(&Config::default());
        let ctx = ParseContext {
            parser: &parser,
            depth: 0,
        };
        CodeMatcher.try_match(&tokens, &ctx)
    }

    #[test]
    fn test_no_close_before_end() {
        assert_eq!(try_code("`Hello world!"), None);
    }

    #[test]
    fn test_simple_code_span() {
        assert_eq!(
            try_code("`Hello world!`"),
            Some(InlineMatch {
                node: Node::Code {
                    content: "Hello world!".to_string(),
                },
                consumed: 6,
            })
        );
    }

    #[test]
    fn test_content_cannot_span_line_break() {
        assert_eq!(try_code("`Hello \nworld!`"), None);
    }

    #[test]
    fn test_markup_inside_stays_raw() {
        assert_eq!(
            try_code("`**not bold**`"),
            Some(InlineMatch {
                node: Node::Code {
                    content: "**not bold**".to_string(),
                },
                consumed: 7,
            })
        );
    }

    #[test]
    fn test_double_backtick_is_not_a_delimiter() {
        assert_eq!(try_code("``"), None);
        assert_eq!(try_code("``x``"), None);
    }

    #[test]
    fn test_code_span_with_trailing_text() {
        assert_eq!(
            try_code("`code` and more"),
            Some(InlineMatch {
                node: Node::Code {
                    content: "code".to_string(),
                },
                consumed: 3,
            })
        );
    }
}
