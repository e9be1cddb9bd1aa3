//! Parsing for strikethrough spans (~~text~~).
//!
//! Rules:
//! - Opens and closes with a double-tilde marker; a single `~` has no
//!   markup meaning here.
//! - Content cannot be empty and cannot span a line break.
//! - Content is stored as raw text.

use crate::inline_parser::{InlineMatch, InlineMatcher, ParseContext};
use crate::node::Node;
use crate::tokenizer::{Token, TokenKind};

pub struct StrikethroughMatcher;

impl InlineMatcher for StrikethroughMatcher {
    fn name(&self) -> &'static str {
        "strikethrough"
    }

    fn try_match(&self, tokens: &[Token], _ctx: &ParseContext<'_>) -> Option<InlineMatch> {
        if tokens.first()?.kind != TokenKind::Marker('~', 2) {
            return None;
        }

        let mut close = None;
        for (i, token) in tokens.iter().enumerate().skip(1) {
            match token.kind {
                TokenKind::Newline => return None,
                TokenKind::Marker('~', 2) => {
                    close = Some(i);
                    break;
                }
                _ => {}
            }
        }

        let close = close?;
        if close == 1 {
            return None;
        }

        let content: String = tokens[1..close].iter().map(|t| t.text.as_str()).collect();
        Some(InlineMatch {
            node: Node::Strikethrough { content },
            consumed: close + 1,
        })
    }
}
