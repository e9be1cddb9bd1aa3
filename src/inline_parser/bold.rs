//! Parsing for bold spans (**text**).
//!
//! Rules:
//! - Opens and closes with a double-star marker. A bare `*` never opens a
//!   bold span, and two separate single-star tokens never form a delimiter;
//!   only a true double-run token counts.
//! - Content cannot be empty and cannot span a line break.
//! - Content tokens are kept verbatim and re-parsed for nested constructs,
//!   bounded by `Config::max_nesting_depth`.

use crate::inline_parser::{InlineMatch, InlineMatcher, ParseContext};
use crate::node::Node;
use crate::tokenizer::{Token, TokenKind};

pub struct BoldMatcher;

impl InlineMatcher for BoldMatcher {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn try_match(&self, tokens: &[Token], ctx: &ParseContext<'_>) -> Option<InlineMatch> {
        if tokens.first()?.kind != TokenKind::Marker('*', 2) {
            return None;
        }

        let mut close = None;
        for (i, token) in tokens.iter().enumerate().skip(1) {
            match token.kind {
                TokenKind::Newline => return None,
                TokenKind::Marker('*', 2) => {
                    close = Some(i);
                    break;
                }
                _ => {}
            }
        }

        let close = close?;
        if close == 1 {
            // Immediately adjacent delimiters hold no content.
            return None;
        }

        let content = tokens[1..close].to_vec();
        let children = ctx.parse_nested(&content)?;
        Some(InlineMatch {
            node: Node::Bold { content, children },
            consumed: close + 1,
        })
    }
}
