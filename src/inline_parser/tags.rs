//! Parsing for tag references (#tag).
//!
//! A tag is a single `#` followed by anything up to the next whitespace,
//! line break, or `#` run. The reference cannot be empty.

use crate::inline_parser::{InlineMatch, InlineMatcher, ParseContext};
use crate::node::Node;
use crate::tokenizer::{Token, TokenKind};

pub struct TagMatcher;

impl InlineMatcher for TagMatcher {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn try_match(&self, tokens: &[Token], _ctx: &ParseContext<'_>) -> Option<InlineMatch> {
        if tokens.first()?.kind != TokenKind::Marker('#', 1) {
            return None;
        }

        let mut content = String::new();
        let mut cursor = 1;
        while let Some(token) = tokens.get(cursor) {
            match token.kind {
                TokenKind::Space | TokenKind::Newline | TokenKind::Marker('#', _) => break,
                _ => content.push_str(&token.text),
            }
            cursor += 1;
        }

        if content.is_empty() {
            return None;
        }

        Some(InlineMatch {
            node: Node::Tag { content },
            consumed: cursor,
        })
    }
}
