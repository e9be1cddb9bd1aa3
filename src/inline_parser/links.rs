//! Parsing for links and images.
//!
//! Implements:
//! - Inline links: `[text](url)`
//! - Inline images: `![alt](url)`
//!
//! Rules:
//! - The fixed markers tolerate no intervening tokens: `![`, `](` and the
//!   closing paren must be immediately adjacent to their neighbors.
//! - Alt and link text are free text: whitespace is allowed, the region may
//!   be empty, but it cannot span a line break.
//! - The URL must be non-empty and contain no whitespace.

use crate::inline_parser::{InlineMatch, InlineMatcher, ParseContext};
use crate::node::Node;
use crate::tokenizer::{Token, TokenKind};

/// Scans `[text](url)` starting at `tokens[0]`. Returns the text, the url,
/// and the number of tokens covered through the closing paren.
fn scan_bracketed(tokens: &[Token]) -> Option<(String, String, usize)> {
    if tokens.first()?.kind != TokenKind::Marker('[', 1) {
        return None;
    }

    let mut text = String::new();
    let mut cursor = 1;
    loop {
        let token = tokens.get(cursor)?;
        match token.kind {
            TokenKind::Newline => return None,
            TokenKind::Marker(']', 1) => break,
            _ => text.push_str(&token.text),
        }
        cursor += 1;
    }

    if tokens.get(cursor + 1)?.kind != TokenKind::Marker('(', 1) {
        return None;
    }

    let mut url = String::new();
    cursor += 2;
    loop {
        let token = tokens.get(cursor)?;
        match token.kind {
            TokenKind::Space | TokenKind::Newline => return None,
            TokenKind::Marker(')', 1) => break,
            _ => url.push_str(&token.text),
        }
        cursor += 1;
    }

    if url.is_empty() {
        return None;
    }

    Some((text, url, cursor + 1))
}

pub struct ImageMatcher;

impl InlineMatcher for ImageMatcher {
    fn name(&self) -> &'static str {
        "image"
    }

    fn try_match(&self, tokens: &[Token], _ctx: &ParseContext<'_>) -> Option<InlineMatch> {
        if tokens.first()?.kind != TokenKind::Marker('!', 1) {
            return None;
        }
        let (alt_text, url, consumed) = scan_bracketed(&tokens[1..])?;
        Some(InlineMatch {
            node: Node::Image { alt_text, url },
            consumed: consumed + 1,
        })
    }
}

pub struct LinkMatcher;

impl InlineMatcher for LinkMatcher {
    fn name(&self) -> &'static str {
        "link"
    }

    fn try_match(&self, tokens: &[Token], _ctx: &ParseContext<'_>) -> Option<InlineMatch> {
        let (text, url, consumed) = scan_bracketed(tokens)?;
        Some(InlineMatch {
            node: Node::Link { text, url },
            consumed,
        })
    }
}
