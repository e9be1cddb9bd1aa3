//! Lossless tokenizer for memo text.
//!
//! Splits a raw note body into an ordered sequence of typed tokens in a
//! single left-to-right pass. The tokenizer is total: every input produces
//! a token sequence, and concatenating the token texts in order reproduces
//! the input exactly.

/// Characters that can open or close an inline construct. A maximal run of
/// one of these becomes a single [`TokenKind::Marker`] token.
const RESERVED: &[char] = &['*', '_', '`', '#', '~', '!', '[', ']', '(', ')'];

fn is_reserved(ch: char) -> bool {
    RESERVED.contains(&ch)
}

fn is_horizontal_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Run of ordinary characters with no markup significance.
    Text,
    /// Run of one repeated horizontal whitespace character.
    Space,
    /// Exactly one line feed. Line breaks are never merged, so matchers can
    /// reject constructs that would span one.
    Newline,
    /// Maximal run of one reserved punctuation character. The run length is
    /// part of the kind: `*` and `**` are different kinds, not two tokens of
    /// the same kind.
    Marker(char, usize),
}

/// An atomic lexical unit: a kind plus the exact substring it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Token covering a run of ordinary text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Text,
            text: text.into(),
        }
    }

    /// Token covering a run of horizontal whitespace.
    pub fn space(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Space,
            text: text.into(),
        }
    }

    /// Token covering one line feed.
    pub fn newline() -> Self {
        Self {
            kind: TokenKind::Newline,
            text: "\n".to_string(),
        }
    }

    /// Token covering a run of `run` copies of the reserved character `ch`.
    pub fn marker(ch: char, run: usize) -> Self {
        Self {
            kind: TokenKind::Marker(ch, run),
            text: ch.to_string().repeat(run),
        }
    }
}

/// Tokenizes a note body.
///
/// Total over all inputs, including the empty string; never fails. Each
/// reserved punctuation run, whitespace run, line feed, and ordinary text
/// run becomes exactly one token, in source order.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        let len = if is_reserved(ch) {
            let run = rest.chars().take_while(|&c| c == ch).count();
            let len = ch.len_utf8() * run;
            tokens.push(Token {
                kind: TokenKind::Marker(ch, run),
                text: rest[..len].to_string(),
            });
            len
        } else if ch == '\n' {
            tokens.push(Token::newline());
            1
        } else if is_horizontal_space(ch) {
            let run = rest.chars().take_while(|&c| c == ch).count();
            let len = ch.len_utf8() * run;
            tokens.push(Token {
                kind: TokenKind::Space,
                text: rest[..len].to_string(),
            });
            len
        } else {
            let len = rest
                .find(|c: char| is_reserved(c) || c == '\n' || is_horizontal_space(c))
                .unwrap_or(rest.len());
            tokens.push(Token {
                kind: TokenKind::Text,
                text: rest[..len].to_string(),
            });
            len
        };
        rest = &rest[len..];
    }

    tokens
}
