//! Typed inline nodes produced by the parser engine.

use std::fmt;

use crate::tokenizer::Token;

/// One inline element of a parsed note body.
///
/// Every variant owns its data outright; a parse result carries no
/// references into the token sequence or the source text. The `Display`
/// impl writes back the exact source span a node covers, so concatenating
/// a parse result reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Literal text the engine could not match. Adjacent fallback runs are
    /// coalesced into a single node.
    Text { content: String },
    /// `**content**`. Carries the content tokens verbatim along with the
    /// nested parse of the same span.
    Bold {
        content: Vec<Token>,
        children: Vec<Node>,
    },
    /// `*content*`.
    Italic { content: String },
    /// `` `content` ``. The content is opaque and never re-parsed.
    Code { content: String },
    /// `~~content~~`.
    Strikethrough { content: String },
    /// `[text](url)`.
    Link { text: String, url: String },
    /// `![alt_text](url)`.
    Image { alt_text: String, url: String },
    /// `#content`.
    Tag { content: String },
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text { content } => write!(f, "{content}"),
            Node::Bold { content, .. } => {
                write!(f, "**")?;
                for token in content {
                    write!(f, "{}", token.text)?;
                }
                write!(f, "**")
            }
            Node::Italic { content } => write!(f, "*{content}*"),
            Node::Code { content } => write!(f, "`{content}`"),
            Node::Strikethrough { content } => write!(f, "~~{content}~~"),
            Node::Link { text, url } => write!(f, "[{text}]({url})"),
            Node::Image { alt_text, url } => write!(f, "![{alt_text}]({url})"),
            Node::Tag { content } => write!(f, "#{content}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reconstructs_source() {
        let cases: Vec<(Node, &str)> = vec![
            (
                Node::Text {
                    content: "plain".to_string(),
                },
                "plain",
            ),
            (
                Node::Bold {
                    content: vec![
                        Token::space(" "),
                        Token::text("Hello"),
                        Token::space(" "),
                    ],
                    children: vec![Node::Text {
                        content: " Hello ".to_string(),
                    }],
                },
                "** Hello **",
            ),
            (
                Node::Italic {
                    content: "slanted".to_string(),
                },
                "*slanted*",
            ),
            (
                Node::Code {
                    content: "let x = 1;".to_string(),
                },
                "`let x = 1;`",
            ),
            (
                Node::Strikethrough {
                    content: "gone".to_string(),
                },
                "~~gone~~",
            ),
            (
                Node::Link {
                    text: "here".to_string(),
                    url: "https://example.com".to_string(),
                },
                "[here](https://example.com)",
            ),
            (
                Node::Image {
                    alt_text: "".to_string(),
                    url: "https://example.com/a.png".to_string(),
                },
                "![](https://example.com/a.png)",
            ),
            (
                Node::Tag {
                    content: "memo".to_string(),
                },
                "#memo",
            ),
        ];

        for (node, source) in cases {
            assert_eq!(node.to_string(), source);
        }
    }
}
