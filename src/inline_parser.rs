//! Inline markup parsing over the token stream.
//!
//! The engine holds an ordered registry of matchers, one per inline
//! construct. At each cursor position it tries every matcher in
//! registration order; the first success appends its node and advances the
//! cursor by the consumed token count. A position nobody claims falls back
//! to literal text, so parsing is total over any token sequence.

use crate::config::Config;
use crate::node::Node;
use crate::tokenizer::Token;

mod bold;
mod code_spans;
mod italic;
mod links;
mod strikeout;
mod tags;

use bold::BoldMatcher;
use code_spans::CodeMatcher;
use italic::ItalicMatcher;
use links::{ImageMatcher, LinkMatcher};
use strikeout::StrikethroughMatcher;
use tags::TagMatcher;

/// A successful match: the produced node and how many tokens it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub node: Node,
    pub consumed: usize,
}

/// One inline construct.
///
/// Implementations are pure scanners: they inspect the token slice starting
/// at the engine's cursor and either claim a span or report no match,
/// without mutating anything. "No match" is a first-class negative result,
/// never an error.
pub trait InlineMatcher: Send + Sync {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Attempts a match at the start of `tokens`. A successful match must
    /// consume at least one token so the engine always makes progress.
    fn try_match(&self, tokens: &[Token], ctx: &ParseContext<'_>) -> Option<InlineMatch>;
}

/// Per-call state handed to matchers: the engine itself (for nested passes
/// over container content) and the current nesting depth.
pub struct ParseContext<'a> {
    parser: &'a InlineParser,
    depth: usize,
}

impl ParseContext<'_> {
    /// Re-parses the content tokens of a container construct one level
    /// deeper. Returns `None` once the configured depth bound is reached;
    /// callers turn that into a failed match so the outer span degrades to
    /// literal text instead of recursing without bound.
    pub fn parse_nested(&self, tokens: &[Token]) -> Option<Vec<Node>> {
        if self.depth >= self.parser.config.max_nesting_depth {
            log::debug!(
                "nesting depth {} reached, treating span as literal",
                self.depth
            );
            return None;
        }
        Some(self.parser.parse_at_depth(tokens, self.depth + 1))
    }
}

/// The inline parser engine: an ordered matcher registry plus the cursor
/// loop that drives it.
pub struct InlineParser {
    matchers: Vec<Box<dyn InlineMatcher>>,
    config: Config,
}

impl InlineParser {
    /// Builds the engine with the registry dictated by `config.extensions`.
    /// Registration order is priority order: the first matcher to claim a
    /// position wins, and later matchers never see its territory.
    pub fn new(config: &Config) -> Self {
        let extensions = &config.extensions;
        let mut matchers: Vec<Box<dyn InlineMatcher>> = Vec::new();
        if extensions.bold {
            matchers.push(Box::new(BoldMatcher));
        }
        if extensions.italic {
            matchers.push(Box::new(ItalicMatcher));
        }
        if extensions.code {
            matchers.push(Box::new(CodeMatcher));
        }
        if extensions.image {
            matchers.push(Box::new(ImageMatcher));
        }
        if extensions.link {
            matchers.push(Box::new(LinkMatcher));
        }
        if extensions.tag {
            matchers.push(Box::new(TagMatcher));
        }
        if extensions.strikethrough {
            matchers.push(Box::new(StrikethroughMatcher));
        }
        Self {
            matchers,
            config: config.clone(),
        }
    }

    /// Parses a token sequence into inline nodes.
    pub fn parse(&self, tokens: &[Token]) -> Vec<Node> {
        self.parse_at_depth(tokens, 0)
    }

    fn parse_at_depth(&self, tokens: &[Token], depth: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut literal = String::new();
        let mut pos = 0;

        while pos < tokens.len() {
            let ctx = ParseContext {
                parser: self,
                depth,
            };
            let matched = self.matchers.iter().find_map(|matcher| {
                let m = matcher.try_match(&tokens[pos..], &ctx)?;
                log::debug!(
                    "matched {} at token {} ({} tokens)",
                    matcher.name(),
                    pos,
                    m.consumed
                );
                Some(m)
            });

            match matched {
                Some(m) => {
                    debug_assert!(m.consumed >= 1, "matchers must consume at least one token");
                    flush_literal(&mut literal, &mut nodes);
                    nodes.push(m.node);
                    pos += m.consumed.max(1);
                }
                None => {
                    literal.push_str(&tokens[pos].text);
                    pos += 1;
                }
            }
        }

        flush_literal(&mut literal, &mut nodes);
        nodes
    }
}

fn flush_literal(literal: &mut String, nodes: &mut Vec<Node>) {
    if !literal.is_empty() {
        nodes.push(Node::Text {
            content: std::mem::take(literal),
        });
    }
}
