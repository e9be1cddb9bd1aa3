//! Tokenizer and inline markup parser for memo text.
//!
//! The crate exposes two entry points: [`tokenize`] turns a note body into
//! a lossless token sequence, and [`parse_inline`] turns the same text into
//! a sequence of typed inline nodes (bold, code, images, links, tags, ...).
//! Both are total: any input produces a result, and markup that does not
//! form a valid construct is handed back as literal text.
//!
//! Parsing one note is a pure function of its text. The engine keeps no
//! state between calls, so different notes can be parsed concurrently
//! without synchronization.

pub mod config;
pub mod inline_parser;
pub mod node;
pub mod tokenizer;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::Extensions;
pub use inline_parser::InlineMatch;
pub use inline_parser::InlineMatcher;
pub use inline_parser::InlineParser;
pub use inline_parser::ParseContext;
pub use node::Node;
pub use tokenizer::Token;
pub use tokenizer::TokenKind;
pub use tokenizer::tokenize;

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses the inline markup of one note body with the default
/// configuration.
///
/// # Examples
///
/// ```
/// use notemark::{Node, parse_inline};
///
/// let nodes = parse_inline("status: **done** #work");
/// assert!(matches!(nodes[1], Node::Bold { .. }));
/// ```
pub fn parse_inline(input: &str) -> Vec<Node> {
    parse_inline_with(input, &Config::default())
}

/// Parses the inline markup of one note body with an explicit
/// configuration.
pub fn parse_inline_with(input: &str, config: &Config) -> Vec<Node> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let tokens = tokenizer::tokenize(input);
    InlineParser::new(config).parse(&tokens)
}
