//! combo-parse: declarative argument parsing for comboindex chat commands.
//!
//! A command declares its accepted shapes as a small combinator tree
//! ([`Parser`]) over typed token recognizers ([`Atom`]). The engine
//! ([`parse()`]) drives the tree over the full argument list; a shape is
//! accepted only if it consumes every token. Failures come back as
//! user-facing sentences, one per shape attempted, never as panics.
//!
//! Trees are plain data: stateless, reentrant, and reusable across
//! invocations. Token recognition that depends on the game's vocabulary
//! (map names, towers, heroes) goes through an injected [`Vocabulary`]
//! rather than any global table.

pub mod engine;
pub mod parser;
pub mod result;
pub mod vocab;

pub use engine::parse;
pub use parser::{Atom, Parser};
pub use result::{Field, FieldValue, ParseResult};
pub use vocab::Vocabulary;
