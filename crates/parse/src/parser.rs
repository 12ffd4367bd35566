//! The combinator tree: typed token recognizers and their composition.
//!
//! A [`Parser`] is a closed variant tree, not a trait object: the full set
//! of combinators is known (`Atom`, `Optional`, `Or`, `AnyOrder`), and a
//! tagged enum keeps matching exhaustive and the tree trivially reusable.

use crate::result::{Field, FieldValue};
use crate::vocab::Vocabulary;

/// Values bound while matching, in match order.
pub(crate) type Bindings = Vec<(Field, FieldValue)>;

/// An atomic recognizer: consumes exactly one token iff it is of the
/// atom's type. "Not my kind of token" is a non-match, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    /// A non-negative integer (combo ordinal).
    Nat,
    /// A known map name or alias.
    Map,
    /// A known tower (upgrade) name or alias.
    Tower,
    /// A known hero name or alias.
    Hero,
}

impl Atom {
    fn field(&self) -> Field {
        match self {
            Atom::Nat => Field::Nat,
            Atom::Map => Field::Map,
            Atom::Tower => Field::Tower,
            Atom::Hero => Field::Hero,
        }
    }

    fn recognize(&self, token: &str, vocab: &dyn Vocabulary) -> Option<FieldValue> {
        match self {
            Atom::Nat => token.parse::<u32>().ok().map(FieldValue::Nat),
            Atom::Map => vocab.canonical_map(token).map(FieldValue::Text),
            Atom::Tower => vocab.canonical_tower(token).map(FieldValue::Text),
            Atom::Hero => vocab.canonical_hero(token).map(FieldValue::Text),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Atom::Nat => "a combo number",
            Atom::Map => "a map",
            Atom::Tower => "a tower",
            Atom::Hero => "a hero",
        }
    }
}

/// A node in the parse tree.
///
/// Trees are plain data with no interior state: matching borrows the tree
/// immutably, so one tree serves any number of independent parses.
#[derive(Debug, Clone)]
pub enum Parser {
    Atom(Atom),
    /// Succeeds with zero consumption when the child does not match.
    Optional(Box<Parser>),
    /// First child to match at the starting position wins. Left-to-right
    /// precedence is the documented tie-break for ambiguous inputs.
    Or(Vec<Parser>),
    /// Children may match in any relative order. Succeeds iff every
    /// required child matches exactly once and no token is left over.
    AnyOrder(Vec<Parser>),
}

impl Parser {
    pub fn nat() -> Parser {
        Parser::Atom(Atom::Nat)
    }

    pub fn map() -> Parser {
        Parser::Atom(Atom::Map)
    }

    pub fn tower() -> Parser {
        Parser::Atom(Atom::Tower)
    }

    pub fn hero() -> Parser {
        Parser::Atom(Atom::Hero)
    }

    pub fn optional(child: Parser) -> Parser {
        Parser::Optional(Box::new(child))
    }

    pub fn or(children: Vec<Parser>) -> Parser {
        Parser::Or(children)
    }

    pub fn any_order(children: Vec<Parser>) -> Parser {
        Parser::AnyOrder(children)
    }

    /// Attempt a match starting at `pos`. Returns the number of tokens
    /// consumed plus the values bound, or `None` on no match. Never
    /// consumes a token twice: `AnyOrder` assigns each token to at most
    /// one child per attempt.
    pub(crate) fn match_at(
        &self,
        tokens: &[&str],
        pos: usize,
        vocab: &dyn Vocabulary,
    ) -> Option<(usize, Bindings)> {
        match self {
            Parser::Atom(atom) => {
                let token = tokens.get(pos)?;
                let value = atom.recognize(token, vocab)?;
                Some((1, vec![(atom.field(), value)]))
            }
            Parser::Optional(child) => match child.match_at(tokens, pos, vocab) {
                Some(hit) => Some(hit),
                None => Some((0, Vec::new())),
            },
            Parser::Or(children) => children
                .iter()
                .find_map(|child| child.match_at(tokens, pos, vocab)),
            Parser::AnyOrder(children) => match_any_order(children, tokens, pos, vocab),
        }
    }

    /// Required leaves of this tree that match at no position of `tokens`.
    /// Used for failure reporting; optional subtrees are never required.
    pub(crate) fn unsatisfied(&self, tokens: &[&str], vocab: &dyn Vocabulary) -> Vec<String> {
        match self {
            Parser::Optional(_) => Vec::new(),
            Parser::AnyOrder(children) => children
                .iter()
                .flat_map(|child| child.unsatisfied(tokens, vocab))
                .collect(),
            other => {
                let satisfiable =
                    (0..tokens.len()).any(|p| other.match_at(tokens, p, vocab).is_some());
                if satisfiable {
                    Vec::new()
                } else {
                    vec![other.describe()]
                }
            }
        }
    }

    /// Human-readable description of the shape, used in diagnostics.
    pub(crate) fn describe(&self) -> String {
        match self {
            Parser::Atom(atom) => atom.describe().to_string(),
            Parser::Optional(child) => format!("optionally {}", child.describe()),
            Parser::Or(children) => children
                .iter()
                .map(Parser::describe)
                .collect::<Vec<_>>()
                .join(" or "),
            Parser::AnyOrder(children) => {
                let parts: Vec<String> = children.iter().map(Parser::describe).collect();
                format!("{} (in any order)", parts.join(", "))
            }
        }
    }
}

/// Backtracking assignment of tokens to `AnyOrder` children.
///
/// Consumes everything from `pos` to the end of the token list or fails.
/// Zero-width matches (unmatched optionals) are settled only once all
/// tokens are placed, so an optional child never shadows a token that a
/// later-tried child could claim.
fn match_any_order(
    children: &[Parser],
    tokens: &[&str],
    pos: usize,
    vocab: &dyn Vocabulary,
) -> Option<(usize, Bindings)> {
    let mut used = vec![false; children.len()];
    let mut bindings = Vec::new();
    if assign(children, &mut used, tokens, pos, vocab, &mut bindings) {
        Some((tokens.len() - pos, bindings))
    } else {
        None
    }
}

fn assign(
    children: &[Parser],
    used: &mut [bool],
    tokens: &[&str],
    pos: usize,
    vocab: &dyn Vocabulary,
    bindings: &mut Bindings,
) -> bool {
    if pos == tokens.len() {
        // Out of tokens: every remaining child must succeed with zero
        // consumption (i.e. be an unmatched optional).
        for (i, child) in children.iter().enumerate() {
            if used[i] {
                continue;
            }
            match child.match_at(tokens, pos, vocab) {
                Some((0, values)) => bindings.extend(values),
                _ => return false,
            }
        }
        return true;
    }

    for i in 0..children.len() {
        if used[i] {
            continue;
        }
        if let Some((consumed, values)) = children[i].match_at(tokens, pos, vocab) {
            if consumed == 0 {
                continue;
            }
            used[i] = true;
            let mark = bindings.len();
            bindings.extend(values);
            if assign(children, used, tokens, pos + consumed, vocab, bindings) {
                return true;
            }
            bindings.truncate(mark);
            used[i] = false;
        }
    }
    false
}
