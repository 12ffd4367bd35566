//! Vocabulary lookup used by token recognizers.
//!
//! The alias tables themselves (map abbreviations, tower shorthands, hero
//! names) live with the command surface; the parser only needs a way to ask
//! "is this token a known X, and what is its canonical form?".

/// Canonicalization of raw user tokens against the game's alias tables.
///
/// Each method returns the canonical display form for a recognized token,
/// or `None` when the token is not in that table. Lookups are expected to
/// be case-insensitive; the returned form is the one shown to users
/// (e.g. `frozen_over` → `Frozen Over`).
pub trait Vocabulary {
    fn canonical_map(&self, raw: &str) -> Option<String>;
    fn canonical_tower(&self, raw: &str) -> Option<String>;
    fn canonical_hero(&self, raw: &str) -> Option<String>;
}
