//! Parse results: named, typed query fields plus diagnostics.

use std::collections::BTreeMap;

/// Names for the query fields a parser tree can bind.
///
/// Closed enum so downstream dispatch is exhaustive. `Ord` gives the field
/// bag a stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Nat,
    Map,
    Tower,
    Hero,
}

/// A single bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Nat(u32),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Nat(_) => None,
        }
    }
}

/// The outcome of driving a parser tree over an argument list.
///
/// Fields bound by repeated parsers of the same name accumulate in match
/// order. If `errors` is non-empty the parse failed, regardless of any
/// fields that happened to bind along the way.
#[derive(Debug, Default)]
pub struct ParseResult {
    fields: BTreeMap<Field, Vec<FieldValue>>,
    pub errors: Vec<String>,
}

impl ParseResult {
    pub(crate) fn from_bindings(bindings: Vec<(Field, FieldValue)>) -> Self {
        let mut result = ParseResult::default();
        for (field, value) in bindings {
            result.fields.entry(field).or_default().push(value);
        }
        result
    }

    pub(crate) fn failed(errors: Vec<String>) -> Self {
        ParseResult {
            fields: BTreeMap::new(),
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when the field bound at least once. Distinguishes an absent
    /// optional from one that matched.
    pub fn has(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// The single natural number, if one was bound.
    pub fn nat(&self) -> Option<u32> {
        match self.fields.get(&Field::Nat)?.first()? {
            FieldValue::Nat(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    /// All bound natural numbers, in match order.
    pub fn nats(&self) -> Vec<u32> {
        self.fields
            .get(&Field::Nat)
            .map(|vs| {
                vs.iter()
                    .filter_map(|v| match v {
                        FieldValue::Nat(n) => Some(*n),
                        FieldValue::Text(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The single map name, if one was bound (canonical form).
    pub fn map(&self) -> Option<&str> {
        self.fields.get(&Field::Map)?.first()?.as_text()
    }

    /// All bound tower names, in match order (canonical form).
    pub fn towers(&self) -> Vec<&str> {
        self.texts(Field::Tower)
    }

    /// All bound hero names, in match order (canonical form).
    pub fn heroes(&self) -> Vec<&str> {
        self.texts(Field::Hero)
    }

    fn texts(&self, field: Field) -> Vec<&str> {
        self.fields
            .get(&field)
            .map(|vs| vs.iter().filter_map(FieldValue::as_text).collect())
            .unwrap_or_default()
    }
}
