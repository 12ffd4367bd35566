//! The combo record: a closed set of display fields in table order.

use std::collections::BTreeMap;

/// Semantic names of the columns a combo record carries.
///
/// A closed enum rather than free-form strings so that merge and prune
/// logic stays exhaustive at compile time. The derived `Ord` fixes the
/// display order to the table's column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Number,
    Tower1,
    Tower2,
    /// Raw upgrade tags; folded into the tower fields before display.
    Upgrades,
    Map,
    Version,
    Date,
    Person,
    Link,
    Current,
}

impl Field {
    /// Label shown in a reply.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Number => "Number",
            Field::Tower1 => "Tower 1",
            Field::Tower2 => "Tower 2",
            Field::Upgrades => "Upgrades",
            Field::Map => "Map",
            Field::Version => "Version",
            Field::Date => "Date",
            Field::Person => "Person",
            Field::Link => "Link",
            Field::Current => "Current",
        }
    }
}

/// An ordered field-to-value map for one resolved combo.
///
/// Created per command invocation and discarded after the reply is
/// built; nothing here persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<Field, String>,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.fields.remove(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Fields in display (column) order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(Field, String)> for Record {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}
