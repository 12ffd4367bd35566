//! Merging a primary record with an optional override, then pruning the
//! result down to what the reply actually shows.

use crate::record::{Field, Record};

/// Which grammar shape produced the query. Drives pruning: fields that
/// already appear in the reply title are dropped from the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryShape {
    /// Queried by combo number.
    Ordinal,
    /// Queried by tower pair.
    Towers,
}

/// Footer attached when a map-qualified query lands on the combo's own
/// standard-map entry, so no override was needed.
pub const STANDARD_MAP_FOOTER: &str =
    "This is the OG map completion. Enter the same query without the map to see more info.";

/// Shallow union of primary and override fields; override values win on
/// collision. With no override the primary passes through unchanged.
pub fn merge(primary: Record, override_rec: Option<Record>) -> Record {
    match override_rec {
        None => primary,
        Some(overrides) => {
            let mut merged = primary;
            for (field, value) in overrides.iter() {
                merged.insert(field, value.to_string());
            }
            merged
        }
    }
}

/// Drop the fields the reply title already carries.
///
/// `qualified` is true when the query named a map. Qualified replies
/// title both the combo and the map, so the body keeps only the fields
/// that vary per map (person, link, towers-or-number depending on
/// shape). A stray `*` marker in the number field is stripped before it
/// can reach a reply.
pub fn prune_for_display(record: &mut Record, shape: QueryShape, qualified: bool) {
    if qualified {
        record.remove(Field::Map);
        record.remove(Field::Version);
        record.remove(Field::Date);
        record.remove(Field::Current);
    }

    match shape {
        QueryShape::Ordinal => {
            record.remove(Field::Number);
        }
        QueryShape::Towers => {
            record.remove(Field::Tower1);
            record.remove(Field::Tower2);
            if qualified {
                if let Some(number) = record.get(Field::Number) {
                    let clean = number.replace('*', "");
                    record.insert(Field::Number, clean);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> Record {
        [
            (Field::Number, "2".to_string()),
            (Field::Tower1, "Obyn (n/a)".to_string()),
            (Field::Tower2, "Dark Champion (0-2-5)".to_string()),
            (Field::Map, "Monkey Meadow".to_string()),
            (Field::Version, "12.0".to_string()),
            (Field::Date, "12/31/2019".to_string()),
            (Field::Person, "player1".to_string()),
            (Field::Link, "[L](https://example.com/1)".to_string()),
            (Field::Current, "\u{2705}".to_string()),
        ]
        .into_iter()
        .collect()
    }

    fn override_rec() -> Record {
        [
            (Field::Map, "Cube".to_string()),
            (Field::Person, "player2".to_string()),
            (Field::Link, "[L2](https://example.com/2)".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn override_fields_win_on_collision() {
        let merged = merge(primary(), Some(override_rec()));
        assert_eq!(merged.get(Field::Person), Some("player2"));
        assert_eq!(merged.get(Field::Link), Some("[L2](https://example.com/2)"));
        assert_eq!(merged.get(Field::Map), Some("Cube"));
        // Untouched primary fields survive.
        assert_eq!(merged.get(Field::Version), Some("12.0"));
    }

    #[test]
    fn no_override_passes_primary_through() {
        let merged = merge(primary(), None);
        assert_eq!(merged, primary());
    }

    #[test]
    fn ordinal_query_drops_the_number() {
        let mut record = primary();
        prune_for_display(&mut record, QueryShape::Ordinal, false);
        assert!(!record.contains(Field::Number));
        assert!(record.contains(Field::Tower1));
        assert!(record.contains(Field::Map));
    }

    #[test]
    fn qualified_ordinal_query_drops_title_fields() {
        let mut record = merge(primary(), Some(override_rec()));
        prune_for_display(&mut record, QueryShape::Ordinal, true);
        for field in [
            Field::Number,
            Field::Map,
            Field::Version,
            Field::Date,
            Field::Current,
        ] {
            assert!(!record.contains(field), "{:?} should be pruned", field);
        }
        assert_eq!(record.get(Field::Person), Some("player2"));
    }

    #[test]
    fn qualified_pair_query_keeps_a_clean_number() {
        let mut record = primary();
        record.insert(Field::Number, "2*");
        prune_for_display(&mut record, QueryShape::Towers, true);
        assert_eq!(record.get(Field::Number), Some("2"));
        assert!(!record.contains(Field::Tower1));
        assert!(!record.contains(Field::Tower2));
    }
}
