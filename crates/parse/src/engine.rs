//! The parse engine: drives a parser tree over a full argument list.

use crate::parser::Parser;
use crate::result::ParseResult;
use crate::vocab::Vocabulary;

/// Parse `tokens` against `root`, which is typically an `Or` over the
/// whole-command shapes a command accepts.
///
/// A shape is accepted only if it consumes the entire argument list; a
/// shape that matches a prefix but leaves tokens behind is treated as a
/// non-match and the next shape is tried. On total failure the result
/// carries one user-facing sentence per shape, in attempt order.
pub fn parse(tokens: &[&str], root: &Parser, vocab: &dyn Vocabulary) -> ParseResult {
    let single = std::slice::from_ref(root);
    let shapes: &[Parser] = match root {
        Parser::Or(children) => children,
        _ => single,
    };

    for shape in shapes {
        if let Some((consumed, bindings)) = shape.match_at(tokens, 0, vocab) {
            if consumed == tokens.len() {
                return ParseResult::from_bindings(bindings);
            }
        }
    }

    let errors = shapes
        .iter()
        .map(|shape| diagnose(shape, tokens, vocab))
        .collect();
    ParseResult::failed(errors)
}

fn diagnose(shape: &Parser, tokens: &[&str], vocab: &dyn Vocabulary) -> String {
    let line = tokens.join(" ");
    let missing = shape.unsatisfied(tokens, vocab);
    if missing.is_empty() {
        format!("`{}` doesn't match {}", line, shape.describe())
    } else {
        format!(
            "Expected {} but couldn't find it in `{}`",
            missing.join(" and "),
            line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Field;

    struct TestVocab;

    impl Vocabulary for TestVocab {
        fn canonical_map(&self, raw: &str) -> Option<String> {
            (raw.eq_ignore_ascii_case("cube")).then(|| "Cube".to_string())
        }

        fn canonical_tower(&self, raw: &str) -> Option<String> {
            (raw.eq_ignore_ascii_case("dch")).then(|| "Dark Champion".to_string())
        }

        fn canonical_hero(&self, raw: &str) -> Option<String> {
            (raw.eq_ignore_ascii_case("obyn")).then(|| "Obyn".to_string())
        }
    }

    fn combo_grammar() -> Parser {
        let tower_or_hero = || Parser::or(vec![Parser::tower(), Parser::hero()]);
        Parser::or(vec![
            Parser::map(),
            Parser::any_order(vec![Parser::nat(), Parser::optional(Parser::map())]),
            Parser::any_order(vec![
                tower_or_hero(),
                Parser::optional(tower_or_hero()),
                Parser::optional(Parser::map()),
            ]),
        ])
    }

    #[test]
    fn whole_line_must_be_consumed() {
        let grammar = combo_grammar();
        let parsed = parse(&["44", "cube", "extra"], &grammar, &TestVocab);
        assert!(parsed.has_errors());
    }

    #[test]
    fn first_full_match_wins() {
        let grammar = combo_grammar();
        let parsed = parse(&["cube"], &grammar, &TestVocab);
        assert!(!parsed.has_errors());
        assert_eq!(parsed.map(), Some("Cube"));
        assert!(!parsed.has(Field::Nat));
    }

    #[test]
    fn ordinal_with_map_binds_both() {
        let grammar = combo_grammar();
        let parsed = parse(&["cube", "44"], &grammar, &TestVocab);
        assert!(!parsed.has_errors());
        assert_eq!(parsed.nat(), Some(44));
        assert_eq!(parsed.map(), Some("Cube"));
    }

    #[test]
    fn pair_query_binds_in_match_order() {
        let grammar = combo_grammar();
        let parsed = parse(&["obyn", "dch", "cube"], &grammar, &TestVocab);
        assert!(!parsed.has_errors());
        assert_eq!(parsed.heroes(), vec!["Obyn"]);
        assert_eq!(parsed.towers(), vec!["Dark Champion"]);
        assert_eq!(parsed.map(), Some("Cube"));
    }

    #[test]
    fn failure_reports_one_sentence_per_shape() {
        let grammar = combo_grammar();
        let parsed = parse(&["nonsense"], &grammar, &TestVocab);
        assert_eq!(parsed.errors.len(), 3);
        assert!(parsed.errors.iter().all(|e| e.contains("nonsense")));
    }

    #[test]
    fn same_tree_is_reusable_across_parses() {
        let grammar = combo_grammar();
        let first = parse(&["44"], &grammar, &TestVocab);
        let second = parse(&["cube", "44"], &grammar, &TestVocab);
        assert_eq!(first.nat(), Some(44));
        assert!(first.map().is_none());
        assert_eq!(second.nat(), Some(44));
        assert_eq!(second.map(), Some("Cube"));
    }
}
