//! The `roundlength` command: how long a round lasts, from a static
//! per-round table.
//!
//! - `roundlength <r>` — the length of round `r`
//! - `roundlength <start> <end>` — the longest round in `[start, end)`

use std::sync::OnceLock;

use combo_parse::{parse, Parser, Vocabulary};

use crate::reply::{colors, Response};

pub const NAME: &str = "roundlength";

/// Round lengths in seconds, index 0 = round 1.
fn lengths() -> &'static [f64] {
    static TABLE: OnceLock<Vec<f64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        serde_json::from_str(include_str!("../data/roundlength.json"))
            .expect("bundled roundlength.json is valid")
    })
}

fn usage() -> Response {
    Response::Error(crate::reply::ErrorReply {
        title: "ERROR".to_string(),
        causes: vec![format!(
            "q!{} <start round> <end round> (shows the longest round)",
            NAME
        )],
        help: format!("Type `q!{}` for help", NAME),
        color: colors::RED,
    })
}

/// Run the command over raw argument tokens. Everything here is a user
/// interaction; there is no sheet access and no structural failure mode.
pub fn execute(args: &[&str], vocab: &dyn Vocabulary) -> Response {
    let root = Parser::any_order(vec![Parser::nat(), Parser::optional(Parser::nat())]);
    let parsed = parse(args, &root, vocab);
    if parsed.has_errors() {
        return usage();
    }

    let table = lengths();
    let rounds = parsed.nats();
    match rounds.as_slice() {
        [round] => match table.get((*round as usize).wrapping_sub(1)) {
            Some(length) => Response::Text(format!("round {} is {}s long", round, length)),
            None => usage(),
        },
        [start, end] => {
            if start >= end || *start == 0 || *end as usize > table.len() {
                return usage();
            }
            let mut longest_round = 0u32;
            let mut longest_length = 0f64;
            for r in *start..*end {
                let length = table[r as usize];
                if length > longest_length {
                    longest_length = length;
                    longest_round = r + 1;
                }
            }
            Response::Text(format!(
                "From round {} to {}, the longest round is round {} which is {}s long",
                start,
                end,
                longest_round,
                (longest_length * 100.0).round() / 100.0
            ))
        }
        _ => usage(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::StaticVocabulary;

    #[test]
    fn single_round_reports_its_length() {
        let vocab = StaticVocabulary::new();
        let response = execute(&["40"], &vocab);
        match response {
            Response::Text(text) => {
                assert!(text.starts_with("round 40 is "));
                assert!(text.ends_with("s long"));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn range_reports_the_longest_round() {
        let vocab = StaticVocabulary::new();
        let response = execute(&["1", "10"], &vocab);
        match response {
            Response::Text(text) => {
                assert!(text.starts_with("From round 1 to 10"));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_arguments_show_usage() {
        let vocab = StaticVocabulary::new();
        assert!(matches!(execute(&["abc"], &vocab), Response::Error(_)));
        assert!(matches!(execute(&[], &vocab), Response::Error(_)));
    }

    #[test]
    fn out_of_table_round_shows_usage() {
        let vocab = StaticVocabulary::new();
        assert!(matches!(execute(&["9999"], &vocab), Response::Error(_)));
        assert!(matches!(execute(&["0"], &vocab), Response::Error(_)));
    }
}
