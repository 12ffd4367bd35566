//! The `combo` command: trivia lookups against the combo index sheet.
//!
//! Accepted shapes (whole line must match):
//!
//! - `combo` / `combo help` — help embed
//! - `combo <map>` — per-map listing (still to come)
//! - `combo <n> [<map>]` — by ordinal, any argument order
//! - `combo <tower|hero> [<tower|hero>] [<map>]` — by pair, any order

use combo_index::{
    merge, overrides, primary, prune_for_display, text, Field, LookupError, QueryShape, Record,
    STANDARD_MAP_FOOTER,
};
use combo_parse::{parse, ParseResult, Parser, Vocabulary};
use combo_sheets::SheetSource;
use tracing::debug;

use crate::reply::{colors, ErrorReply, Reply, Response};

pub const NAME: &str = "combo";

const COMING_SOON: &str = "Multiple-combo searching coming soon";

/// The command's whole-line grammar. One tree instance is reusable, but
/// building it is cheap enough to do per invocation.
pub fn grammar() -> Parser {
    let tower_or_hero = || Parser::or(vec![Parser::tower(), Parser::hero()]);
    Parser::or(vec![
        // Which combos have been done on this map?
        Parser::map(),
        // Get a combo by number, optionally on the specified map.
        Parser::any_order(vec![Parser::nat(), Parser::optional(Parser::map())]),
        // Get a combo by the towers involved, optionally on a map.
        Parser::any_order(vec![
            tower_or_hero(),
            Parser::optional(tower_or_hero()),
            Parser::optional(Parser::map()),
        ]),
    ])
}

/// Run the command over raw argument tokens.
///
/// User errors (parse failures, bad ordinals, unknown pairings, missing
/// overrides) come back as `Response::Error`. Structural errors bubble
/// out as `Err` so the caller fails loudly.
pub async fn execute(
    args: &[&str],
    sheet: &dyn SheetSource,
    vocab: &dyn Vocabulary,
) -> Result<Response, LookupError> {
    if args.is_empty() || matches!(args, ["help"]) {
        return Ok(Response::Embed(help()));
    }

    let root = grammar();
    let parsed = parse(args, &root, vocab);
    if parsed.has_errors() {
        return Ok(Response::Error(ErrorReply::new(parsed.errors, NAME)));
    }

    match dispatch(&parsed, sheet).await {
        Ok(response) => Ok(response),
        Err(e) if e.is_user_error() => {
            Ok(Response::Error(ErrorReply::new(vec![e.to_string()], NAME)))
        }
        Err(e) => Err(e),
    }
}

async fn dispatch(parsed: &ParseResult, sheet: &dyn SheetSource) -> Result<Response, LookupError> {
    if let Some(n) = parsed.nat() {
        debug!(n, map = ?parsed.map(), "dispatching ordinal query");
        let reply = match parsed.map() {
            Some(map) => by_ordinal_on_map(sheet, n, map).await?,
            None => by_ordinal(sheet, n).await?,
        };
        return Ok(Response::Embed(reply));
    }

    let heroes = parsed.heroes();
    let towers = parsed.towers();
    if !heroes.is_empty() || !towers.is_empty() {
        if heroes.len() == 2 {
            return Err(LookupError::TwoHeroes);
        }
        // Heroes first, then tower upgrades, matching how pairs are
        // quoted in the index community.
        let mut units = heroes;
        units.extend(towers);
        if units.len() == 1 {
            return Ok(Response::Text(COMING_SOON.to_string()));
        }
        let pair = (units[0], units[1]);
        debug!(?pair, map = ?parsed.map(), "dispatching pair query");
        let reply = match parsed.map() {
            Some(map) => by_pair_on_map(sheet, pair, map).await?,
            None => by_pair(sheet, pair).await?,
        };
        return Ok(Response::Embed(reply));
    }

    // Map-only query: per-map listing is still to come.
    Ok(Response::Text(COMING_SOON.to_string()))
}

pub fn help() -> Reply {
    Reply::new("`q!combo` HELP", colors::CYBER)
        .field(
            "`q!combo <n>`",
            "Get the nth combo on its standard map\n`q!combo 44`",
            false,
        )
        .field(
            "`q!combo <n> <map>`",
            "Get the nth combo on the specified map\n`q!combo 44 frozen_over`",
            false,
        )
        .field(
            "`q!combo <tower/hero> <tower/hero>`",
            "Get a combo by the towers involved\n`q!combo obyn dch`",
            false,
        )
        .field(
            "`q!combo <tower/hero> <tower/hero> <map>`",
            "Get a combo by the towers involved on the specified map\n`q!combo obyn dch cube`",
            false,
        )
}

fn embed(title: String, record: &Record, footer: Option<&str>) -> Reply {
    let mut reply = Reply::new(title, colors::CYBER);
    for (field, value) in record.iter() {
        reply = reply.field(field.label(), value, true);
    }
    if let Some(footer) = footer {
        reply = reply.footer(footer);
    }
    reply
}

async fn by_ordinal(sheet: &dyn SheetSource, n: u32) -> Result<Reply, LookupError> {
    let row = primary::row_from_ordinal(sheet, n).await?;
    let mut record = primary::read_combo_row(sheet, row).await?;
    prune_for_display(&mut record, QueryShape::Ordinal, false);
    Ok(embed(format!("Combo #{}", n), &record, None))
}

async fn by_ordinal_on_map(
    sheet: &dyn SheetSource,
    n: u32,
    map: &str,
) -> Result<Reply, LookupError> {
    let row = primary::row_from_ordinal(sheet, n).await?;
    let primary_record = primary::read_combo_row(sheet, row).await?;

    let (mut record, footer) = if primary_record.get(Field::Map) == Some(map) {
        (primary_record, Some(STANDARD_MAP_FOOTER))
    } else {
        let override_record = overrides::find_override(sheet, n, map).await?;
        (merge(primary_record, Some(override_record)), None)
    };

    prune_for_display(&mut record, QueryShape::Ordinal, true);
    Ok(embed(format!("Combo #{} on {}", n, map), &record, footer))
}

async fn by_pair(sheet: &dyn SheetSource, pair: (&str, &str)) -> Result<Reply, LookupError> {
    let row = primary::row_from_towers(sheet, pair).await?;
    let mut record = primary::read_combo_row(sheet, row).await?;

    // Title the towers in table order, upgrades included.
    let title_pair = display_pair(&record);
    prune_for_display(&mut record, QueryShape::Towers, false);
    Ok(embed(format!("Combo: {}", title_pair), &record, None))
}

async fn by_pair_on_map(
    sheet: &dyn SheetSource,
    pair: (&str, &str),
    map: &str,
) -> Result<Reply, LookupError> {
    let row = primary::row_from_towers(sheet, pair).await?;
    let primary_record = primary::read_combo_row(sheet, row).await?;

    let number_text = primary_record.get(Field::Number).unwrap_or_default();
    let n = text::leading_number(number_text).ok_or_else(|| LookupError::BadNumberCell {
        value: number_text.to_string(),
    })?;

    let title_pair = display_pair(&primary_record);
    let (mut record, footer) = if primary_record.get(Field::Map) == Some(map) {
        (primary_record, Some(STANDARD_MAP_FOOTER))
    } else {
        let override_record = overrides::find_override(sheet, n, map).await?;
        (merge(primary_record, Some(override_record)), None)
    };

    prune_for_display(&mut record, QueryShape::Towers, true);
    Ok(embed(
        format!("Combo on {}: {}", map, title_pair),
        &record,
        footer,
    ))
}

fn display_pair(record: &Record) -> String {
    format!(
        "{} + {}",
        record.get(Field::Tower1).unwrap_or_default(),
        record.get(Field::Tower2).unwrap_or_default()
    )
}
