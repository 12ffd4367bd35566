//! Primary-table matching: ordinal and tower-pair entry points, plus
//! row extraction into a display-ready [`Record`].

use combo_sheets::{a1, range, SheetSource};
use tracing::debug;

use crate::error::LookupError;
use crate::offset::find_header_row;
use crate::record::{Field, Record};
use crate::text::{ordinal, unordered_pair_eq};

/// Column letters of the primary table.
pub(crate) mod cols {
    pub const NUMBER: char = 'B';
    pub const TOWER_1: char = 'C';
    pub const TOWER_2: char = 'E';
    pub const UPGRADES: char = 'G';
    pub const MAP: char = 'I';
    pub const VERSION: char = 'K';
    pub const DATE: char = 'L';
    pub const PERSON: char = 'M';
    pub const LINK: char = 'O';
    pub const CURRENT: char = 'P';
}

/// Summary cell holding the total number of listed combos.
const COUNT_CELL: &str = "J6";

/// Marker text identifying the header row, searched in the NUMBER column.
const HEADER_MARKER: &str = "number";

/// Rows scanned for the header marker.
const HEADER_WINDOW: std::ops::RangeInclusive<u32> = 1..=20;

/// "Currently valid" glyph as the sheet encodes it; rendered replies
/// need the emoji-style variant to display reliably.
const HEAVY_CHECK_MARK: &str = "\u{2714}\u{FE0F}";
const WHITE_HEAVY_CHECK_MARK: &str = "\u{2705}";

/// Total number of combos, read from the summary cell.
pub async fn total_combos(sheet: &dyn SheetSource) -> Result<u32, LookupError> {
    sheet.load_cells(COUNT_CELL).await?;
    let count = sheet.cell(COUNT_CELL)?.value.as_number().unwrap_or(0.0);
    Ok(count as u32)
}

/// Locate the primary table's header row.
pub async fn header_row(sheet: &dyn SheetSource) -> Result<u32, LookupError> {
    find_header_row(sheet, cols::NUMBER, HEADER_MARKER, HEADER_WINDOW).await
}

/// Resolve combo ordinal `n` to its sheet row.
///
/// Out-of-range ordinals are a user error naming both the requested
/// ordinal and the available count.
pub async fn row_from_ordinal(sheet: &dyn SheetSource, n: u32) -> Result<u32, LookupError> {
    let total = total_combos(sheet).await?;
    if n == 0 || n > total {
        return Err(LookupError::OrdinalOutOfRange {
            ordinal: ordinal(n),
            available: total,
        });
    }
    let header = header_row(sheet).await?;
    debug!(n, row = header + n, "resolved combo by ordinal");
    Ok(header + n)
}

/// Resolve a tower pair to its sheet row by scanning every data row.
///
/// The comparison is case-insensitive and order-insensitive: the sheet
/// stores the pair in a fixed order, but users name the towers in
/// whichever order they think of them.
pub async fn row_from_towers(
    sheet: &dyn SheetSource,
    towers: (&str, &str),
) -> Result<u32, LookupError> {
    let start = header_row(sheet).await? + 1;
    let end = start + total_combos(sheet).await? - 1;

    sheet
        .load_cells(&range(cols::TOWER_1, start, cols::TOWER_2, end))
        .await?;

    for row in start..=end {
        let first = sheet.cell(&a1(cols::TOWER_1, row))?.value.display();
        let second = sheet.cell(&a1(cols::TOWER_2, row))?.value.display();
        if unordered_pair_eq(towers, (first.as_str(), second.as_str())) {
            debug!(row, "resolved combo by tower pair");
            return Ok(row);
        }
    }

    Err(LookupError::PairNotFound {
        pair: format!("{} + {}", towers.0, towers.1),
    })
}

/// Read one primary row into a display-ready record.
///
/// Post-processing matches what the reply needs: upgrade tags are folded
/// into the tower names, the date uses the sheet's formatted rendering,
/// the link becomes a markdown link, and the "current" glyph is swapped
/// for one that renders inside an embed.
pub async fn read_combo_row(sheet: &dyn SheetSource, row: u32) -> Result<Record, LookupError> {
    sheet
        .load_cells(&range(cols::NUMBER, row, cols::CURRENT, row))
        .await?;

    let mut record = Record::new();
    for (field, col) in [
        (Field::Number, cols::NUMBER),
        (Field::Tower1, cols::TOWER_1),
        (Field::Tower2, cols::TOWER_2),
        (Field::Upgrades, cols::UPGRADES),
        (Field::Map, cols::MAP),
        (Field::Version, cols::VERSION),
        (Field::Date, cols::DATE),
        (Field::Person, cols::PERSON),
        (Field::Link, cols::LINK),
        (Field::Current, cols::CURRENT),
    ] {
        record.insert(field, sheet.cell(&a1(col, row))?.value.display());
    }

    // Fold each upgrade tag into its tower's display value.
    if let Some(upgrades) = record.remove(Field::Upgrades) {
        let tags: Vec<&str> = upgrades.split('|').map(str::trim).collect();
        for (i, field) in [Field::Tower1, Field::Tower2].into_iter().enumerate() {
            if let (Some(tower), Some(tag)) = (record.get(field), tags.get(i)) {
                let display = format!("{} ({})", tower, tag);
                record.insert(field, display);
            }
        }
    }

    // The raw date value is a serial number; the formatted rendering is
    // the human-readable one.
    let date_cell = sheet.cell(&a1(cols::DATE, row))?;
    record.insert(Field::Date, date_cell.formatted_or_value());

    let link_cell = sheet.cell(&a1(cols::LINK, row))?;
    let link_text = link_cell.value.display();
    match link_cell.hyperlink {
        Some(url) => record.insert(Field::Link, format!("[{}]({})", link_text, url)),
        None => record.insert(Field::Link, link_text),
    }

    if record.get(Field::Current) == Some(HEAVY_CHECK_MARK) {
        record.insert(Field::Current, WHITE_HEAVY_CHECK_MARK);
    }

    Ok(record)
}
