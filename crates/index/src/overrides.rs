//! Override-table matching.
//!
//! The override table is sparse: each combo that has alternate-map
//! completions gets a run of rows, with the combo number populated only
//! on the first row of the run and inherited by the blank-number rows
//! below it. Rows are number-ascending, and the first blank MAP cell
//! marks the end of the populated data.

use combo_sheets::{a1, range, SheetSource};
use tracing::debug;

use crate::error::LookupError;
use crate::record::{Field, Record};
use crate::text::leading_number;

/// Column letters of the override table.
pub(crate) mod cols {
    pub const NUMBER: char = 'R';
    pub const MAP: char = 'S';
    pub const PERSON: char = 'U';
    pub const LINK: char = 'W';
}

/// First data row of the override table (fixed, unlike the primary
/// table's discovered header).
const START_ROW: u32 = 12;

/// Find the override record for combo `n` on `map` (canonical form).
///
/// Returns the delta fields only: MAP, PERSON, LINK. The caller merges
/// them over the primary record. "No override on this map" is a user
/// error; reaching end-of-data without ever seeing `n` is structural,
/// because primary resolution has already proven the combo exists.
pub async fn find_override(
    sheet: &dyn SheetSource,
    n: u32,
    map: &str,
) -> Result<Record, LookupError> {
    let end_row = sheet.row_count();
    sheet
        .load_cells(&range(cols::NUMBER, START_ROW, cols::MAP, end_row))
        .await?;

    let no_alt = || LookupError::NoAltOnMap {
        number: n,
        map: map.to_string(),
    };

    // Active combo number, inherited by blank-number rows.
    let mut active: Option<u32> = None;
    let mut seen = false;

    for row in START_ROW..=end_row {
        let map_cell = sheet.cell(&a1(cols::MAP, row))?;
        if map_cell.value.is_blank() {
            // End of populated data.
            return if seen {
                Err(no_alt())
            } else {
                Err(LookupError::IndexNeverSeen { number: n })
            };
        }

        let number_cell = sheet.cell(&a1(cols::NUMBER, row))?;
        if !number_cell.value.is_blank() {
            active = leading_number(&number_cell.value.display());
            if active == Some(n) {
                seen = true;
            }
            // Rows are number-ascending: passing n without a map match
            // means there is no override for this map.
            if active.is_some_and(|a| a > n) {
                return Err(no_alt());
            }
        }

        if active == Some(n) && map_cell.value.display() == map {
            debug!(row, n, map, "found override row");
            sheet
                .load_cells(&range(cols::MAP, row, cols::LINK, row))
                .await?;

            let mut record = Record::new();
            record.insert(Field::Map, map);
            record.insert(
                Field::Person,
                sheet.cell(&a1(cols::PERSON, row))?.value.display(),
            );
            let link_cell = sheet.cell(&a1(cols::LINK, row))?;
            let link_text = link_cell.value.display();
            match link_cell.hyperlink {
                Some(url) => record.insert(Field::Link, format!("[{}]({})", link_text, url)),
                None => record.insert(Field::Link, link_text),
            }
            return Ok(record);
        }
    }

    if seen {
        Err(no_alt())
    } else {
        Err(LookupError::IndexNeverSeen { number: n })
    }
}
