//! Header row discovery.
//!
//! The primary table's header may legitimately shift when rows are
//! inserted above it, so its row is discovered at lookup time rather
//! than hardcoded. All primary row arithmetic is relative to the row
//! found here.

use std::ops::RangeInclusive;

use combo_sheets::{a1, range, SheetSource};
use tracing::debug;

use crate::error::LookupError;

/// Scan `window` rows of one column for a cell whose text contains
/// `marker` (case-insensitive). Returns the first matching row.
///
/// A miss is the structural [`LookupError::HeaderNotFound`]: the sheet's
/// layout changed incompatibly, which is an operator problem, not a
/// user one.
pub async fn find_header_row(
    sheet: &dyn SheetSource,
    column: char,
    marker: &str,
    window: RangeInclusive<u32>,
) -> Result<u32, LookupError> {
    let (min, max) = (*window.start(), *window.end());
    sheet.load_cells(&range(column, min, column, max)).await?;

    let needle = marker.to_lowercase();
    for row in window {
        let cell = sheet.cell(&a1(column, row))?;
        if let Some(text) = cell.value.as_text() {
            if text.to_lowercase().contains(&needle) {
                debug!(row, column = %column, "found table header");
                return Ok(row);
            }
        }
    }

    Err(LookupError::HeaderNotFound {
        column,
        marker: marker.to_string(),
    })
}
