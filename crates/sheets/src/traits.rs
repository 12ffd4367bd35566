use async_trait::async_trait;

use crate::cell::Cell;
use crate::error::SheetError;

/// The capability the resolution engine needs from a spreadsheet.
///
/// Mirrors the shape of the real sheet API: ranges are loaded
/// asynchronously, after which individual cells in the loaded range can
/// be read synchronously. One command invocation issues its loads
/// strictly in sequence, because later coordinates depend on values
/// learned from earlier reads (header offset before row arithmetic).
///
/// The sheet is shared and read-mostly; implementations do no locking.
/// Correctness over one invocation's multi-step read sequence relies on
/// the table being externally stable while it runs.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Load a cell range (A1 notation, e.g. `B1:P20`) for reading.
    async fn load_cells(&self, range: &str) -> Result<(), SheetError>;

    /// Read one cell by A1 coordinate. Unpopulated cells read as blank.
    fn cell(&self, a1: &str) -> Result<Cell, SheetError>;

    /// Total number of rows the sheet reports (loaded or not).
    fn row_count(&self) -> u32;
}
