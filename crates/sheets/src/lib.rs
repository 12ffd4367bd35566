//! combo-sheets: the tabular-source capability for comboindex.
//!
//! The index data lives in an externally owned spreadsheet. This crate
//! defines the narrow interface the resolution engine needs from it
//! ([`SheetSource`]), the cell types that cross that interface, A1
//! coordinate helpers, and [`MemorySheet`], an in-memory implementation
//! used by tests and the demo binary.

mod a1;
mod cell;
mod error;
mod memory;
mod traits;

pub use a1::{a1, range};
pub use cell::{Cell, CellValue};
pub use error::SheetError;
pub use memory::MemorySheet;
pub use traits::SheetSource;
