//! In-memory sheet for tests and the demo binary.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::cell::Cell;
use crate::error::SheetError;
use crate::traits::SheetSource;

/// A sheet held entirely in memory.
///
/// `load_cells` is a no-op (everything is always "loaded"); cells not
/// explicitly set read as blank, matching how a real sheet reports
/// unpopulated cells inside a loaded range.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    cells: HashMap<String, Cell>,
    row_count: u32,
}

/// Serde shape for JSON fixtures: a row count plus a map from A1
/// coordinate to cell.
#[derive(Deserialize)]
struct Fixture {
    row_count: u32,
    cells: HashMap<String, Cell>,
}

impl MemorySheet {
    pub fn new(row_count: u32) -> Self {
        MemorySheet {
            cells: HashMap::new(),
            row_count,
        }
    }

    /// Load a sheet from its JSON fixture form.
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        let fixture: Fixture =
            serde_json::from_str(json).map_err(|e| SheetError::BadFixture(e.to_string()))?;
        Ok(MemorySheet {
            cells: fixture.cells,
            row_count: fixture.row_count,
        })
    }

    pub fn set_text(&mut self, a1: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.cells.insert(a1.into(), Cell::text(value));
        self
    }

    pub fn set_number(&mut self, a1: impl Into<String>, value: f64) -> &mut Self {
        self.cells.insert(a1.into(), Cell::number(value));
        self
    }

    pub fn set_cell(&mut self, a1: impl Into<String>, cell: Cell) -> &mut Self {
        self.cells.insert(a1.into(), cell);
        self
    }
}

#[async_trait]
impl SheetSource for MemorySheet {
    async fn load_cells(&self, _range: &str) -> Result<(), SheetError> {
        Ok(())
    }

    fn cell(&self, a1: &str) -> Result<Cell, SheetError> {
        if !a1
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
            || !a1[1..].chars().all(|c| c.is_ascii_digit())
            || a1.len() < 2
        {
            return Err(SheetError::BadCoordinate { a1: a1.to_string() });
        }
        Ok(self.cells.get(a1).cloned().unwrap_or_else(Cell::blank))
    }

    fn row_count(&self) -> u32 {
        self.row_count
    }
}
