//! A1-notation helpers.
//!
//! Table layouts in this system use fixed single-letter columns and
//! computed 1-based rows, so the full generality of A1 notation (multi-
//! letter columns, absolute references) is not needed.

/// Build an A1 coordinate from a column letter and a 1-based row.
pub fn a1(col: char, row: u32) -> String {
    format!("{}{}", col, row)
}

/// Build an A1 range expression, e.g. `B1:B20`.
pub fn range(start_col: char, start_row: u32, end_col: char, end_row: u32) -> String {
    format!("{}{}:{}{}", start_col, start_row, end_col, end_row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_coordinates_and_ranges() {
        assert_eq!(a1('B', 12), "B12");
        assert_eq!(range('B', 1, 'P', 20), "B1:P20");
    }
}
