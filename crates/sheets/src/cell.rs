use serde::{Deserialize, Serialize};

/// The raw value of a cell.
///
/// Spreadsheet cells are weakly typed: a column that usually holds text
/// can hold a number (the summary count cell does), and blank cells are
/// meaningful (the override table uses one as its end-of-data sentinel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    #[default]
    Blank,
}

impl CellValue {
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Blank => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Blank => None,
        }
    }

    /// Default display form: text as-is, numbers without a trailing `.0`.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Blank => String::new(),
        }
    }
}

/// One cell as the resolution engine sees it: raw value, the sheet's
/// formatted rendering (dates come back human-readable through this),
/// and the hyperlink target when the cell carries one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Cell {
    #[serde(default)]
    pub value: CellValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Cell {
        Cell {
            value: CellValue::Text(value.into()),
            ..Cell::default()
        }
    }

    pub fn number(value: f64) -> Cell {
        Cell {
            value: CellValue::Number(value),
            ..Cell::default()
        }
    }

    pub fn blank() -> Cell {
        Cell::default()
    }

    /// The formatted rendering when present, else the raw display form.
    pub fn formatted_or_value(&self) -> String {
        self.formatted.clone().unwrap_or_else(|| self.value.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_covers_empty_text() {
        assert!(CellValue::Blank.is_blank());
        assert!(CellValue::Text(String::new()).is_blank());
        assert!(!CellValue::Text("x".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn numbers_display_without_trailing_zero() {
        assert_eq!(CellValue::Number(50.0).display(), "50");
        assert_eq!(CellValue::Number(2.5).display(), "2.5");
    }

    #[test]
    fn text_cells_coerce_to_numbers_when_numeric() {
        assert_eq!(CellValue::Text("44".to_string()).as_number(), Some(44.0));
        assert_eq!(CellValue::Text("obyn".to_string()).as_number(), None);
    }

    #[test]
    fn cell_value_deserializes_untagged() {
        let cell: Cell = serde_json::from_str(r#"{"value": "Obyn"}"#).unwrap();
        assert_eq!(cell.value, CellValue::Text("Obyn".to_string()));
        let cell: Cell = serde_json::from_str(r#"{"value": 50}"#).unwrap();
        assert_eq!(cell.value, CellValue::Number(50.0));
        let cell: Cell = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(cell.value, CellValue::Blank);
    }
}
