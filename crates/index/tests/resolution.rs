//! End-to-end resolution against a realistic sheet fixture: header row
//! discovered at row 3, 50 combos reported, override runs for a few of
//! them.

use combo_index::{merge, overrides, primary, prune_for_display, Field, QueryShape};
use combo_sheets::{Cell, CellValue, MemorySheet};

fn fixture() -> MemorySheet {
    let mut sheet = MemorySheet::new(120);

    // Primary table: header at row 3, data rows 4..=53.
    sheet.set_text("B3", "Number");
    sheet.set_number("J6", 50.0);

    // Row 47 = combo #44.
    sheet.set_text("B47", "44");
    sheet.set_text("C47", "Obyn");
    sheet.set_text("E47", "Druid of the Jungle");
    sheet.set_text("G47", "n/a | 0-1-4");
    sheet.set_text("I47", "Town Center");
    sheet.set_text("K47", "21.3");
    sheet.set_cell(
        "L47",
        Cell {
            value: CellValue::Number(44203.0),
            formatted: Some("1/12/2021".to_string()),
            hyperlink: None,
        },
    );
    sheet.set_text("M47", "indexer44");
    sheet.set_cell(
        "O47",
        Cell {
            value: CellValue::Text("Vid".to_string()),
            formatted: None,
            hyperlink: Some("https://example.com/44".to_string()),
        },
    );
    sheet.set_text("P47", "\u{2714}\u{FE0F}");

    // Row 6 = combo #3, the pair used for the qualified lookup below.
    sheet.set_text("B6", "3*");
    sheet.set_text("C6", "Obyn");
    sheet.set_text("E6", "Dark Champion");
    sheet.set_text("G6", "n/a | 2-0-5");
    sheet.set_text("I6", "Monkey Meadow");
    sheet.set_text("K6", "14.2");
    sheet.set_text("L6", "3/3/2020");
    sheet.set_text("M6", "og_player");
    sheet.set_text("O6", "Run");
    sheet.set_text("P6", "\u{2705}");

    // Override table: run for combo #3 starting at row 12.
    sheet.set_text("R12", "3*");
    sheet.set_text("S12", "Cube");
    sheet.set_text("U12", "alt_player");
    sheet.set_cell(
        "W12",
        Cell {
            value: CellValue::Text("Alt Run".to_string()),
            formatted: None,
            hyperlink: Some("https://example.com/alt3".to_string()),
        },
    );
    sheet.set_text("S13", "Logs");
    sheet.set_text("U13", "alt_player2");
    sheet.set_text("W13", "Alt Run 2");

    sheet
}

#[tokio::test]
async fn ordinal_44_resolves_header_relative() {
    let sheet = fixture();
    let row = primary::row_from_ordinal(&sheet, 44).await.unwrap();
    assert_eq!(row, 47);

    let mut record = primary::read_combo_row(&sheet, row).await.unwrap();
    prune_for_display(&mut record, QueryShape::Ordinal, false);

    assert!(!record.contains(Field::Number));
    assert_eq!(record.get(Field::Tower1), Some("Obyn (n/a)"));
    assert_eq!(record.get(Field::Tower2), Some("Druid of the Jungle (0-1-4)"));
    assert_eq!(record.get(Field::Map), Some("Town Center"));
    assert_eq!(record.get(Field::Date), Some("1/12/2021"));
    assert_eq!(record.get(Field::Link), Some("[Vid](https://example.com/44)"));
    assert_eq!(record.get(Field::Current), Some("\u{2705}"));
}

#[tokio::test]
async fn ordinal_51_cites_requested_and_available() {
    let sheet = fixture();
    let err = primary::row_from_ordinal(&sheet, 51).await.unwrap_err();
    assert!(err.is_user_error());
    let msg = err.to_string();
    assert!(msg.contains("51st") && msg.contains("50"), "got: {msg}");
}

#[tokio::test]
async fn qualified_pair_lookup_merges_override() {
    let sheet = fixture();

    // Unordered pair match against row 6.
    let row = primary::row_from_towers(&sheet, ("dark champion", "OBYN"))
        .await
        .unwrap();
    assert_eq!(row, 6);

    let primary_record = primary::read_combo_row(&sheet, row).await.unwrap();
    assert_ne!(primary_record.get(Field::Map), Some("Cube"));

    let n = combo_index::text::leading_number(primary_record.get(Field::Number).unwrap()).unwrap();
    assert_eq!(n, 3);

    let override_record = overrides::find_override(&sheet, n, "Cube").await.unwrap();
    let mut merged = merge(primary_record, Some(override_record));

    assert_eq!(merged.get(Field::Person), Some("alt_player"));
    assert_eq!(
        merged.get(Field::Link),
        Some("[Alt Run](https://example.com/alt3)")
    );
    assert_eq!(merged.get(Field::Map), Some("Cube"));

    prune_for_display(&mut merged, QueryShape::Towers, true);
    assert_eq!(merged.get(Field::Number), Some("3"));
    assert!(!merged.contains(Field::Tower1));
    assert!(!merged.contains(Field::Map));
    assert!(!merged.contains(Field::Version));
}

#[tokio::test]
async fn override_run_inheritance_reaches_later_rows() {
    let sheet = fixture();
    let record = overrides::find_override(&sheet, 3, "Logs").await.unwrap();
    assert_eq!(record.get(Field::Person), Some("alt_player2"));
    assert_eq!(record.get(Field::Link), Some("Alt Run 2"));
}

#[tokio::test]
async fn header_marker_missing_is_fatal() {
    let mut sheet = fixture();
    // Clobber the marker: simulate an incompatible layout change.
    sheet.set_text("B3", "Nummer");
    let err = primary::row_from_ordinal(&sheet, 1).await.unwrap_err();
    assert!(!err.is_user_error());
}

#[tokio::test]
async fn shifted_header_keeps_ordinal_resolution() {
    // Shifting the whole primary table down two rows must not break
    // ordinal resolution, because arithmetic follows the marker.
    let mut sheet = MemorySheet::new(60);
    sheet.set_text("B5", "Number");
    sheet.set_number("J6", 2.0);
    sheet.set_text("B7", "2");
    sheet.set_text("C7", "Quincy");
    sheet.set_text("E7", "Spiked Mines");
    sheet.set_text("G7", "n/a | 4-2-0");
    assert_eq!(primary::row_from_ordinal(&sheet, 2).await.unwrap(), 7);
}
