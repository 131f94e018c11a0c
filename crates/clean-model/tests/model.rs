//! Tests for clean-model types.

use clean_model::{CleanError, CleanSummary};

#[test]
fn summary_serializes() {
    let summary = CleanSummary {
        renamed_columns: 4,
        complaint_cells_defaulted: 1,
        percent_signs_stripped: 3,
        cells_coerced_to_null: 1,
        cells_imputed: 1,
        duplicate_rows_removed: 1,
        columns_narrowed: 1,
        rows: 2,
        columns: 4,
    };
    let json = serde_json::to_string(&summary).expect("serialize summary");
    let round: CleanSummary = serde_json::from_str(&json).expect("deserialize summary");
    assert_eq!(round, summary);
}

#[test]
fn summary_noop_detection() {
    assert!(CleanSummary::default().is_noop());

    let changed = CleanSummary {
        duplicate_rows_removed: 2,
        ..CleanSummary::default()
    };
    assert!(!changed.is_noop());

    // Frame dimensions alone do not make a run a change
    let sized = CleanSummary {
        rows: 10,
        columns: 3,
        ..CleanSummary::default()
    };
    assert!(sized.is_noop());
}

#[test]
fn column_not_found_names_the_column() {
    let error = CleanError::ColumnNotFound("number_of_open_complaints".to_string());
    assert_eq!(
        error.to_string(),
        "column not found: number_of_open_complaints"
    );
}
