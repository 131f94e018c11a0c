use serde::{Deserialize, Serialize};

/// Change counts reported by a full cleaning run.
///
/// Each field is the count returned by the corresponding pipeline step;
/// `rows` and `columns` describe the cleaned frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSummary {
    /// Column names rewritten by standardization.
    pub renamed_columns: usize,
    /// Open-complaint cells without a leading count, repaired to 0.
    pub complaint_cells_defaulted: usize,
    /// Cells that had at least one percent sign removed.
    pub percent_signs_stripped: usize,
    /// Non-missing cells that became missing during numeric coercion.
    pub cells_coerced_to_null: usize,
    /// Missing cells filled with the column median.
    pub cells_imputed: usize,
    /// Duplicate rows removed.
    pub duplicate_rows_removed: usize,
    /// Float columns narrowed to integer storage.
    pub columns_narrowed: usize,
    /// Rows in the cleaned frame.
    pub rows: usize,
    /// Columns in the cleaned frame.
    pub columns: usize,
}

impl CleanSummary {
    /// Returns true when the run changed no names, cells, or rows.
    ///
    /// A clean frame re-run through the pipeline reports a no-op.
    pub fn is_noop(&self) -> bool {
        self.renamed_columns == 0
            && self.complaint_cells_defaulted == 0
            && self.percent_signs_stripped == 0
            && self.cells_coerced_to_null == 0
            && self.cells_imputed == 0
            && self.duplicate_rows_removed == 0
            && self.columns_narrowed == 0
    }
}
