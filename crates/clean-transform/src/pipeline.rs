//! The fixed-order cleaning pipeline.

use polars::prelude::DataFrame;
use tracing::debug;

use clean_model::{CleanSummary, Result, columns};

use crate::transforms::{
    clean_open_complaints, convert_column_to_numeric, convert_floats_to_ints,
    drop_duplicates_and_reset_index, fill_null_with_median, replace_percent_sign,
    standardize_column_names,
};

/// Runs the full cleaning pipeline over a customer-record frame.
///
/// Steps, in order: standardize column names, rewrite the
/// open-complaints column as integers, strip percent signs from the
/// monthly premium, coerce customer lifetime value to numbers, fill
/// missing income with the median, drop duplicate rows, and narrow
/// null-free float columns to integer storage.
///
/// Steps run strictly in sequence over the one frame; each step is a
/// no-op on data already in its target state, so re-running the
/// pipeline on a cleaned frame reports [`CleanSummary::is_noop`].
///
/// # Errors
///
/// Fails when `number_of_open_complaints` is absent after name
/// standardization, or when an underlying frame operation fails. On
/// error the frame may be partially cleaned and no summary is produced.
pub fn clean_data(df: &mut DataFrame) -> Result<CleanSummary> {
    let renamed_columns = standardize_column_names(df)?;
    let complaint_cells_defaulted = clean_open_complaints(df, columns::OPEN_COMPLAINTS)?;

    let percent_signs_stripped = replace_percent_sign(df, columns::MONTHLY_PREMIUM_AUTO)?;
    let cells_coerced_to_null = convert_column_to_numeric(df, columns::CUSTOMER_LIFETIME_VALUE)?;
    let cells_imputed = fill_null_with_median(df, columns::INCOME)?;

    let duplicate_rows_removed = drop_duplicates_and_reset_index(df)?;
    let columns_narrowed = convert_floats_to_ints(df)?;

    let summary = CleanSummary {
        renamed_columns,
        complaint_cells_defaulted,
        percent_signs_stripped,
        cells_coerced_to_null,
        cells_imputed,
        duplicate_rows_removed,
        columns_narrowed,
        rows: df.height(),
        columns: df.width(),
    };
    debug!(
        rows = summary.rows,
        columns = summary.columns,
        "cleaning pipeline finished"
    );
    Ok(summary)
}
