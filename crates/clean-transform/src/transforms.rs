//! Standalone cleaning operations over customer-record tables.
//!
//! Every operation mutates the frame in place and returns how many
//! cells or rows it changed. Operations that target a column by name
//! are no-ops when the column is absent, with one exception:
//! [`clean_open_complaints`] requires its target column and fails
//! without it.

use std::collections::HashSet;

use polars::prelude::{DataFrame, DataType};
use tracing::{debug, warn};

use clean_model::{CleanError, Result};

use crate::data_utils::{
    filter_rows, has_column, numeric_column_f64, optional_string_column, set_f64_column,
    set_i64_column, set_optional_string_column, string_column,
};
use crate::normalization::{leading_digits, parse_f64, parse_i64, standardize_name};

/// Lowercases, trims, and underscore-joins every column name.
///
/// Returns the number of names that changed. Two names standardizing to
/// the same result surface as a duplicate-column error.
pub fn standardize_column_names(df: &mut DataFrame) -> Result<usize> {
    let current: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let standardized: Vec<String> = current.iter().map(|name| standardize_name(name)).collect();
    let renamed = current
        .iter()
        .zip(&standardized)
        .filter(|(before, after)| before != after)
        .count();
    if renamed > 0 {
        df.set_column_names(standardized.iter().map(String::as_str))?;
        debug!(renamed, "column names standardized");
    }
    Ok(renamed)
}

/// Rewrites the open-complaints column as an integer count.
///
/// Each cell is rendered as text and the run of digits at the start is
/// kept; the source encodes counts as slash-delimited codes such as
/// `"1/5/00"`. Cells that do not start with a digit are repaired to 0,
/// never to the missing marker.
///
/// Unlike the other column operations, the target column must exist.
///
/// Returns the number of cells that fell back to the 0 default.
pub fn clean_open_complaints(df: &mut DataFrame, column: &str) -> Result<usize> {
    if !has_column(df, column) {
        return Err(CleanError::ColumnNotFound(column.to_string()));
    }
    let values = string_column(df, column)?;
    let mut counts = Vec::with_capacity(values.len());
    let mut defaulted = 0usize;
    for value in &values {
        match leading_digits(value).and_then(parse_i64) {
            Some(count) => counts.push(Some(count)),
            None => {
                counts.push(Some(0));
                defaulted += 1;
            }
        }
    }
    set_i64_column(df, column, counts)?;
    if defaulted > 0 {
        debug!(
            column,
            defaulted, "open-complaint cells without a leading count defaulted to 0"
        );
    }
    Ok(defaulted)
}

/// Removes every literal `%` from the cells of `column`.
///
/// The column is rendered as text; null cells stay null and no other
/// characters are altered. No numeric conversion follows. Absent column
/// is a no-op.
///
/// Returns the number of cells that contained a percent sign.
pub fn replace_percent_sign(df: &mut DataFrame, column: &str) -> Result<usize> {
    if !has_column(df, column) {
        return Ok(0);
    }
    let mut stripped = 0usize;
    let values: Vec<Option<String>> = optional_string_column(df, column)?
        .into_iter()
        .map(|value| {
            value.map(|text| {
                if text.contains('%') {
                    stripped += 1;
                    text.replace('%', "")
                } else {
                    text
                }
            })
        })
        .collect();
    set_optional_string_column(df, column, values)?;
    if stripped > 0 {
        debug!(column, stripped, "percent signs removed");
    }
    Ok(stripped)
}

/// Converts every cell of `column` to a float, nulling what cannot parse.
///
/// Absent column is a no-op; a parse failure is repaired to the missing
/// marker, never an error.
///
/// Returns the number of previously non-null cells that became null.
pub fn convert_column_to_numeric(df: &mut DataFrame, column: &str) -> Result<usize> {
    if !has_column(df, column) {
        return Ok(0);
    }
    let nulls_before = df.column(column)?.null_count();
    let numeric = numeric_column_f64(df, column)?;
    let parsed = numeric.iter().filter(|value| value.is_some()).count();
    let coerced = df.height() - nulls_before - parsed;
    set_f64_column(df, column, numeric)?;
    if coerced > 0 {
        debug!(column, coerced, "cells without a numeric reading nulled");
    }
    Ok(coerced)
}

/// Replaces slash-delimited date codes with their middle segment as a
/// number: `"1/5/00"` becomes `5.0`.
///
/// Cells with fewer than two segments, or whose middle segment does not
/// parse, become null. Absent column is a no-op.
///
/// Returns the number of cells that yielded a number.
pub fn extract_middle_from_date_string(df: &mut DataFrame, column: &str) -> Result<usize> {
    if !has_column(df, column) {
        return Ok(0);
    }
    let mut extracted = 0usize;
    let numbers: Vec<Option<f64>> = optional_string_column(df, column)?
        .into_iter()
        .map(|value| {
            let text = value?;
            let number = parse_f64(text.split('/').nth(1)?)?;
            extracted += 1;
            Some(number)
        })
        .collect();
    set_f64_column(df, column, numbers)?;
    if extracted > 0 {
        debug!(column, extracted, "middle date segments extracted");
    }
    Ok(extracted)
}

/// Fills missing cells of `column` with the median of its numeric values.
///
/// Unparseable cells count as missing, matching the coercion rules of
/// the rest of the pipeline. An even-length value set takes the mean of
/// the two middle values. A column with nothing missing is left
/// untouched; a column with no numeric values has no median and is left
/// as-is.
///
/// Absent column is a no-op. Returns the number of cells filled.
pub fn fill_null_with_median(df: &mut DataFrame, column: &str) -> Result<usize> {
    if !has_column(df, column) {
        return Ok(0);
    }
    let values = numeric_column_f64(df, column)?;
    let missing = values.iter().filter(|value| value.is_none()).count();
    if missing == 0 {
        return Ok(0);
    }
    let present: Vec<f64> = values.iter().filter_map(|value| *value).collect();
    if present.is_empty() {
        warn!(column, "median undefined for all-missing column, fill skipped");
        return Ok(0);
    }
    let median = median_of(present);
    let filled: Vec<Option<f64>> = values
        .into_iter()
        .map(|value| value.or(Some(median)))
        .collect();
    set_f64_column(df, column, filled)?;
    debug!(
        column,
        filled = missing,
        median,
        "missing cells filled with column median"
    );
    Ok(missing)
}

fn median_of(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

/// Drops rows that duplicate an earlier row across all columns.
///
/// The first occurrence of each duplicate group is kept and surviving
/// rows stay in their original relative order; mask filtering leaves
/// row positions contiguous from 0.
///
/// Returns the number of rows removed.
pub fn drop_duplicates_and_reset_index(df: &mut DataFrame) -> Result<usize> {
    if df.height() == 0 {
        return Ok(0);
    }
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut column_values = Vec::with_capacity(names.len());
    for name in &names {
        column_values.push(string_column(df, name)?);
    }
    let mut seen: HashSet<String> = HashSet::new();
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut key = String::new();
        for values in &column_values {
            key.push_str(&values[idx]);
            key.push('|');
        }
        keep.push(seen.insert(key));
    }
    let removed = keep.iter().filter(|flag| !**flag).count();
    if removed > 0 {
        warn!(removed, "duplicate rows dropped");
        filter_rows(df, &keep)?;
    }
    Ok(removed)
}

/// Narrows float columns that contain no nulls to 64-bit integer storage.
///
/// The cast truncates the stored representation; values are expected to
/// already be whole numbers, so no rounding is applied. Columns with any
/// null cells keep their float type.
///
/// Returns the number of columns narrowed.
pub fn convert_floats_to_ints(df: &mut DataFrame) -> Result<usize> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut narrowed = 0usize;
    for name in &names {
        let cast = {
            let column = df.column(name)?;
            if !column.dtype().is_float() || column.null_count() > 0 {
                continue;
            }
            column.cast(&DataType::Int64)?
        };
        df.with_column(cast)?;
        narrowed += 1;
    }
    if narrowed > 0 {
        debug!(narrowed, "float columns narrowed to integer storage");
    }
    Ok(narrowed)
}
