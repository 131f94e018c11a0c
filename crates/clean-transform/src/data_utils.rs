//! DataFrame value extraction and replacement helpers.
//!
//! Internal utilities for reading whole columns out of a DataFrame and
//! writing transformed columns back. Cell values are exchanged as plain
//! Rust values; the Polars null is the missing marker throughout.

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};

use clean_model::Result;

use crate::normalization::numeric::parse_f64;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "true" } else { "false" }.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing
/// fractional zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts an AnyValue to f64, returning None for null, non-numeric,
/// or NaN values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) if !v.is_nan() => Some(f64::from(v)),
        AnyValue::Float64(v) if !v.is_nan() => Some(v),
        AnyValue::String(s) => parse_f64(s).filter(|v| !v.is_nan()),
        AnyValue::StringOwned(s) => parse_f64(&s).filter(|v| !v.is_nan()),
        _ => None,
    }
}

/// Returns true when the frame has a column with the given name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Extract all values of a column as strings; null cells render empty.
pub fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(series.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Extract all values of a column as strings, keeping nulls as None.
pub fn optional_string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        if matches!(value, AnyValue::Null) {
            values.push(None);
        } else {
            values.push(Some(any_to_string(value)));
        }
    }
    Ok(values)
}

/// Extract all values of a column as f64, with None for anything that
/// has no numeric reading.
pub fn numeric_column_f64(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_f64(value));
    }
    Ok(values)
}

pub fn set_optional_string_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

pub fn set_f64_column(df: &mut DataFrame, name: &str, values: Vec<Option<f64>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

pub fn set_i64_column(df: &mut DataFrame, name: &str, values: Vec<Option<i64>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Keep only the rows flagged true; surviving rows stay in order.
pub fn filter_rows(df: &mut DataFrame, keep: &[bool]) -> Result<()> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    *df = df.filter(&mask)?;
    Ok(())
}
