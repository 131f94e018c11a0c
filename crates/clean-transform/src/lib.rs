//! Customer-record cleaning transforms.
//!
//! This crate provides the column-level cleaning steps for customer
//! record tables:
//!
//! - **data_utils**: DataFrame value extraction and replacement helpers
//! - **normalization**: pure value-level helpers (names, numerics)
//! - **transforms**: standalone cleaning operations over a DataFrame
//! - **pipeline**: the fixed-order `clean_data` composition

pub mod data_utils;
pub mod normalization;
pub mod pipeline;
pub mod transforms;

// Re-export the public operations for external use
pub use pipeline::clean_data;
pub use transforms::{
    clean_open_complaints, convert_column_to_numeric, convert_floats_to_ints,
    drop_duplicates_and_reset_index, extract_middle_from_date_string, fill_null_with_median,
    replace_percent_sign, standardize_column_names,
};
