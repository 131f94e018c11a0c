//! Pure value-level helpers used by the cleaning transforms.
//!
//! - **names**: column-name standardization
//! - **numeric**: numeric parsing and leading-digit extraction

pub mod names;
pub mod numeric;

// Re-export commonly used items
pub use names::standardize_name;
pub use numeric::{leading_digits, parse_f64, parse_i64};
