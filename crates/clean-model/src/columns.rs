//! Column names the default cleaning pipeline operates on.
//!
//! Names are given in their standardized form (lowercase, underscores),
//! i.e. as they appear after column-name standardization has run.

/// Open complaint count, recorded in source files as a slash-delimited
/// code such as `"1/5/00"`. The only column the pipeline requires.
pub const OPEN_COMPLAINTS: &str = "number_of_open_complaints";

/// Monthly auto premium, recorded with a trailing percent sign.
pub const MONTHLY_PREMIUM_AUTO: &str = "monthly_premium_auto";

/// Customer lifetime value.
pub const CUSTOMER_LIFETIME_VALUE: &str = "customer_lifetime_value";

/// Customer yearly income.
pub const INCOME: &str = "income";
