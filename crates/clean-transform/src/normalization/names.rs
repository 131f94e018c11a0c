//! Column-name standardization.

/// Standardizes a column name: lowercased, trimmed, with remaining
/// spaces replaced by underscores.
///
/// # Examples
///
/// ```
/// use clean_transform::normalization::standardize_name;
///
/// assert_eq!(
///     standardize_name(" Customer Lifetime Value "),
///     "customer_lifetime_value"
/// );
/// assert_eq!(standardize_name("income"), "income");
/// ```
pub fn standardize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}
