// Helper functions shared across modules

use serde::Serializer;

/// Turns a form field id into the name shown in validation messages.
///
/// Reduction variable inputs are posted with a `var-standard-` or
/// `var-advanced-` prefix; the remainder is the variable name with
/// `-`/`_` separators.
///
/// # Example
/// ```
/// let name = variable_display_name("var-standard-sum_runs");
/// // Returns: "sum runs"
/// ```
pub fn variable_display_name(field_id: &str) -> String {
    let name = field_id
        .strip_prefix("var-standard-")
        .or_else(|| field_id.strip_prefix("var-advanced-"))
        .unwrap_or(field_id);
    name.replace(['-', '_'], " ")
}

/// Serializes an SQLite integer flag as a JSON boolean
pub fn serialize_flag_to_bool<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_bool(*value != 0)
}
