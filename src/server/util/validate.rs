use crate::server::error::AppError;

/// Takes a required text field from a request body.
///
/// The value is trimmed before it is returned.
///
/// # Arguments
/// - `field` - Wire name of the field, used in the error message
/// - `value` - The submitted value, `None` when absent or null
///
/// # Returns
/// - `Ok(String)` - Trimmed, non-empty value
/// - `Err(AppError::BadRequest)` - Value was absent, null or blank
pub fn require_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

/// Takes a required non-text field from a request body.
///
/// # Returns
/// - `Ok(T)` - The submitted value
/// - `Err(AppError::BadRequest)` - Value was absent or null
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| missing(field))
}

fn missing(field: &str) -> AppError {
    AppError::BadRequest(format!("{} is required", field))
}
