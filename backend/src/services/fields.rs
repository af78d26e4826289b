//! Presence checks shared by the create handlers.

use crate::error::{ApiError, ApiResult};

/// Trims `value` and fails if nothing is left.
pub fn require_text(field: &str, value: Option<String>) -> ApiResult<String> {
    optional_text(value).ok_or_else(|| ApiError::required(field))
}

/// Trims `value`, turning blank strings into `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn require_id(field: &str, value: Option<i64>) -> ApiResult<i64> {
    value.ok_or_else(|| ApiError::Validation(format!("{field} is required (int)")))
}

/// Resolves a `?limit=` value: absent means `default`, negative is rejected
/// and anything beyond `u32::MAX` is capped.
pub fn limit_or(raw: Option<i64>, default: u32) -> ApiResult<u32> {
    match raw {
        None => Ok(default),
        Some(n) if n < 0 => Err(ApiError::Validation(format!(
            "limit must not be negative, got {n}"
        ))),
        Some(n) => Ok(u32::try_from(n).unwrap_or(u32::MAX)),
    }
}
