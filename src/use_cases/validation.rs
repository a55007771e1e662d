//! Field constraints checked before any statement reaches the store.
//!
//! Lengths are counted in characters, not bytes. Columns without an explicit
//! rule are still bounded by the width they are stored with.

use crate::UseCaseError;

pub const MIN_TAG_LEN: usize = 2;
pub const MAX_TAG_LEN: usize = 100;

pub const MAX_DB_COLUMN_LEN: usize = 100;
pub const MAX_DISPLAY_NAME_LEN: usize = 200;

/// `dynamic_param_source`, `api_endpoint`, `api_name`
pub const MAX_SHORT_TEXT_LEN: usize = 255;

/// `field_type`, `value_type`
pub const MAX_TYPE_NAME_LEN: usize = 50;

/// Validate that `value` has between `min_len` and `max_len` characters.
pub fn validate_text_len(
    value: &str,
    field: &str,
    min_len: usize,
    max_len: usize,
) -> Result<(), UseCaseError> {
    let len = value.chars().count();
    if len < min_len {
        return Err(UseCaseError::ValidationFailed(match min_len {
            1 => format!("{field} must not be empty"),
            _ => format!("{field} is too short ({len} chars, min {min_len})"),
        }));
    }
    if len > max_len {
        return Err(UseCaseError::ValidationFailed(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Same as [`validate_text_len`] for a field that may be absent.
pub fn validate_optional_text_len(
    value: &Option<String>,
    field: &str,
    min_len: usize,
    max_len: usize,
) -> Result<(), UseCaseError> {
    match value {
        Some(value) => validate_text_len(value, field, min_len, max_len),
        None => Ok(()),
    }
}

pub fn validate_tag_name(value: &str) -> Result<(), UseCaseError> {
    validate_text_len(value, "tag", MIN_TAG_LEN, MAX_TAG_LEN)
}
