//! Small helpers for the string fields that arrive from clients.

use crate::error::DomainError;

/// Returns the trimmed value, or `None` when it is absent or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Require a non-blank value, naming the field in the error.
pub fn required<'a>(value: Option<&'a str>, label: &str) -> Result<&'a str, DomainError> {
    non_blank(value).ok_or_else(|| DomainError::Validation(format!("{label} is required")))
}

/// Split a comma-separated list, trimming each token and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append every addition not already present, keeping existing order.
pub fn union_into(target: &mut Vec<String>, additions: &[String]) {
    for item in additions {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}
