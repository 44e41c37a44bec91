use crate::{FieldError, FormField};

/// Check a value against a field's rules.
///
/// Pure: the same field and value always give the same answer. An empty
/// value is only ever a `Required` failure (or nothing for optional fields);
/// format rules run on non-empty values. Values are not trimmed.
pub fn validate(field: &FormField, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return field.required.then(|| FieldError::required(&field.label));
    }
    match &field.rule {
        Some(rule) if !rule.accepts(value) => Some(FieldError::invalid_format(rule.message())),
        _ => None,
    }
}
