//! Runtime form state: current values, touched flags, per-field errors, focus
//! and whether a submission was attempted.
//!
//! Fields are stored in schema order, so indices here line up with
//! `FormSchema::fields()`. The aggregate error message is not stored; it is
//! derived from the field errors every time it is asked for.
//!
//! Field lifecycle:
//!
//! ```text
//! Pristine --blur--> Valid | Invalid
//! Pristine --submit--> Valid | Invalid
//! Invalid --input (touched)--> Valid
//! ```
//!
//! Touching and validating happen in the same step, so a touched field is
//! always either valid or invalid when observed.

use serde::Serialize;
use strum::Display;

use crate::{validate, FieldError, FormField, FormSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum FieldStatus {
    Pristine,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub error: Option<FieldError>,
}

impl FieldState {
    pub fn status(&self) -> FieldStatus {
        match (self.touched, &self.error) {
            (false, None) => FieldStatus::Pristine,
            (_, Some(_)) => FieldStatus::Invalid,
            (true, None) => FieldStatus::Valid,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Re-run the field's rules against the current value.
    pub(crate) fn revalidate(&mut self, field: &FormField) {
        self.error = validate(field, &self.value);
    }

    /// Mark as touched and validate.
    pub(crate) fn touch(&mut self, field: &FormField) {
        self.touched = true;
        self.revalidate(field);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FieldState>,
    focused: Option<usize>,
    submission_attempted: bool,
}

impl FormState {
    /// Empty, untouched state for every field of `schema`.
    pub fn for_schema(schema: &FormSchema) -> Self {
        Self {
            fields: vec![FieldState::default(); schema.field_count()],
            focused: None,
            submission_attempted: false,
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldState> {
        self.fields.get(index)
    }

    pub(crate) fn field_mut(&mut self, index: usize) -> Option<&mut FieldState> {
        self.fields.get_mut(index)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, index: Option<usize>) {
        self.focused = index;
    }

    pub fn submission_attempted(&self) -> bool {
        self.submission_attempted
    }

    pub(crate) fn mark_submission_attempted(&mut self) {
        self.submission_attempted = true;
    }

    pub fn invalid_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_invalid()).count()
    }

    /// Summary shown after a submission attempt while any field is invalid.
    pub fn aggregate_message(&self) -> Option<String> {
        if !self.submission_attempted {
            return None;
        }
        match self.invalid_count() {
            0 => None,
            n => Some(failed_to_save_message(n)),
        }
    }
}

pub fn failed_to_save_message(invalid_count: usize) -> String {
    format!("Error: Failed to save because {invalid_count} fields are invalid.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{contact_schema, DEFAULT_PHONE_PREFIX};

    #[test]
    fn new_state_is_pristine() {
        let schema = contact_schema(DEFAULT_PHONE_PREFIX).unwrap();
        let state = FormState::for_schema(&schema);
        assert_eq!(state.fields().len(), 2);
        assert!(state
            .fields()
            .iter()
            .all(|f| f.status() == FieldStatus::Pristine));
        assert_eq!(state.invalid_count(), 0);
        assert_eq!(state.aggregate_message(), None);
    }

    #[test]
    fn touch_resolves_status() {
        let schema = contact_schema(DEFAULT_PHONE_PREFIX).unwrap();
        let email = &schema.fields()[0];
        let mut field = FieldState::default();

        field.touch(email);
        assert_eq!(field.status(), FieldStatus::Invalid);
        assert_eq!(field.error_message(), Some("Error: Email is required."));

        field.value = "a@b.com".into();
        field.revalidate(email);
        assert_eq!(field.status(), FieldStatus::Valid);
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn aggregate_message_is_derived_from_field_errors() {
        let schema = contact_schema(DEFAULT_PHONE_PREFIX).unwrap();
        let mut state = FormState::for_schema(&schema);
        for (idx, field) in schema.fields().iter().enumerate() {
            state.field_mut(idx).unwrap().touch(field);
        }
        // Errors alone do not produce a summary.
        assert_eq!(state.aggregate_message(), None);

        state.mark_submission_attempted();
        assert_eq!(
            state.aggregate_message().as_deref(),
            Some("Error: Failed to save because 2 fields are invalid.")
        );

        let phone = &schema.fields()[1];
        let slot = state.field_mut(1).unwrap();
        slot.value = "0612345678".into();
        slot.revalidate(phone);
        assert_eq!(
            state.aggregate_message().as_deref(),
            Some("Error: Failed to save because 1 fields are invalid.")
        );
    }
}
