//! Presentation contract.
//!
//! Renderers get plain data describing each field the way an accessibility
//! tree would expose it (name, type, required, invalid, description) instead
//! of inspecting widgets. `FormView` is a snapshot; rebuild it after every
//! state change.

use std::fmt;

use serde::Serialize;

use crate::{Effect, FormSchema, FormState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub key: String,
    /// Plain label. Required-ness is exposed through `required`, never as a
    /// `*` suffix on the name.
    pub accessible_name: String,
    pub input_type: &'static str,
    pub required: bool,
    pub invalid: bool,
    pub error_message: Option<String>,
    pub hint: Option<String>,
    /// Hint and error joined by a space, as read after the name.
    pub accessible_description: Option<String>,
    pub value: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub title: String,
    pub description: Option<String>,
    pub submit_label: String,
    pub fields: Vec<FieldView>,
    /// Aggregate error message, present after a blocked submission.
    pub summary: Option<String>,
}

impl FormView {
    pub fn new(schema: &FormSchema, state: &FormState) -> Self {
        let fields = schema
            .fields()
            .iter()
            .zip(state.fields())
            .enumerate()
            .map(|(index, (field, slot))| {
                let error_message = slot.error_message().map(str::to_string);
                let accessible_description = describe(field.hint.as_deref(), error_message.as_deref());
                FieldView {
                    key: field.key.clone(),
                    accessible_name: field.label.clone(),
                    input_type: field.kind.input_type(),
                    required: field.required,
                    invalid: slot.is_invalid(),
                    error_message,
                    hint: field.hint.clone(),
                    accessible_description,
                    value: slot.value.clone(),
                    focused: state.focused() == Some(index),
                }
            })
            .collect();

        Self {
            title: schema.title.clone(),
            description: schema.description.clone(),
            submit_label: schema.submit_label.clone(),
            fields,
            summary: state.aggregate_message(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.key == key)
    }
}

fn describe(hint: Option<&str>, error: Option<&str>) -> Option<String> {
    match (hint, error) {
        (Some(h), Some(e)) => Some(format!("{h} {e}")),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

/// Message for an assertive live region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub message: String,
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assertive: {}", self.message)
    }
}

/// Pick the announcements out of a batch of effects, in order.
pub fn announcements(effects: &[Effect]) -> Vec<Announcement> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Announce(message) => Some(Announcement {
                message: message.clone(),
            }),
            Effect::Save(_) => None,
        })
        .collect()
}
