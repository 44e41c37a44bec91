//! Form schema: the ordered field list plus page-level presentation text.
//!
//! Field order is display order and tab order. Keys must be unique and
//! labels non-empty; both are checked once in `FormSchema::new` so the rest
//! of the crate can rely on them.
use std::collections::HashSet;

use crate::{FormError, FormField, FormatRule, InputKind};

pub const DEFAULT_PHONE_PREFIX: &str = "06";
pub const DEFAULT_SUBMIT_LABEL: &str = "Save";

#[derive(Debug)]
pub struct FormSchema {
    pub title: String,
    pub description: Option<String>,
    pub submit_label: String,
    fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Result<Self, FormError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if field.label.is_empty() {
                return Err(FormError::EmptyLabel(field.key.clone()));
            }
            if !seen.insert(field.key.as_str()) {
                return Err(FormError::DuplicateField(field.key.clone()));
            }
        }
        Ok(Self {
            title: title.into(),
            description: None,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            fields,
        })
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field_by_key(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Display position of a field.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }
}

/// The contact page: a required email and a required phone number whose
/// value has to start with `phone_prefix`.
pub fn contact_schema(phone_prefix: &str) -> Result<FormSchema, FormError> {
    let phone_label = "Phone number";
    let fields = vec![
        FormField::new("email", "Email", InputKind::Email)
            .required()
            .rule(FormatRule::email("Email")),
        FormField::new("phone", phone_label, InputKind::Tel)
            .required()
            .hint(format!("Hint: {phone_label} must start with {phone_prefix}."))
            .rule(FormatRule::starts_with(phone_label, phone_prefix)),
    ];
    Ok(FormSchema::new("Contact page", fields)?.description("Fill the required fields"))
}
