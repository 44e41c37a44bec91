//! Field definitions.
//!
//! Declarative only: key, label, input kind, required flag, hint and format
//! rule are fixed when the form is built. Runtime values and errors live in
//! `state.rs`.
//!
//! ```ignore
//! use contact_form::{FormField, FormatRule, InputKind};
//!
//! let phone = FormField::new("phone", "Phone number", InputKind::Tel)
//!     .required()
//!     .hint("Hint: Phone number must start with 06.")
//!     .rule(FormatRule::starts_with("Phone number", "06"));
//! ```

use serde::Serialize;
use strum::Display;

use crate::FormatRule;

/// Kind of input widget; maps to the HTML `type` attribute of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Tel,
}

impl InputKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
        }
    }
}

/// Declarative description of a form field.
#[derive(Debug)]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub kind: InputKind,
    pub required: bool,
    pub hint: Option<String>,
    pub rule: Option<FormatRule>,
}

impl FormField {
    /// Create an optional field without hint or format rule.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: InputKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            required: false,
            hint: None,
            rule: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach hint text shown beneath the field and read as part of its description.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn rule(mut self, rule: FormatRule) -> Self {
        self.rule = Some(rule);
        self
    }
}
