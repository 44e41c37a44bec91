//! Format rules: named predicates deciding whether a non-empty value has an
//! acceptable shape.
//!
//! A rule never sees empty values; emptiness is the business of the
//! `required` flag (see `validate`).
//!
//! ```ignore
//! use contact_form::FormatRule;
//!
//! let zip = FormatRule::new("Error: Zip code must have 5 digits.", |v| {
//!     v.len() == 5 && v.chars().all(|c| c.is_ascii_digit())
//! });
//! assert!(zip.accepts("12345"));
//! ```

use std::fmt;

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

pub struct FormatRule {
    message: String,
    predicate: Predicate,
}

impl FormatRule {
    /// Build a rule from a predicate and the message shown when it rejects a value.
    pub fn new(
        message: impl Into<String>,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Email shape check: the value must contain both `@` and `.`.
    pub fn email(label: &str) -> Self {
        Self::new(format!("Error: {label} must contain @ and . symbols."), |v| {
            v.contains('@') && v.contains('.')
        })
    }

    /// Prefix check, e.g. a phone number that has to start with `06`.
    pub fn starts_with(label: &str, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let message = format!("Error: {label} must start with {prefix}.");
        Self::new(message, move |v| v.starts_with(prefix.as_str()))
    }

    pub fn accepts(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
