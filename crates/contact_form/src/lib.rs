//! Contact form validation engine.
//!
//! Field validators decide per-field validity (`Required`, `InvalidFormat`),
//! the aggregator forces validation on submit and counts failures, and
//! `view` turns the result into plain data for whatever renders the form.
//!
//! ```ignore
//! use contact_form::ContactForm;
//!
//! let mut form = ContactForm::contact()?;
//! form.input("email", "test")?;
//! form.input("phone", "1234567890")?;
//! let outcome = form.on_submit();
//! assert_eq!(outcome.invalid_count, 2);
//! assert_eq!(
//!     form.aggregate_message().as_deref(),
//!     Some("Error: Failed to save because 2 fields are invalid."),
//! );
//! ```

mod aggregate;
mod error;
mod field;
mod form;
mod reducer;
mod rules;
mod schema;
mod state;
mod submission;
mod validate;
pub mod view;

pub use aggregate::{on_submit, SubmitOutcome};
pub use error::{BoxError, ErrorKind, FieldError, FormError};
pub use field::{FormField, InputKind};
pub use form::ContactForm;
pub use reducer::{reduce, Effect, Intent};
pub use rules::FormatRule;
pub use schema::{contact_schema, FormSchema, DEFAULT_PHONE_PREFIX, DEFAULT_SUBMIT_LABEL};
pub use state::{failed_to_save_message, FieldState, FieldStatus, FormState};
pub use submission::{Submission, Submitter};
pub use validate::validate;
