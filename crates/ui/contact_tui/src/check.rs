//! `contact check`: fill the form from arguments, press Save, report.

use std::fmt;

use contact_form::{BoxError, ContactForm, FormError, Submission, SubmitOutcome};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::info;

use crate::cli::CheckArgs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub key: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub outcome: SubmitOutcome,
    pub errors: Vec<FieldReport>,
    pub summary: Option<String>,
    pub submission: Option<JsonValue>,
}

/// Keeps the last accepted submission.
#[derive(Default)]
struct Capture(Option<Submission>);

impl contact_form::Submitter for Capture {
    fn save(&mut self, submission: &Submission) -> Result<(), BoxError> {
        self.0 = Some(submission.clone());
        Ok(())
    }
}

pub fn check(form: &mut ContactForm, args: &CheckArgs) -> Result<CheckReport, FormError> {
    form.input("email", args.email.as_str())?;
    form.input("phone", args.phone.as_str())?;

    let mut capture = Capture::default();
    let outcome = form.submit(&mut capture)?;
    info!(ok = outcome.ok, invalid_count = outcome.invalid_count, "check finished");

    let view = form.view();
    let errors = view
        .fields
        .iter()
        .filter_map(|f| {
            f.error_message.as_ref().map(|e| FieldReport {
                key: f.key.clone(),
                error: e.clone(),
            })
        })
        .collect();

    Ok(CheckReport {
        outcome,
        errors,
        summary: view.summary,
        submission: capture.0.map(|s| s.to_json()),
    })
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.errors {
            writeln!(f, "{}: {}", e.key, e.error)?;
        }
        if let Some(summary) = &self.summary {
            writeln!(f, "{summary}")?;
        }
        if let Some(submission) = &self.submission {
            writeln!(f, "Saved: {submission}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn run(email: &str, phone: &str) -> CheckReport {
        let mut form = ContactForm::contact().unwrap();
        let args = CheckArgs {
            email: email.into(),
            phone: phone.into(),
            json: false,
        };
        check(&mut form, &args).unwrap()
    }

    #[test]
    fn empty_values_are_blocked() {
        let report = run("", "");
        assert!(!report.outcome.ok);
        assert_eq!(report.submission, None);
        assert_eq!(
            report.to_string(),
            "email: Error: Email is required.\n\
             phone: Error: Phone number is required.\n\
             Error: Failed to save because 2 fields are invalid.\n"
        );
    }

    #[test]
    fn malformed_values_are_blocked() {
        let report = run("test", "1234567890");
        assert_eq!(report.outcome.invalid_count, 2);
        assert_eq!(
            report.errors,
            vec![
                FieldReport {
                    key: "email".into(),
                    error: "Error: Email must contain @ and . symbols.".into(),
                },
                FieldReport {
                    key: "phone".into(),
                    error: "Error: Phone number must start with 06.".into(),
                },
            ]
        );
    }

    #[test]
    fn valid_values_are_saved() {
        let report = run("a@b.com", "0612345678");
        assert!(report.outcome.ok);
        assert!(report.errors.is_empty());
        assert_eq!(report.summary, None);
        assert_eq!(
            report.submission,
            Some(json!({ "email": "a@b.com", "phone": "0612345678" }))
        );
    }

    #[test]
    fn report_serializes_to_json() {
        let report = run("a@b.com", "");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["outcome"], json!({ "ok": false, "invalid_count": 1 }));
        assert_eq!(value["errors"][0]["key"], "phone");
    }
}
