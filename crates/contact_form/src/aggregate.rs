use serde::Serialize;
use tracing::debug;

use crate::{FormSchema, FormState};

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub ok: bool,
    pub invalid_count: usize,
}

/// Force every field through validation and count the failures.
///
/// All fields end up touched, whatever their previous state. Calling this
/// again without changing any value gives the same outcome.
pub fn on_submit(schema: &FormSchema, state: &mut FormState) -> SubmitOutcome {
    for (index, field) in schema.fields().iter().enumerate() {
        if let Some(slot) = state.field_mut(index) {
            slot.touch(field);
        }
    }
    state.mark_submission_attempted();

    let invalid_count = state.invalid_count();
    debug!(invalid_count, "submission validated");
    SubmitOutcome {
        ok: invalid_count == 0,
        invalid_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{contact_schema, FieldStatus, DEFAULT_PHONE_PREFIX};

    #[test]
    fn submit_touches_every_field() {
        let schema = contact_schema(DEFAULT_PHONE_PREFIX).unwrap();
        let mut state = FormState::for_schema(&schema);

        let outcome = on_submit(&schema, &mut state);

        assert_eq!(outcome, SubmitOutcome { ok: false, invalid_count: 2 });
        assert!(state.fields().iter().all(|f| f.touched));
        assert!(state
            .fields()
            .iter()
            .all(|f| f.status() == FieldStatus::Invalid));
        assert!(state.submission_attempted());
    }

    #[test]
    fn submit_is_idempotent() {
        let schema = contact_schema(DEFAULT_PHONE_PREFIX).unwrap();
        let mut state = FormState::for_schema(&schema);

        let first = on_submit(&schema, &mut state);
        let snapshot = state.clone();
        let second = on_submit(&schema, &mut state);

        assert_eq!(first, second);
        assert_eq!(snapshot, state);
    }
}
