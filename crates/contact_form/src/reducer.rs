//! Intent reducer: maps user events onto `FormState` transitions.
//!
//! `reduce` mutates only the form state and returns declarative `Effect`s;
//! running them (publishing announcements, calling the save collaborator) is
//! left to the caller. Intents naming an unknown field are ignored.

use tracing::debug;

use crate::{on_submit, FormSchema, FormState, Submission};

/// User interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Move focus to a field; the field losing focus is blurred first.
    Focus(String),
    /// Tab order, wrapping at the end.
    FocusNext,
    FocusPrev,
    /// Replace a field's value.
    Input { key: String, value: String },
    /// Leave the focused field.
    Blur,
    Submit,
}

/// Side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Message for an assertive live region.
    Announce(String),
    /// Hand the validated values to the save collaborator.
    Save(Submission),
}

pub fn reduce(schema: &FormSchema, state: &mut FormState, intent: Intent) -> Vec<Effect> {
    match intent {
        Intent::Focus(key) => match schema.position(&key) {
            Some(index) => move_focus(schema, state, index),
            None => Vec::new(),
        },
        Intent::FocusNext => {
            let total = schema.field_count();
            if total == 0 {
                return Vec::new();
            }
            let next = state.focused().map_or(0, |i| (i + 1) % total);
            move_focus(schema, state, next)
        }
        Intent::FocusPrev => {
            let total = schema.field_count();
            if total == 0 {
                return Vec::new();
            }
            let prev = match state.focused() {
                Some(0) | None => total - 1,
                Some(i) => i - 1,
            };
            move_focus(schema, state, prev)
        }
        Intent::Input { key, value } => {
            let Some(index) = schema.position(&key) else {
                return Vec::new();
            };
            let field = &schema.fields()[index];
            if let Some(slot) = state.field_mut(index) {
                slot.value = value;
                if slot.touched {
                    slot.revalidate(field);
                }
            }
            Vec::new()
        }
        Intent::Blur => blur(schema, state),
        Intent::Submit => {
            let outcome = on_submit(schema, state);
            if outcome.ok {
                debug!("submission accepted");
                vec![Effect::Save(Submission::collect(schema, state))]
            } else {
                state
                    .aggregate_message()
                    .map(Effect::Announce)
                    .into_iter()
                    .collect()
            }
        }
    }
}

fn move_focus(schema: &FormSchema, state: &mut FormState, index: usize) -> Vec<Effect> {
    if state.focused() == Some(index) {
        return Vec::new();
    }
    let effects = blur(schema, state);
    state.set_focused(Some(index));
    effects
}

fn blur(schema: &FormSchema, state: &mut FormState) -> Vec<Effect> {
    let Some(index) = state.focused() else {
        return Vec::new();
    };
    state.set_focused(None);

    let Some(field) = schema.fields().get(index) else {
        return Vec::new();
    };
    let Some(slot) = state.field_mut(index) else {
        return Vec::new();
    };
    slot.touch(field);
    debug!(field = %field.key, status = %slot.status(), "field blurred");

    slot.error
        .as_ref()
        .map(|e| Effect::Announce(e.message.clone()))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{contact_schema, FieldStatus, DEFAULT_PHONE_PREFIX};

    fn setup() -> (FormSchema, FormState) {
        let schema = contact_schema(DEFAULT_PHONE_PREFIX).unwrap();
        let state = FormState::for_schema(&schema);
        (schema, state)
    }

    fn input(key: &str, value: &str) -> Intent {
        Intent::Input {
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn focus_alone_does_not_touch() {
        let (schema, mut state) = setup();
        let effects = reduce(&schema, &mut state, Intent::Focus("email".into()));
        assert!(effects.is_empty());
        assert_eq!(state.focused(), Some(0));
        assert_eq!(state.fields()[0].status(), FieldStatus::Pristine);
    }

    #[test]
    fn blur_after_focus_reports_required() {
        let (schema, mut state) = setup();
        reduce(&schema, &mut state, Intent::Focus("email".into()));
        let effects = reduce(&schema, &mut state, Intent::Blur);

        assert_eq!(
            effects,
            vec![Effect::Announce("Error: Email is required.".into())]
        );
        assert_eq!(state.focused(), None);
        assert_eq!(
            state.fields()[0].error_message(),
            Some("Error: Email is required.")
        );
        // The other field was never visited.
        assert_eq!(state.fields()[1].status(), FieldStatus::Pristine);
    }

    #[test]
    fn blur_without_focus_is_a_no_op() {
        let (schema, mut state) = setup();
        assert!(reduce(&schema, &mut state, Intent::Blur).is_empty());
        assert!(state.fields().iter().all(|f| !f.touched));
    }

    #[test]
    fn moving_focus_blurs_previous_field() {
        let (schema, mut state) = setup();
        reduce(&schema, &mut state, Intent::Focus("email".into()));
        reduce(&schema, &mut state, input("email", "test"));
        let effects = reduce(&schema, &mut state, Intent::FocusNext);

        assert_eq!(state.focused(), Some(1));
        assert_eq!(
            effects,
            vec![Effect::Announce(
                "Error: Email must contain @ and . symbols.".into()
            )]
        );
    }

    #[test]
    fn focus_traversal_wraps() {
        let (schema, mut state) = setup();
        reduce(&schema, &mut state, Intent::FocusPrev);
        assert_eq!(state.focused(), Some(1));
        reduce(&schema, &mut state, Intent::FocusNext);
        assert_eq!(state.focused(), Some(0));
        reduce(&schema, &mut state, Intent::FocusPrev);
        assert_eq!(state.focused(), Some(1));
    }

    #[test]
    fn refocusing_same_field_keeps_it_untouched() {
        let (schema, mut state) = setup();
        reduce(&schema, &mut state, Intent::Focus("phone".into()));
        let effects = reduce(&schema, &mut state, Intent::Focus("phone".into()));
        assert!(effects.is_empty());
        assert!(!state.fields()[1].touched);
    }

    #[test]
    fn input_on_untouched_field_does_not_validate() {
        let (schema, mut state) = setup();
        reduce(&schema, &mut state, input("phone", "12"));
        assert_eq!(state.fields()[1].value, "12");
        assert_eq!(state.fields()[1].error, None);
    }

    #[test]
    fn input_on_touched_field_revalidates() {
        let (schema, mut state) = setup();
        reduce(&schema, &mut state, Intent::Focus("phone".into()));
        reduce(&schema, &mut state, Intent::Blur);
        assert_eq!(state.fields()[1].status(), FieldStatus::Invalid);

        reduce(&schema, &mut state, input("phone", "0612345678"));
        assert_eq!(state.fields()[1].status(), FieldStatus::Valid);

        reduce(&schema, &mut state, input("phone", "1"));
        assert_eq!(
            state.fields()[1].error_message(),
            Some("Error: Phone number must start with 06.")
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (schema, mut state) = setup();
        let before = state.clone();
        assert!(reduce(&schema, &mut state, Intent::Focus("fax".into())).is_empty());
        assert!(reduce(&schema, &mut state, input("fax", "123")).is_empty());
        assert_eq!(before, state);
    }

    #[test]
    fn blocked_submit_announces_summary() {
        let (schema, mut state) = setup();
        let effects = reduce(&schema, &mut state, Intent::Submit);
        assert_eq!(
            effects,
            vec![Effect::Announce(
                "Error: Failed to save because 2 fields are invalid.".into()
            )]
        );
    }

    #[test]
    fn valid_submit_requests_save() {
        let (schema, mut state) = setup();
        reduce(&schema, &mut state, input("email", "a@b.com"));
        reduce(&schema, &mut state, input("phone", "0612345678"));
        let effects = reduce(&schema, &mut state, Intent::Submit);

        let [Effect::Save(submission)] = effects.as_slice() else {
            panic!("expected a single save effect, got {effects:?}");
        };
        assert_eq!(submission.get("email"), Some("a@b.com"));
        assert_eq!(state.aggregate_message(), None);
    }
}
