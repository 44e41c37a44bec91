use tracing::info;

use crate::{
    contact_schema, on_submit, reduce, view::FormView, Effect, FieldError, FieldState,
    FormError, FormSchema, FormState, Intent, SubmitOutcome, Submitter,
    DEFAULT_PHONE_PREFIX,
};

/// A form instance: schema plus the state owned by one mounted form.
///
/// Wraps the reducer with key checking so callers get `FormError::UnknownField`
/// instead of a silently ignored intent.
#[derive(Debug)]
pub struct ContactForm {
    schema: FormSchema,
    state: FormState,
}

impl ContactForm {
    pub fn new(schema: FormSchema) -> Self {
        let state = FormState::for_schema(&schema);
        Self { schema, state }
    }

    /// The stock contact page with the default phone prefix.
    pub fn contact() -> Result<Self, FormError> {
        Ok(Self::new(contact_schema(DEFAULT_PHONE_PREFIX)?))
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply an intent as-is (unknown keys are ignored).
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        reduce(&self.schema, &mut self.state, intent)
    }

    pub fn focus(&mut self, key: &str) -> Result<Vec<Effect>, FormError> {
        self.ensure_field(key)?;
        Ok(self.dispatch(Intent::Focus(key.to_string())))
    }

    pub fn input(&mut self, key: &str, value: impl Into<String>) -> Result<Vec<Effect>, FormError> {
        self.ensure_field(key)?;
        Ok(self.dispatch(Intent::Input {
            key: key.to_string(),
            value: value.into(),
        }))
    }

    pub fn blur(&mut self) -> Vec<Effect> {
        self.dispatch(Intent::Blur)
    }

    /// Validate everything and report the outcome without saving.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        on_submit(&self.schema, &mut self.state)
    }

    /// Validate everything and, if the form is valid, pass the values to
    /// `submitter`. A blocked submission never calls it.
    pub fn submit(&mut self, submitter: &mut dyn Submitter) -> Result<SubmitOutcome, FormError> {
        for effect in self.dispatch(Intent::Submit) {
            if let Effect::Save(submission) = effect {
                submitter.save(&submission).map_err(FormError::Submission)?;
                info!(fields = submission.len(), "submission saved");
            }
        }
        let invalid_count = self.state.invalid_count();
        if invalid_count > 0 {
            info!(invalid_count, "submission blocked");
        }
        Ok(SubmitOutcome {
            ok: invalid_count == 0,
            invalid_count,
        })
    }

    pub fn field(&self, key: &str) -> Result<&FieldState, FormError> {
        let index = self.ensure_field(key)?;
        self.state
            .field(index)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }

    pub fn error(&self, key: &str) -> Option<&FieldError> {
        self.field(key).ok().and_then(|f| f.error.as_ref())
    }

    pub fn aggregate_message(&self) -> Option<String> {
        self.state.aggregate_message()
    }

    /// Presentation snapshot of the whole form.
    pub fn view(&self) -> FormView {
        FormView::new(&self.schema, &self.state)
    }

    fn ensure_field(&self, key: &str) -> Result<usize, FormError> {
        self.schema
            .position(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }
}
