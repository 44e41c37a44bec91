//! Hand-off to the external save collaborator.
//!
//! The form never saves anything itself. Once a submission passes
//! validation the collected values are given to a `Submitter`; a blocked
//! submission never reaches it.

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::{BoxError, FormSchema, FormState};

/// Validated field values, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    values: Vec<(String, String)>,
}

impl Submission {
    pub(crate) fn collect(schema: &FormSchema, state: &FormState) -> Self {
        let values = schema
            .fields()
            .iter()
            .zip(state.fields())
            .map(|(field, slot)| (field.key.clone(), slot.value.clone()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// JSON object keyed by field key.
    pub fn to_json(&self) -> JsonValue {
        let map: JsonMap<String, JsonValue> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
            .collect();
        JsonValue::Object(map)
    }
}

/// External save collaborator.
pub trait Submitter {
    fn save(&mut self, submission: &Submission) -> Result<(), BoxError>;
}

impl<F> Submitter for F
where
    F: FnMut(&Submission) -> Result<(), BoxError>,
{
    fn save(&mut self, submission: &Submission) -> Result<(), BoxError> {
        self(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{contact_schema, DEFAULT_PHONE_PREFIX};
    use serde_json::json;

    #[test]
    fn collects_values_in_schema_order() {
        let schema = contact_schema(DEFAULT_PHONE_PREFIX).unwrap();
        let mut state = FormState::for_schema(&schema);
        state.field_mut(0).unwrap().value = "a@b.com".into();
        state.field_mut(1).unwrap().value = "0612345678".into();

        let submission = Submission::collect(&schema, &state);

        let pairs: Vec<_> = submission.iter().collect();
        assert_eq!(pairs, [("email", "a@b.com"), ("phone", "0612345678")]);
        assert_eq!(submission.get("phone"), Some("0612345678"));
        assert_eq!(submission.get("fax"), None);
        assert_eq!(
            submission.to_json(),
            json!({ "email": "a@b.com", "phone": "0612345678" })
        );
    }

    #[test]
    fn closures_are_submitters() {
        let mut seen = Vec::new();
        let mut sink = |s: &Submission| -> Result<(), BoxError> {
            seen.push(s.len());
            Ok(())
        };
        let schema = contact_schema(DEFAULT_PHONE_PREFIX).unwrap();
        let submission = Submission::collect(&schema, &FormState::for_schema(&schema));
        sink.save(&submission).unwrap();
        assert_eq!(seen, [2]);
    }
}
