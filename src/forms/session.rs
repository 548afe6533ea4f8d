use serde_json::{Map, Value};

use crate::error::{FormError, Rejection};
use super::{field_id, FieldFactory, FieldStrategy, FieldType, FileSelection, FormField};

/// Submitted form data, keyed by field id
pub type SubmittedData = Map<String, Value>;

/// Form builder session.
///
/// `fields[i]` was created by `strategies[i]`; both vectors are always
/// modified together so validation can find a field's strategy by position.
pub struct FormSession {
    fields: Vec<FormField>,
    strategies: Vec<Box<dyn FieldStrategy>>,
    field_counter: u64,
    submitted_data: Option<SubmittedData>,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            strategies: Vec::new(),
            field_counter: 0,
            submitted_data: None,
        }
    }

    /// Add a field of type `field_type` labelled `label`.
    ///
    /// The label is checked before the type, so a blank label is reported
    /// even for an unknown type. Nothing changes on error.
    pub fn add_field(&mut self, field_type: &str, label: &str) -> Result<&FormField, FormError> {
        if label.trim().is_empty() {
            tracing::info!(field_type, "refusing field with blank label");
            return Err(Rejection::BlankLabel.into());
        }
        let field_type = field_type.parse::<FieldType>()?;
        Ok(self.push_field(field_type, label))
    }

    /// Typed variant of [`FormSession::add_field`]
    pub fn add_typed_field(&mut self, field_type: FieldType, label: &str) -> Result<&FormField, Rejection> {
        if label.trim().is_empty() {
            tracing::info!(%field_type, "refusing field with blank label");
            return Err(Rejection::BlankLabel);
        }
        Ok(self.push_field(field_type, label))
    }

    fn push_field(&mut self, field_type: FieldType, label: &str) -> &FormField {
        let strategy = FieldFactory::create(field_type);
        let field = strategy.build_default(field_id(self.field_counter), label);
        self.field_counter += 1;

        tracing::debug!(id = %field.id, %field_type, label, "field added");
        self.strategies.push(strategy);
        self.fields.push(field);
        &self.fields[self.fields.len() - 1]
    }

    /// Remove the field with `id`. Returns whether a field was removed.
    pub fn remove_field(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.fields.remove(index);
                self.strategies.remove(index);
                tracing::debug!(id, "field removed");
                true
            }
            None => false,
        }
    }

    /// Update a field's value, as the presentation layer does on user input.
    /// The value must have the shape the field's type holds.
    pub fn set_value(&mut self, id: &str, value: impl Into<Value>) -> Result<(), Rejection> {
        let value = value.into();
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| Rejection::UnknownField(id.to_string()))?;

        if !field.field_type.accepts(&value) {
            return Err(Rejection::ValueType {
                field_id: field.id.clone(),
                expected: field.field_type.expected_shape(),
            });
        }

        field.value = value;
        Ok(())
    }

    /// Record the file picked in a file field
    pub fn attach_file(&mut self, id: &str, file: FileSelection) -> Result<(), Rejection> {
        let value = serde_json::to_value(file).unwrap_or(Value::Null);
        self.set_value(id, value)
    }

    /// Validate every field with its own strategy, in order, stopping at the
    /// first rejection. On success the coerced values become the submitted data.
    pub fn submit(&mut self) -> Result<&SubmittedData, Rejection> {
        let mut data = SubmittedData::new();

        for (field, strategy) in self.fields.iter().zip(&self.strategies) {
            strategy.validate(field)?;
            data.insert(field.id.clone(), coerce(&field.value));
        }

        let payload = Value::Object(data.clone());
        tracing::info!(data = %payload, "form submitted");
        Ok(self.submitted_data.insert(data))
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Data of the last successful submission
    pub fn submitted_data(&self) -> Option<&SubmittedData> {
        self.submitted_data.as_ref()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalise a value by its runtime type: strings are trimmed, everything
/// else is kept as is.
fn coerce(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_creation() {
        let session = FormSession::new();
        assert!(session.is_empty());
        assert!(session.submitted_data().is_none());
    }

    #[test]
    fn test_blank_label_is_no_op() {
        let mut session = FormSession::new();
        assert_eq!(session.add_field("text", ""), Err(FormError::Rejected(Rejection::BlankLabel)));
        assert_eq!(session.add_field("text", "   "), Err(FormError::Rejected(Rejection::BlankLabel)));
        assert!(session.is_empty());

        let field = session.add_field("text", "Name").unwrap();
        assert_eq!(field.id, "field_0");
    }

    #[test]
    fn test_unknown_type_does_not_consume_an_id() {
        let mut session = FormSession::new();
        let err = session.add_field("color", "Teinte").unwrap_err();
        assert!(matches!(err, FormError::Unsupported(_)));
        assert!(session.is_empty());
        assert_eq!(session.add_field("date", "Jour").unwrap().id, "field_0");
    }

    #[test]
    fn test_add_field_assigns_fresh_ids() {
        let mut session = FormSession::new();
        session.add_field("text", "Name").unwrap();
        session.add_field("email", "Mail").unwrap();
        assert_eq!(session.len(), 2);

        let ids: Vec<&str> = session.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["field_0", "field_1"]);
    }

    #[test]
    fn test_remove_field() {
        let mut session = FormSession::new();
        session.add_field("text", "A").unwrap();
        session.add_field("number", "B").unwrap();
        session.add_field("checkbox", "C").unwrap();

        assert!(session.remove_field("field_1"));
        assert_eq!(session.len(), 2);
        assert!(!session.remove_field("field_1"));
        assert!(!session.remove_field("field_42"));
        assert_eq!(session.len(), 2);

        let ids: Vec<&str> = session.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["field_0", "field_2"]);
    }

    #[test]
    fn test_ids_are_never_reused_after_removal() {
        let mut session = FormSession::new();
        session.add_field("text", "A").unwrap();
        session.remove_field("field_0");
        assert_eq!(session.add_field("text", "B").unwrap().id, "field_1");
    }

    #[test]
    fn test_submit_example() {
        let mut session = FormSession::new();
        session.add_field("text", "Name").unwrap();
        session.add_field("number", "Age").unwrap();
        session.add_field("checkbox", "Subscribed").unwrap();

        session.set_value("field_0", "Alice").unwrap();
        session.set_value("field_1", 30).unwrap();
        session.set_value("field_2", true).unwrap();

        let data = session.submit().unwrap().clone();
        assert_eq!(
            Value::Object(data),
            json!({"field_0": "Alice", "field_1": 30, "field_2": true})
        );
        assert!(session.submitted_data().is_some());
    }

    #[test]
    fn test_submit_trims_strings() {
        let mut session = FormSession::new();
        session.add_field("email", "Mail").unwrap();
        session.set_value("field_0", "  a@b.com ").unwrap();

        let data = session.submit().unwrap();
        assert_eq!(data["field_0"], json!("a@b.com"));
    }

    #[test]
    fn test_submit_stops_at_first_rejection() {
        let mut session = FormSession::new();
        session.add_field("text", "Name").unwrap();
        session.add_field("email", "Mail").unwrap();
        session.set_value("field_1", "not-an-email").unwrap();

        let err = session.submit().unwrap_err();
        assert_eq!(
            err,
            Rejection::Field {
                field_id: "field_0".to_string(),
                reason: "Le champ \"Name\" est requis".to_string(),
            }
        );
        assert!(session.submitted_data().is_none());
    }

    #[test]
    fn test_failed_submit_keeps_previous_result() {
        let mut session = FormSession::new();
        session.add_field("text", "Name").unwrap();
        session.set_value("field_0", "Bob").unwrap();
        session.submit().unwrap();

        session.set_value("field_0", "").unwrap();
        assert!(session.submit().is_err());
        assert_eq!(session.submitted_data().map(|d| d["field_0"].clone()), Some(json!("Bob")));
    }

    #[test]
    fn test_validation_uses_position_after_removal() {
        let mut session = FormSession::new();
        session.add_field("email", "Mail").unwrap();
        session.add_field("checkbox", "Ok").unwrap();
        session.remove_field("field_0");

        // The remaining checkbox must still be validated as a checkbox
        let data = session.submit().unwrap();
        assert_eq!(data["field_1"], json!(false));
    }

    #[test]
    fn test_set_value_checks_shape_and_id() {
        let mut session = FormSession::new();
        session.add_field("number", "Age").unwrap();

        assert_eq!(
            session.set_value("field_0", "30"),
            Err(Rejection::ValueType {
                field_id: "field_0".to_string(),
                expected: "number",
            })
        );
        assert_eq!(
            session.set_value("field_9", 1),
            Err(Rejection::UnknownField("field_9".to_string()))
        );
        assert_eq!(session.field("field_0").map(|f| f.value.clone()), Some(json!(0)));
    }

    #[test]
    fn test_attach_file() {
        let mut session = FormSession::new();
        session.add_field("file", "CV").unwrap();
        assert!(session.submit().is_err());

        session
            .attach_file(
                "field_0",
                FileSelection {
                    name: "cv.pdf".to_string(),
                    size: 2048,
                    mime_type: "application/pdf".to_string(),
                },
            )
            .unwrap();

        let data = session.submit().unwrap();
        assert_eq!(data["field_0"], json!({"name": "cv.pdf", "size": 2048, "type": "application/pdf"}));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut a = FormSession::new();
        let mut b = FormSession::new();
        a.add_field("text", "A").unwrap();
        a.add_field("text", "B").unwrap();
        assert_eq!(b.add_field("text", "C").unwrap().id, "field_0");
    }
}
