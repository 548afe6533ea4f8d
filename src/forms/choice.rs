use serde_json::{json, Value};

use crate::error::Rejection;
use super::{is_empty_value, reject, FieldStrategy, FieldType, FormField};

/// Boolean checkbox, never rejected
pub struct CheckboxField;

/// Radio group with three fixed options
pub struct RadioField;

/// Drop-down with three fixed choices
pub struct SelectField;

fn require_selection(field: &FormField) -> Result<(), Rejection> {
    if is_empty_value(&field.value) {
        return reject(
            field,
            format!("Veuillez sélectionner une option pour \"{}\"", field.label),
        );
    }
    Ok(())
}

impl FieldStrategy for CheckboxField {
    fn field_type(&self) -> FieldType {
        FieldType::Checkbox
    }

    fn default_value(&self) -> Value {
        json!(false)
    }

    fn validate(&self, _field: &FormField) -> Result<(), Rejection> {
        Ok(())
    }
}

impl FieldStrategy for RadioField {
    fn field_type(&self) -> FieldType {
        FieldType::Radio
    }

    fn default_value(&self) -> Value {
        json!("")
    }

    fn options(&self) -> Option<Vec<String>> {
        Some(vec!["Option 1".into(), "Option 2".into(), "Option 3".into()])
    }

    fn validate(&self, field: &FormField) -> Result<(), Rejection> {
        require_selection(field)
    }
}

impl FieldStrategy for SelectField {
    fn field_type(&self) -> FieldType {
        FieldType::Select
    }

    fn default_value(&self) -> Value {
        json!("")
    }

    fn options(&self) -> Option<Vec<String>> {
        Some(vec!["Choix 1".into(), "Choix 2".into(), "Choix 3".into()])
    }

    fn validate(&self, field: &FormField) -> Result<(), Rejection> {
        require_selection(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_checkbox_is_valid() {
        let field = CheckboxField.build_default("field_0".to_string(), "CGU");
        assert_eq!(field.value, json!(false));
        assert!(CheckboxField.is_valid(&field));
    }

    #[test]
    fn test_radio_rejection_reason() {
        let field = RadioField.build_default("field_1".to_string(), "Taille");
        assert_eq!(
            RadioField.validate(&field).unwrap_err().reason(),
            "Veuillez sélectionner une option pour \"Taille\""
        );
    }
}
