use serde_json::{json, Value};

use crate::error::Rejection;
use super::{reject, FieldStrategy, FieldType, FormField};

/// Single-line text input, required
pub struct TextInputField;

/// Multi-line text input, required
pub struct TextareaField;

/// Email input; the value must contain an `@`
pub struct EmailInputField;

fn is_blank(value: &Value) -> bool {
    value.as_str().map_or(true, |s| s.trim().is_empty())
}

impl FieldStrategy for TextInputField {
    fn field_type(&self) -> FieldType {
        FieldType::Text
    }

    fn default_value(&self) -> Value {
        json!("")
    }

    fn validate(&self, field: &FormField) -> Result<(), Rejection> {
        if is_blank(&field.value) {
            return reject(field, format!("Le champ \"{}\" est requis", field.label));
        }
        Ok(())
    }
}

impl FieldStrategy for TextareaField {
    fn field_type(&self) -> FieldType {
        FieldType::Textarea
    }

    fn default_value(&self) -> Value {
        json!("")
    }

    fn validate(&self, field: &FormField) -> Result<(), Rejection> {
        if is_blank(&field.value) {
            return reject(field, format!("Le champ \"{}\" est requis", field.label));
        }
        Ok(())
    }
}

impl FieldStrategy for EmailInputField {
    fn field_type(&self) -> FieldType {
        FieldType::Email
    }

    fn default_value(&self) -> Value {
        json!("")
    }

    fn validate(&self, field: &FormField) -> Result<(), Rejection> {
        let has_at = field.value.as_str().is_some_and(|s| s.contains('@'));
        if !has_at {
            return reject(field, format!("Email invalide pour \"{}\"", field.label));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_rejection_reason() {
        let field = TextInputField.build_default("field_0".to_string(), "Nom");
        let err = TextInputField.validate(&field).unwrap_err();
        assert_eq!(
            err,
            Rejection::Field {
                field_id: "field_0".to_string(),
                reason: "Le champ \"Nom\" est requis".to_string(),
            }
        );
    }

    #[test]
    fn test_email_needs_only_an_at_sign() {
        let mut field = EmailInputField.build_default("field_0".to_string(), "E");
        field.value = json!("@");
        assert!(EmailInputField.is_valid(&field));
    }
}
