use serde_json::{json, Value};

use crate::error::Rejection;
use super::{is_empty_value, reject, FieldStrategy, FieldType, FormField};

/// Numeric input; zero is a valid answer
pub struct NumberInputField;

/// Date picker holding an ISO date string
pub struct DateField;

/// File picker holding the selected file's metadata
pub struct FileField;

impl FieldStrategy for NumberInputField {
    fn field_type(&self) -> FieldType {
        FieldType::Number
    }

    fn default_value(&self) -> Value {
        json!(0)
    }

    fn validate(&self, field: &FormField) -> Result<(), Rejection> {
        if field.value.is_null() {
            return reject(field, format!("Le champ \"{}\" est requis", field.label));
        }
        Ok(())
    }
}

impl FieldStrategy for DateField {
    fn field_type(&self) -> FieldType {
        FieldType::Date
    }

    fn default_value(&self) -> Value {
        json!("")
    }

    fn validate(&self, field: &FormField) -> Result<(), Rejection> {
        if is_empty_value(&field.value) {
            return reject(field, format!("Le champ \"{}\" est requis", field.label));
        }
        Ok(())
    }
}

impl FieldStrategy for FileField {
    fn field_type(&self) -> FieldType {
        FieldType::File
    }

    fn default_value(&self) -> Value {
        Value::Null
    }

    fn validate(&self, field: &FormField) -> Result<(), Rejection> {
        if is_empty_value(&field.value) {
            return reject(
                field,
                format!("Veuillez sélectionner un fichier pour \"{}\"", field.label),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_zero_is_valid() {
        let field = NumberInputField.build_default("field_0".to_string(), "Age");
        assert!(NumberInputField.is_valid(&field));
    }

    #[test]
    fn test_cleared_number_is_rejected() {
        let mut field = NumberInputField.build_default("field_0".to_string(), "Age");
        field.value = Value::Null;
        assert_eq!(
            NumberInputField.validate(&field).unwrap_err().reason(),
            "Le champ \"Age\" est requis"
        );
    }
}
