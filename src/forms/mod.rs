//! Dynamic form builder: field types, their strategies and the form session.
//!
//! Every [`FieldType`] maps to one [`FieldStrategy`] that knows how to build a
//! field with a sensible default value and how to validate a submitted value.
//! [`FormSession`] pairs each field with the strategy that created it, so a
//! field is always validated by the strategy it was built with.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Rejection, UnsupportedKind};

pub mod choice;
pub mod session;
pub mod text;
pub mod typed;
pub mod widgets;

pub use session::FormSession;
pub use widgets::{widget_for, ComponentFactory, InputWidget};

/// Kind of input a form field collects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Textarea,
    Checkbox,
    Radio,
    Select,
    Date,
    File,
}

impl FieldType {
    pub const ALL: [FieldType; 9] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Number,
        FieldType::Textarea,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Select,
        FieldType::Date,
        FieldType::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Textarea => "textarea",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::Date => "date",
            FieldType::File => "file",
        }
    }

    /// Whether `value` has the runtime shape this field type holds
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldType::Text
            | FieldType::Email
            | FieldType::Textarea
            | FieldType::Radio
            | FieldType::Select
            | FieldType::Date => value.is_string(),
            FieldType::Number => value.is_number() || value.is_null(),
            FieldType::Checkbox => value.is_boolean(),
            FieldType::File => value.is_object() || value.is_null(),
        }
    }

    /// Name of the accepted shape, for error messages
    pub fn expected_shape(&self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::Checkbox => "boolean",
            FieldType::File => "object",
            _ => "string",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = UnsupportedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnsupportedKind::FieldType(s.to_string()))
    }
}

/// One field of a dynamic form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormField {
    /// `field_<n>`, unique within a session
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    /// Current value, updated by the presentation layer
    pub value: Value,
    /// Choices, only for radio and select fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Metadata of a file picked in a file field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSelection {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Format the id of the `n`-th field created in a session
pub fn field_id(n: u64) -> String {
    format!("field_{}", n)
}

/// Field strategy trait, one implementation per field type
pub trait FieldStrategy: Send + Sync {
    /// Field type handled by this strategy
    fn field_type(&self) -> FieldType;

    /// Value a freshly built field starts with
    fn default_value(&self) -> Value;

    /// Fixed choices offered by the field, if any
    fn options(&self) -> Option<Vec<String>> {
        None
    }

    /// Check a field's current value; the rejection carries the user-facing reason
    fn validate(&self, field: &FormField) -> Result<(), Rejection>;

    /// Build a new field with this strategy's defaults
    fn build_default(&self, id: String, label: &str) -> FormField {
        FormField {
            id,
            field_type: self.field_type(),
            label: label.to_string(),
            value: self.default_value(),
            options: self.options(),
        }
    }

    fn is_valid(&self, field: &FormField) -> bool {
        self.validate(field).is_ok()
    }
}

/// Factory for creating field strategies
pub struct FieldFactory;

impl FieldFactory {
    /// Create the strategy for a field type
    pub fn create(field_type: FieldType) -> Box<dyn FieldStrategy> {
        match field_type {
            FieldType::Text => Box::new(text::TextInputField),
            FieldType::Email => Box::new(text::EmailInputField),
            FieldType::Number => Box::new(typed::NumberInputField),
            FieldType::Textarea => Box::new(text::TextareaField),
            FieldType::Checkbox => Box::new(choice::CheckboxField),
            FieldType::Radio => Box::new(choice::RadioField),
            FieldType::Select => Box::new(choice::SelectField),
            FieldType::Date => Box::new(typed::DateField),
            FieldType::File => Box::new(typed::FileField),
        }
    }

    /// Get all available field types
    pub fn available_field_types() -> Vec<&'static str> {
        FieldType::ALL.iter().map(FieldType::as_str).collect()
    }
}

/// Look up the strategy for a field type discriminant
pub fn create_field_strategy(field_type: &str) -> Result<Box<dyn FieldStrategy>, UnsupportedKind> {
    let field_type = field_type.parse::<FieldType>()?;
    Ok(FieldFactory::create(field_type))
}

/// Nothing selected or entered: null, false, zero or an empty string
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

pub(crate) fn reject(field: &FormField, reason: String) -> Result<(), Rejection> {
    tracing::info!(field_id = %field.id, %reason, "field rejected");
    Err(Rejection::Field {
        field_id: field.id.clone(),
        reason,
    })
}
