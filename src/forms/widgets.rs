use serde::{Deserialize, Serialize};

use super::FieldType;

/// Input widget the presentation layer renders for a field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InputWidget {
    TextInput,
    EmailInput,
    NumberInput,
    Textarea,
    CheckboxInput,
    RadioInput,
    Select,
    DateInput,
    FileInput,
}

impl InputWidget {
    /// Field type this widget edits
    pub fn field_type(&self) -> FieldType {
        match self {
            InputWidget::TextInput => FieldType::Text,
            InputWidget::EmailInput => FieldType::Email,
            InputWidget::NumberInput => FieldType::Number,
            InputWidget::Textarea => FieldType::Textarea,
            InputWidget::CheckboxInput => FieldType::Checkbox,
            InputWidget::RadioInput => FieldType::Radio,
            InputWidget::Select => FieldType::Select,
            InputWidget::DateInput => FieldType::Date,
            InputWidget::FileInput => FieldType::File,
        }
    }

    /// Markup element used to render the widget, e.g. `input[type=email]`
    pub fn element(&self) -> &'static str {
        match self {
            InputWidget::TextInput => "input[type=text]",
            InputWidget::EmailInput => "input[type=email]",
            InputWidget::NumberInput => "input[type=number]",
            InputWidget::Textarea => "textarea",
            InputWidget::CheckboxInput => "input[type=checkbox]",
            InputWidget::RadioInput => "input[type=radio]",
            InputWidget::Select => "select",
            InputWidget::DateInput => "input[type=date]",
            InputWidget::FileInput => "input[type=file]",
        }
    }
}

impl From<FieldType> for InputWidget {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => InputWidget::TextInput,
            FieldType::Email => InputWidget::EmailInput,
            FieldType::Number => InputWidget::NumberInput,
            FieldType::Textarea => InputWidget::Textarea,
            FieldType::Checkbox => InputWidget::CheckboxInput,
            FieldType::Radio => InputWidget::RadioInput,
            FieldType::Select => InputWidget::Select,
            FieldType::Date => InputWidget::DateInput,
            FieldType::File => InputWidget::FileInput,
        }
    }
}

/// Factory choosing the widget for a field type discriminant
pub struct ComponentFactory;

impl ComponentFactory {
    /// Widget for `selected_type`. Unknown types render as a text input;
    /// this is the only lookup in the crate with a fallback.
    pub fn create_component(selected_type: &str) -> InputWidget {
        match selected_type.parse::<FieldType>() {
            Ok(field_type) => field_type.into(),
            Err(_) => {
                tracing::debug!(selected_type, "unknown field type, rendering as text input");
                InputWidget::TextInput
            }
        }
    }
}

/// Widget that renders a field type discriminant, text input when unknown
pub fn widget_for(discriminant: &str) -> InputWidget {
    ComponentFactory::create_component(discriminant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_map_to_their_widget() {
        for field_type in FieldType::ALL {
            let widget = ComponentFactory::create_component(field_type.as_str());
            assert_eq!(widget.field_type(), field_type);
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_text_input() {
        assert_eq!(ComponentFactory::create_component("color"), InputWidget::TextInput);
        assert_eq!(ComponentFactory::create_component(""), InputWidget::TextInput);
        assert_eq!(widget_for("color"), InputWidget::TextInput);
    }

    #[test]
    fn test_widget_for_known_types() {
        assert_eq!(widget_for("file"), InputWidget::FileInput);
        assert_eq!(widget_for("select").element(), "select");
    }

    #[test]
    fn test_widget_elements() {
        assert_eq!(InputWidget::from(FieldType::Email).element(), "input[type=email]");
        assert_eq!(InputWidget::Textarea.element(), "textarea");
    }
}
