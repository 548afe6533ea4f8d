//! Error types shared by the three registries and their sessions.
//!
//! Two classes of failure exist:
//! - [`UnsupportedKind`]: a discriminant outside the known set reached a registry.
//!   This is a caller bug and is never silently defaulted.
//! - [`Rejection`]: user input that failed validation. Recoverable; the failed
//!   operation leaves its session untouched.

/// An unrecognized discriminant was handed to a registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedKind {
    #[error("Report type {0} not supported.")]
    ReportType(String),

    #[error("Export format {0} not supported.")]
    ExportFormat(String),

    #[error("Notification channel {0} not supported.")]
    Channel(String),

    #[error("Unsupported field type: {0}")]
    FieldType(String),
}

impl UnsupportedKind {
    /// The offending discriminant as it was received
    pub fn discriminant(&self) -> &str {
        match self {
            UnsupportedKind::ReportType(kind)
            | UnsupportedKind::ExportFormat(kind)
            | UnsupportedKind::Channel(kind)
            | UnsupportedKind::FieldType(kind) => kind,
        }
    }
}

/// User input refused by a session; the message is shown verbatim to the user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Veuillez entrer un label")]
    BlankLabel,

    #[error("Veuillez entrer un message")]
    BlankMessage,

    #[error("{reason}")]
    Field { field_id: String, reason: String },

    #[error("Champ introuvable: {0}")]
    UnknownField(String),

    #[error("Type de valeur invalide pour {field_id}: {expected} attendu")]
    ValueType { field_id: String, expected: &'static str },
}

impl Rejection {
    /// Human-readable reason, identical to the `Display` output
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Failure of a form-session operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedKind),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_kind_display() {
        assert_eq!(
            UnsupportedKind::ReportType("weekly".to_string()).to_string(),
            "Report type weekly not supported."
        );
        assert_eq!(
            UnsupportedKind::FieldType("color".to_string()).to_string(),
            "Unsupported field type: color"
        );
        assert_eq!(UnsupportedKind::Channel("fax".to_string()).discriminant(), "fax");
    }

    #[test]
    fn test_rejection_reason_is_message_text() {
        let rejection = Rejection::Field {
            field_id: "field_0".to_string(),
            reason: "Email invalide pour \"E\"".to_string(),
        };
        assert_eq!(rejection.reason(), "Email invalide pour \"E\"");
        assert_eq!(Rejection::BlankLabel.reason(), "Veuillez entrer un label");
    }

    #[test]
    fn test_form_error_is_transparent() {
        let err: FormError = Rejection::BlankMessage.into();
        assert_eq!(err.to_string(), "Veuillez entrer un message");

        let err: FormError = UnsupportedKind::FieldType("color".to_string()).into();
        assert!(matches!(err, FormError::Unsupported(_)));
    }
}
