use serde_json::json;

use crate::configuration::NotificationSettings;
use super::{DeliveryOutcome, NotificationChannel, NotificationStrategy};

/// Email delivery through a simulated SMTP relay
pub struct EmailNotification {
    smtp_server: String,
    from: String,
    to: String,
}

impl EmailNotification {
    pub fn new(smtp_server: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            smtp_server: smtp_server.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from_settings(settings: &NotificationSettings) -> Self {
        Self::new(
            settings.smtp_server.clone(),
            settings.email_sender.clone(),
            settings.email_recipient.clone(),
        )
    }

    // The relay always accepts our credentials
    fn authenticate(&self) -> bool {
        true
    }
}

impl NotificationStrategy for EmailNotification {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Email
    }

    fn send(&self, message: &str) -> DeliveryOutcome {
        let email_config = json!({
            "from": self.from,
            "to": self.to,
            "subject": "Notification",
            "body": message,
            "html": format!("<p>{}</p>", message),
            "priority": "normal"
        });
        tracing::debug!(config = %email_config, "sending email");

        if !self.authenticate() {
            return DeliveryOutcome::failed(format!("Authentification refusée par {}", self.smtp_server));
        }

        tracing::info!(server = %self.smtp_server, "email sent");
        DeliveryOutcome::delivered(format!("Envoyé via {}", self.smtp_server))
    }

    fn icon(&self) -> &'static str {
        "📧"
    }

    fn title(&self) -> &'static str {
        "Email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_delivery_info_names_relay() {
        let email = EmailNotification::new("mail.internal:25", "a@x.com", "b@x.com");
        let outcome = email.send("Hello");
        assert!(outcome.success);
        assert_eq!(outcome.delivery_info, "Envoyé via mail.internal:25");
    }
}
