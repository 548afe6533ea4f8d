use serde_json::json;
use uuid::Uuid;

use crate::configuration::NotificationSettings;
use super::{DeliveryOutcome, NotificationChannel, NotificationStrategy};

/// Characters per SMS segment
pub const SMS_SEGMENT_LENGTH: usize = 160;

/// SMS delivery through a simulated provider API
pub struct SmsNotification {
    to: String,
    sender: String,
}

impl SmsNotification {
    pub fn new(to: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            sender: sender.into(),
        }
    }

    pub fn from_settings(settings: &NotificationSettings) -> Self {
        Self::new(settings.sms_recipient.clone(), settings.sms_sender.clone())
    }

    /// Number of SMS needed to carry `message`.
    ///
    /// Length is measured in UTF-16 code units.
    pub fn segment_count(message: &str) -> usize {
        message.encode_utf16().count().div_ceil(SMS_SEGMENT_LENGTH)
    }
}

impl NotificationStrategy for SmsNotification {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Sms
    }

    fn send(&self, message: &str) -> DeliveryOutcome {
        let sms_config = json!({
            "to": self.to,
            "message": message,
            "sender": self.sender,
            "encoding": "GSM-7"
        });
        tracing::debug!(config = %sms_config, "sending sms");

        let segments = Self::segment_count(message);
        let api_response = json!({
            "status": "sent",
            "id": format!("SM{}", Uuid::new_v4().simple()),
        });
        tracing::info!(segments, response = %api_response, "sms sent");

        DeliveryOutcome::delivered(format!("{} SMS envoyé(s)", segments))
    }

    fn icon(&self) -> &'static str {
        "📱"
    }

    fn title(&self) -> &'static str {
        "SMS"
    }
}
