use chrono::Utc;
use serde_json::json;
use url::Url;

use crate::configuration::NotificationSettings;
use super::{DeliveryOutcome, NotificationChannel, NotificationStrategy};

/// Slack post through a simulated incoming webhook
pub struct SlackNotification {
    channel: String,
    username: String,
    webhook_url: Url,
}

impl SlackNotification {
    pub fn new(channel: impl Into<String>, username: impl Into<String>, webhook_url: Url) -> Self {
        Self {
            channel: channel.into(),
            username: username.into(),
            webhook_url,
        }
    }

    pub fn from_settings(settings: &NotificationSettings) -> Self {
        Self::new(
            settings.slack_channel.clone(),
            settings.slack_username.clone(),
            settings.slack_webhook_url.clone(),
        )
    }
}

impl NotificationStrategy for SlackNotification {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Slack
    }

    fn send(&self, message: &str) -> DeliveryOutcome {
        let slack_config = json!({
            "channel": self.channel,
            "username": self.username,
            "icon_emoji": ":bell:",
            "text": message,
            "attachments": [{
                "color": "#36a64f",
                "title": "Notification Système",
                "text": message,
                "footer": "MyApp",
                "ts": Utc::now().timestamp()
            }]
        });
        tracing::debug!(config = %slack_config, url = %self.webhook_url, "posting to slack");

        let slack_response = json!({ "ok": true });
        if slack_response["ok"] != true {
            return DeliveryOutcome::failed(format!("Échec de l'envoi sur {}", self.channel));
        }

        tracing::info!(channel = %self.channel, "slack message posted");
        DeliveryOutcome::delivered(format!("Posté sur {}", self.channel))
    }

    fn icon(&self) -> &'static str {
        "💬"
    }

    fn title(&self) -> &'static str {
        "Message Slack"
    }
}
