use chrono::Utc;
use serde_json::json;
use url::Url;

use super::{DeliveryOutcome, NotificationChannel, NotificationStrategy};

/// Simulated HTTP status returned by the endpoint
const SIMULATED_STATUS: u16 = 200;

/// JSON POST to a fixed endpoint
pub struct WebhookNotification {
    url: Url,
}

impl WebhookNotification {
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

impl NotificationStrategy for WebhookNotification {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Webhook
    }

    fn send(&self, message: &str) -> DeliveryOutcome {
        let now = Utc::now();
        let webhook_config = json!({
            "url": self.url.as_str(),
            "method": "POST",
            "headers": {
                "Content-Type": "application/json",
                "X-Webhook-Signature": "sha256=...",
                "Authorization": "Bearer token_12345"
            },
            "payload": {
                "event": "notification.sent",
                "message": message,
                "timestamp": now.to_rfc3339(),
                "source": "notification-center"
            },
            "timeout": 5000,
            "retries": 3
        });
        tracing::debug!(config = %webhook_config, "POST {}", self.url);

        let response = json!({
            "status": SIMULATED_STATUS,
            "data": { "received": true, "id": format!("wh_{}", now.timestamp_millis()) }
        });
        tracing::info!(response = %response, "webhook called");

        DeliveryOutcome::delivered(format!("Webhook appelé ({})", SIMULATED_STATUS))
    }

    fn icon(&self) -> &'static str {
        "🔗"
    }

    fn title(&self) -> &'static str {
        "Webhook HTTP"
    }
}
