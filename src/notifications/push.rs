use chrono::Utc;
use serde_json::json;

use crate::configuration::PlatformCapabilities;
use super::{DeliveryOutcome, NotificationChannel, NotificationStrategy};

/// Push notification via a simulated service worker and FCM
pub struct PushNotification {
    platform: PlatformCapabilities,
}

impl PushNotification {
    pub fn new(platform: PlatformCapabilities) -> Self {
        Self { platform }
    }
}

impl NotificationStrategy for PushNotification {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Push
    }

    fn send(&self, message: &str) -> DeliveryOutcome {
        let push_config = json!({
            "title": "Nouvelle notification",
            "body": message,
            "icon": "/assets/icon.png",
            "badge": "/assets/badge.png",
            "tag": format!("notification-{}", Utc::now().timestamp_millis()),
            "requireInteraction": false,
            "actions": [
                { "action": "view", "title": "Voir" },
                { "action": "dismiss", "title": "Ignorer" }
            ]
        });
        tracing::debug!(config = %push_config, "sending push notification");

        if !self.platform.supports_push() {
            tracing::info!(platform = ?self.platform, "push notifications not supported");
            return DeliveryOutcome::failed("Push non supportée");
        }

        let subscription = json!({ "endpoint": "https://fcm.googleapis.com/..." });
        let fcm_response = json!({ "success": 1, "failure": 0 });
        tracing::info!(subscription = %subscription, response = %fcm_response, "push sent");

        DeliveryOutcome::delivered("Push envoyée via FCM")
    }

    fn icon(&self) -> &'static str {
        "🔔"
    }

    fn title(&self) -> &'static str {
        "Push Notification"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_fails_closed_without_capability() {
        let push = PushNotification::new(PlatformCapabilities::default());
        assert_eq!(push.send("Hi"), DeliveryOutcome::failed("Push non supportée"));

        let partial = PushNotification::new(PlatformCapabilities {
            service_worker: true,
            push_manager: false,
        });
        assert!(!partial.send("Hi").success);
    }

    #[test]
    fn test_push_succeeds_with_capability() {
        let push = PushNotification::new(PlatformCapabilities::supported());
        assert_eq!(push.send("Hi"), DeliveryOutcome::delivered("Push envoyée via FCM"));
    }

    #[test]
    fn test_metadata_does_not_depend_on_outcome() {
        let push = PushNotification::new(PlatformCapabilities::default());
        push.send("Hi");
        assert_eq!(push.icon(), "🔔");
        assert_eq!(push.title(), "Push Notification");
    }
}
