use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::configuration::NotificationSettings;
use crate::error::UnsupportedKind;

pub mod center;
pub mod email;
pub mod push;
pub mod slack;
pub mod sms;
pub mod webhook;

pub use center::{NotificationCenter, NotificationRecord};

/// Delivery channel of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
    Slack,
    Webhook,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 5] = [
        NotificationChannel::Email,
        NotificationChannel::Sms,
        NotificationChannel::Push,
        NotificationChannel::Slack,
        NotificationChannel::Webhook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Sms => "sms",
            NotificationChannel::Push => "push",
            NotificationChannel::Slack => "slack",
            NotificationChannel::Webhook => "webhook",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationChannel {
    type Err = UnsupportedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotificationChannel::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| UnsupportedKind::Channel(s.to_string()))
    }
}

/// Result of a simulated send
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// Whether the channel accepted the message
    pub success: bool,
    /// Short description of how the message went out (or why not)
    pub delivery_info: String,
}

impl DeliveryOutcome {
    pub fn delivered(info: impl Into<String>) -> Self {
        Self {
            success: true,
            delivery_info: info.into(),
        }
    }

    pub fn failed(info: impl Into<String>) -> Self {
        Self {
            success: false,
            delivery_info: info.into(),
        }
    }
}

/// Notification strategy trait, one implementation per channel
pub trait NotificationStrategy: Send + Sync {
    /// Channel handled by this strategy
    fn channel(&self) -> NotificationChannel;

    /// Simulate delivery of `message`
    fn send(&self, message: &str) -> DeliveryOutcome;

    /// Display icon, independent of send outcome
    fn icon(&self) -> &'static str;

    /// Display title, independent of send outcome
    fn title(&self) -> &'static str;
}

/// Factory for creating notification strategies
pub struct NotificationFactory;

impl NotificationFactory {
    /// Create the strategy for a channel, configured from `settings`
    pub fn create(
        channel: NotificationChannel,
        settings: &NotificationSettings,
    ) -> Box<dyn NotificationStrategy> {
        match channel {
            NotificationChannel::Email => Box::new(email::EmailNotification::from_settings(settings)),
            NotificationChannel::Sms => Box::new(sms::SmsNotification::from_settings(settings)),
            NotificationChannel::Push => Box::new(push::PushNotification::new(settings.platform)),
            NotificationChannel::Slack => Box::new(slack::SlackNotification::from_settings(settings)),
            NotificationChannel::Webhook => {
                Box::new(webhook::WebhookNotification::new(settings.webhook_url.clone()))
            }
        }
    }

    /// Get all available channels
    pub fn available_channels() -> Vec<&'static str> {
        NotificationChannel::ALL.iter().map(NotificationChannel::as_str).collect()
    }
}

/// Look up the strategy for a channel discriminant, with the built-in
/// channel parameters
pub fn create_notification_strategy(
    channel: &str,
) -> Result<Box<dyn NotificationStrategy>, UnsupportedKind> {
    create_notification_strategy_with(channel, &NotificationSettings::default())
}

/// Look up the strategy for a channel discriminant, configured by `settings`
pub fn create_notification_strategy_with(
    channel: &str,
    settings: &NotificationSettings,
) -> Result<Box<dyn NotificationStrategy>, UnsupportedKind> {
    let channel = channel.parse::<NotificationChannel>()?;
    Ok(NotificationFactory::create(channel, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::PlatformCapabilities;

    #[test]
    fn test_notification_factory_creation() {
        let settings = NotificationSettings::default();
        for channel in NotificationChannel::ALL {
            let strategy = NotificationFactory::create(channel, &settings);
            assert_eq!(strategy.channel(), channel);
        }
    }

    #[test]
    fn test_unknown_channel_is_rejected() {
        let result = create_notification_strategy("fax");
        assert!(matches!(result, Err(UnsupportedKind::Channel(channel)) if channel == "fax"));
    }

    #[test]
    fn test_string_entry_points() {
        let email = create_notification_strategy("email").unwrap();
        assert_eq!(email.send("Bonjour").delivery_info, "Envoyé via smtp.example.com:587");
        assert!(!create_notification_strategy("push").unwrap().send("Bonjour").success);

        let settings = NotificationSettings {
            platform: PlatformCapabilities::supported(),
            ..NotificationSettings::default()
        };
        let push = create_notification_strategy_with("push", &settings).unwrap();
        assert!(push.send("Bonjour").success);
        assert!(create_notification_strategy_with("fax", &settings).is_err());
    }

    #[test]
    fn test_default_send_outcomes() {
        let settings = NotificationSettings::default();
        for channel in NotificationChannel::ALL {
            let outcome = NotificationFactory::create(channel, &settings).send("Bonjour");
            let expected = channel != NotificationChannel::Push;
            assert_eq!(outcome.success, expected, "channel {}", channel);
            assert!(!outcome.delivery_info.is_empty());
        }
    }

    #[test]
    fn test_all_channels_succeed_on_capable_platform() {
        let settings = NotificationSettings {
            platform: PlatformCapabilities::supported(),
            ..NotificationSettings::default()
        };
        for channel in NotificationChannel::ALL {
            assert!(NotificationFactory::create(channel, &settings).send("Bonjour").success);
        }
    }

    #[test]
    fn test_icons_and_titles() {
        let settings = NotificationSettings::default();
        let metadata: Vec<(&str, &str)> = NotificationChannel::ALL
            .iter()
            .map(|c| {
                let strategy = NotificationFactory::create(*c, &settings);
                (strategy.icon(), strategy.title())
            })
            .collect();

        assert_eq!(
            metadata,
            vec![
                ("📧", "Email"),
                ("📱", "SMS"),
                ("🔔", "Push Notification"),
                ("💬", "Message Slack"),
                ("🔗", "Webhook HTTP"),
            ]
        );
    }

    #[test]
    fn test_available_channels() {
        let channels = NotificationFactory::available_channels();
        assert_eq!(channels, vec!["email", "sms", "push", "slack", "webhook"]);
    }
}
