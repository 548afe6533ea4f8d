use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::configuration::NotificationSettings;
use crate::error::Rejection;
use super::{NotificationChannel, NotificationFactory};

/// A notification that went out successfully
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationRecord {
    pub id: u64,
    pub channel: NotificationChannel,
    /// Original message followed by the delivery info
    pub message: String,
    pub icon: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}

/// Notification center session: composer state plus the sent list, newest first
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    /// Channel picked in the composer
    pub selected_channel: NotificationChannel,
    /// Composer input, cleared after a successful send
    pub message: String,
    notifications: VecDeque<NotificationRecord>,
    next_id: u64,
    settings: NotificationSettings,
}

impl NotificationCenter {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            selected_channel: NotificationChannel::Email,
            message: String::new(),
            notifications: VecDeque::new(),
            next_id: 1,
            settings,
        }
    }

    /// Send the composer message on the selected channel.
    ///
    /// A blank message is rejected. A channel that fails to deliver yields
    /// `Ok(None)` and leaves the list and the composer untouched.
    pub fn send_notification(&mut self) -> Result<Option<&NotificationRecord>, Rejection> {
        if self.message.trim().is_empty() {
            tracing::info!("refusing to send a blank notification");
            return Err(Rejection::BlankMessage);
        }

        let strategy = NotificationFactory::create(self.selected_channel, &self.settings);
        let outcome = strategy.send(&self.message);

        if !outcome.success {
            tracing::info!(
                channel = %self.selected_channel,
                info = %outcome.delivery_info,
                "notification not delivered"
            );
            return Ok(None);
        }

        let record = NotificationRecord {
            id: self.next_id,
            channel: self.selected_channel,
            message: format!("{} - {}", self.message, outcome.delivery_info),
            icon: strategy.icon().to_string(),
            title: strategy.title().to_string(),
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.notifications.push_front(record);
        self.message.clear();

        Ok(self.notifications.front())
    }

    /// Select `channel`, fill the composer with `message` and send
    pub fn send(
        &mut self,
        channel: NotificationChannel,
        message: &str,
    ) -> Result<Option<&NotificationRecord>, Rejection> {
        self.selected_channel = channel;
        self.message = message.to_string();
        self.send_notification()
    }

    /// Sent notifications, newest first
    pub fn notifications(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationSettings::default())
    }
}
