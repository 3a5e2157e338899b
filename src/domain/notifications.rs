// src/domain/notifications.rs

use crate::domain::record::{Listing, RecordId};
use crate::domain::store::ListingStore;
use chrono::{NaiveDateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub created_at: NaiveDateTime,
}

/// Callback invoked for every emitted notification.
pub type Subscriber = Box<dyn Fn(&Notification) + Send>;

/// Holds the notification list and the single subscriber that is told about
/// each new entry. Registering a subscriber replaces the previous one.
pub struct NotificationEmitter {
    notifications: Vec<Notification>,
    subscriber: Option<Subscriber>,
}

impl std::fmt::Debug for NotificationEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationEmitter")
            .field("notifications", &self.notifications)
            .field("subscribed", &self.subscriber.is_some())
            .finish()
    }
}

impl NotificationEmitter {
    pub fn new(subscriber: Option<Subscriber>) -> Self {
        Self {
            notifications: Vec::new(),
            subscriber,
        }
    }

    /// Installs `subscriber`, returning true if it replaced an earlier one.
    pub fn subscribe(&mut self, subscriber: Subscriber) -> bool {
        self.subscriber.replace(subscriber).is_some()
    }

    pub fn unsubscribe(&mut self) -> bool {
        self.subscriber.take().is_some()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    fn next_id(&self) -> u32 {
        self.notifications.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }

    pub fn emit(&mut self, message: impl Into<String>) -> &Notification {
        let notification = Notification {
            id: self.next_id(),
            message: message.into(),
            created_at: Utc::now().naive_utc(),
        };
        tracing::info!(id = notification.id, message = %notification.message, "notification emitted");
        if let Some(subscriber) = &self.subscriber {
            subscriber(&notification);
        }
        self.notifications.push(notification);
        &self.notifications[self.notifications.len() - 1]
    }

    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Closing the "record created" acknowledgment: bumps the record's
    /// applicant counter and announces it. Returns the new notification id.
    pub fn acknowledge_created<T: Listing>(
        &mut self,
        store: &mut ListingStore<T>,
        id: RecordId,
    ) -> Option<u32> {
        let mut title = None;
        store.modify(id, |record| {
            if record.register_interest() {
                title = Some(record.title().to_string());
            }
        });
        let title = title?;
        let notification = self.emit(format!("New applicant for \"{title}\""));
        Some(notification.id)
    }
}
