//! Repository for the `notifications` collection.

use atelier_core::error::CoreError;
use atelier_core::ids;
use chrono::Utc;
use validator::Validate;

use crate::models::notification::{
    CreateNotification, MarkNotificationRead, Notification, NotificationCategory, NotificationType,
};
use crate::JsonStore;

pub struct NotificationRepo;

impl NotificationRepo {
    /// List the full broadcast list, newest records last (stored order).
    pub async fn list(store: &JsonStore) -> Result<Vec<Notification>, CoreError> {
        Ok(store.notifications.load().await?)
    }

    /// Append an admin broadcast notification.
    pub async fn create(
        store: &JsonStore,
        input: CreateNotification,
    ) -> Result<Notification, CoreError> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;

        let notification = Notification {
            id: ids::next_string_id(),
            title: input.title,
            message: input.message,
            notification_type: input.notification_type.unwrap_or(NotificationType::Info),
            category: input.category.unwrap_or(NotificationCategory::System),
            is_read: false,
            created_at: Utc::now(),
            action_url: input.action_url,
            action_text: input.action_text,
        };

        let created = notification.clone();
        store
            .notifications
            .update(move |items| {
                items.push(notification);
                Ok(())
            })
            .await?;
        Ok(created)
    }

    /// Mark a single notification as read.
    pub async fn mark_read(
        store: &JsonStore,
        input: MarkNotificationRead,
    ) -> Result<Notification, CoreError> {
        store
            .notifications
            .update(move |items| {
                let notification = items
                    .iter_mut()
                    .find(|n| n.id == input.notification_id)
                    .ok_or_else(|| {
                        CoreError::not_found("Notification", &input.notification_id)
                    })?;
                notification.is_read = true;
                Ok(notification.clone())
            })
            .await
    }

    /// Mark every notification as read; returns how many were unread.
    pub async fn mark_all_read(store: &JsonStore) -> Result<usize, CoreError> {
        store
            .notifications
            .update(|items| {
                let mut marked = 0;
                for notification in items.iter_mut() {
                    if !notification.is_read {
                        notification.is_read = true;
                        marked += 1;
                    }
                }
                Ok(marked)
            })
            .await
    }
}
